//! The in-memory student registry
//!
//! Records are kept in insertion order. Rolls are unique; every lookup is a
//! linear scan, which is plenty for a class list.

use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::persistence;
use crate::student::{Student, StudentUpdate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    students: Vec<Student>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Build a registry from records, rejecting blanks and duplicate rolls
    pub fn from_records(records: impl IntoIterator<Item = Student>) -> Result<Self> {
        let mut registry = Self::new();
        for record in records {
            registry.add(record)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// All records in registry order
    pub fn records(&self) -> &[Student] {
        &self.students
    }

    /// Append a record
    ///
    /// Text fields are trimmed. Fails if the roll or name is blank, or if the
    /// roll is already taken; the registry is left unchanged in either case.
    pub fn add(&mut self, mut student: Student) -> Result<()> {
        student.normalize();
        if let Some(field) = student.missing_field() {
            return Err(RegistryError::MissingField(field));
        }
        if self.position(&student.roll).is_some() {
            return Err(RegistryError::DuplicateKey(student.roll));
        }
        log::debug!("Added student {} ({})", student.roll, student.name);
        self.students.push(student);
        Ok(())
    }

    /// Exact match on roll
    pub fn find_by_roll(&self, roll: &str) -> Option<&Student> {
        self.position(roll).map(|i| &self.students[i])
    }

    /// Case-insensitive substring match on name, in registry order
    pub fn find_by_name(&self, query: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.name_contains(query))
            .collect()
    }

    /// Apply a partial update to the record with this roll
    pub fn update(&mut self, roll: &str, fields: &StudentUpdate) -> Result<&Student> {
        let index = self
            .position(roll)
            .ok_or_else(|| RegistryError::NotFound(roll.trim().to_string()))?;
        fields.apply(&mut self.students[index]);
        log::debug!("Updated student {}", self.students[index].roll);
        Ok(&self.students[index])
    }

    /// Remove and return the record with this roll
    pub fn delete(&mut self, roll: &str) -> Result<Student> {
        let index = self
            .position(roll)
            .ok_or_else(|| RegistryError::NotFound(roll.trim().to_string()))?;
        let student = self.students.remove(index);
        log::debug!("Deleted student {}", student.roll);
        Ok(student)
    }

    /// Write every record to `path` as a JSON array
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        persistence::write_students(path, &self.students)?;
        log::info!("Saved {} students to {}", self.len(), path.display());
        Ok(())
    }

    /// Replace the contents of this registry with the records in `path`
    ///
    /// On error the registry keeps its current records.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.students = persistence::read_students(path)?;
        log::info!("Loaded {} students from {}", self.len(), path.display());
        Ok(())
    }

    /// Load `path`, falling back to an empty registry on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut registry = Self::new();
        match registry.load(path) {
            Ok(()) => registry,
            Err(RegistryError::FileNotFound(_)) => {
                log::info!("No data file at {}, starting empty", path.display());
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not load {}: {}; starting empty", path.display(), e);
                Self::new()
            }
        }
    }

    fn position(&self, roll: &str) -> Option<usize> {
        let roll = roll.trim();
        self.students.iter().position(|s| s.roll == roll)
    }
}
