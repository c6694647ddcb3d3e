//! Student records and partial updates

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys written for the named fields, plus the legacy roll key
const RESERVED_KEYS: [&str; 5] = ["roll", "roll_no", "name", "grade", "age"];

/// A single student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within a registry
    #[serde(alias = "roll_no", deserialize_with = "scalar_string")]
    pub roll: String,
    pub name: String,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub grade: String,
    #[serde(default, deserialize_with = "optional_scalar_string")]
    pub age: String,
    /// Unrecognised keys from the data file, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn new(roll: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            roll: roll.into(),
            name: name.into(),
            grade: String::new(),
            age: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    /// Trim every text field in place and drop `extra` keys that would
    /// shadow a named field when serialized
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.roll);
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.grade);
        trim_in_place(&mut self.age);
        for key in RESERVED_KEYS {
            self.extra.remove(key);
        }
    }

    /// Name of the first required field that is blank, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.roll.trim().is_empty() {
            Some("roll no")
        } else if self.name.trim().is_empty() {
            Some("name")
        } else {
            None
        }
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, query: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

/// Fields to change on an existing record
///
/// `None` or a blank value leaves the field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub age: Option<String>,
}

impl StudentUpdate {
    /// True when applying this update would change nothing
    pub fn is_noop(&self) -> bool {
        [&self.name, &self.grade, &self.age]
            .iter()
            .all(|field| supplied(field).is_none())
    }

    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = supplied(&self.name) {
            student.name = name.to_string();
        }
        if let Some(grade) = supplied(&self.grade) {
            student.grade = grade.to_string();
        }
        if let Some(age) = supplied(&self.age) {
            student.age = age.to_string();
        }
    }
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}

/// JSON scalars accepted where the record stores text
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn optional_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_blank_fields() {
        let mut s = Student::new("102", "Bhavani").with_grade("B").with_age("16");
        let update = StudentUpdate {
            name: Some("Bhavani R".into()),
            grade: Some("   ".into()),
            age: None,
        };
        update.apply(&mut s);
        assert_eq!(s.name, "Bhavani R");
        assert_eq!(s.grade, "B");
        assert_eq!(s.age, "16");
    }

    #[test]
    fn test_update_trims_supplied_values() {
        let mut s = Student::new("1", "A");
        StudentUpdate {
            grade: Some("  A+ ".into()),
            ..Default::default()
        }
        .apply(&mut s);
        assert_eq!(s.grade, "A+");
    }

    #[test]
    fn test_noop_update() {
        assert!(StudentUpdate::default().is_noop());
        assert!(
            StudentUpdate {
                name: Some("".into()),
                ..Default::default()
            }
            .is_noop()
        );
        assert!(
            !StudentUpdate {
                age: Some("17".into()),
                ..Default::default()
            }
            .is_noop()
        );
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let s = Student::new("1", "Asha Verma");
        assert!(s.name_contains("asha"));
        assert!(s.name_contains(" VER "));
        assert!(s.name_contains(""));
        assert!(!s.name_contains("bob"));
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(Student::new(" ", "A").missing_field(), Some("roll no"));
        assert_eq!(Student::new("1", "").missing_field(), Some("name"));
        assert_eq!(Student::new("1", "A").missing_field(), None);
    }

    #[test]
    fn test_deserialize_numeric_roll_and_legacy_key() {
        let s: Student = serde_json::from_str(r#"{"roll_no": 101, "name": "Asha", "age": 15}"#)
            .expect("valid record");
        assert_eq!(s.roll, "101");
        assert_eq!(s.age, "15");
        assert_eq!(s.grade, "");
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_null_optional_field_is_empty() {
        let s: Student = serde_json::from_str(r#"{"roll": "1", "name": "A", "grade": null}"#)
            .expect("valid record");
        assert_eq!(s.grade, "");
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"roll":"101","name":"Asha","grade":"A","age":"","house":"Blue","marks":[90,85]}"#;
        let s: Student = serde_json::from_str(json).expect("valid record");
        assert_eq!(s.extra.get("house"), Some(&Value::from("Blue")));

        let back: Student =
            serde_json::from_str(&serde_json::to_string(&s).expect("serialize")).expect("reparse");
        assert_eq!(back, s);
    }

    #[test]
    fn test_normalize_drops_shadowing_extra_keys() {
        let mut s = Student::new("1", "A");
        s.extra.insert("name".into(), Value::from("Other"));
        s.extra.insert("roll_no".into(), Value::from(9));
        s.extra.insert("house".into(), Value::from("Blue"));
        s.normalize();

        assert_eq!(s.extra.len(), 1);
        let back: Student =
            serde_json::from_str(&serde_json::to_string(&s).expect("serialize")).expect("reparse");
        assert_eq!(back, s);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(serde_json::from_str::<Student>(r#"{"roll": "1"}"#).is_err());
    }
}
