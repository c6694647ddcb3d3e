//! Interactive menu loop
//!
//! Reads choices and field values line by line and drives a [`Registry`].
//! Registry errors are printed and the loop continues; only a failure of the
//! input or output stream ends it. End of input leaves without saving.

use std::io::{self, BufRead, Write};

use super::menu::{MENU_LINE, MenuChoice};
use super::table::write_table;
use crate::registry::Registry;
use crate::settings::Settings;
use crate::student::{Student, StudentUpdate};

enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Consume the console, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until Exit or end of input
    pub fn run(&mut self, registry: &mut Registry) -> io::Result<()> {
        loop {
            match self.step(registry) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    log::info!("Input closed, leaving without saving");
                    writeln!(self.output, "\nGoodbye!")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self, registry: &mut Registry) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Student Management ---")?;
        writeln!(self.output, "{}", MENU_LINE)?;
        let line = self.prompt("Choice: ")?;
        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(self.output, "Invalid choice. Try again.")?;
            return Ok(Flow::Continue);
        };
        log::debug!("Menu choice: {}", choice.as_str());

        match choice {
            MenuChoice::Add => self.add(registry)?,
            MenuChoice::View => self.view(registry)?,
            MenuChoice::Search => self.search(registry)?,
            MenuChoice::Update => self.update(registry)?,
            MenuChoice::Delete => self.delete(registry)?,
            MenuChoice::Save => {
                self.save(registry)?;
            }
            MenuChoice::Exit => return self.exit(registry),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, registry: &mut Registry) -> io::Result<()> {
        writeln!(self.output, "Add student")?;
        let roll = self.prompt("Roll no: ")?;
        if registry.find_by_roll(&roll).is_some() {
            writeln!(self.output, "Roll no already exists.")?;
            return Ok(());
        }
        let name = self.prompt("Name: ")?;
        let grade = self.prompt("Grade (optional): ")?;
        let age = self.prompt("Age (optional): ")?;

        match registry.add(Student::new(roll, name).with_grade(grade).with_age(age)) {
            Ok(()) => writeln!(self.output, "Added."),
            Err(e) => writeln!(self.output, "Failed to add: {}.", e),
        }
    }

    fn view(&mut self, registry: &Registry) -> io::Result<()> {
        if registry.is_empty() {
            return writeln!(self.output, "No records.");
        }
        write_table(&mut self.output, registry.iter())
    }

    fn search(&mut self, registry: &Registry) -> io::Result<()> {
        writeln!(self.output, "Search")?;
        let mode = self.prompt("Search by (1) Roll no or (2) Name? ")?;
        match mode.as_str() {
            "1" => {
                let roll = self.prompt("Enter roll no: ")?;
                match registry.find_by_roll(&roll) {
                    Some(s) => write_table(&mut self.output, [s]),
                    None => writeln!(self.output, "Not found."),
                }
            }
            "2" => {
                let query = self.prompt("Enter part of name: ")?;
                let matches = registry.find_by_name(&query);
                if matches.is_empty() {
                    writeln!(self.output, "No matches.")
                } else {
                    write_table(&mut self.output, matches)
                }
            }
            _ => writeln!(self.output, "Invalid choice."),
        }
    }

    fn update(&mut self, registry: &mut Registry) -> io::Result<()> {
        writeln!(self.output, "Update student")?;
        let roll = self.prompt("Roll to update: ")?;
        let Some(current) = registry.find_by_roll(&roll).cloned() else {
            return writeln!(self.output, "Not found.");
        };

        let fields = StudentUpdate {
            name: Some(self.prompt(&format!("Name [{}]: ", current.name))?),
            grade: Some(self.prompt(&format!("Grade [{}]: ", current.grade))?),
            age: Some(self.prompt(&format!("Age [{}]: ", current.age))?),
        };
        if fields.is_noop() {
            return writeln!(self.output, "Nothing changed.");
        }
        match registry.update(&current.roll, &fields) {
            Ok(_) => writeln!(self.output, "Updated."),
            Err(e) => writeln!(self.output, "Failed to update: {}.", e),
        }
    }

    fn delete(&mut self, registry: &mut Registry) -> io::Result<()> {
        writeln!(self.output, "Delete student")?;
        let roll = self.prompt("Roll to delete: ")?;
        let Some(current) = registry.find_by_roll(&roll).cloned() else {
            return writeln!(self.output, "Not found.");
        };

        if self.settings.confirm_delete {
            let question = format!("Delete {} (roll {})? (y/N): ", current.name, current.roll);
            if !self.confirm(&question)? {
                return writeln!(self.output, "Cancelled.");
            }
        }
        match registry.delete(&current.roll) {
            Ok(_) => writeln!(self.output, "Deleted."),
            Err(e) => writeln!(self.output, "Failed to delete: {}.", e),
        }
    }

    /// Save to the data file, returning whether it succeeded
    fn save(&mut self, registry: &Registry) -> io::Result<bool> {
        let path = &self.settings.data_file;
        match registry.save(path) {
            Ok(()) => {
                writeln!(self.output, "Saved to {}.", path.display())?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                writeln!(self.output, "Save failed: {}.", e)?;
                Ok(false)
            }
        }
    }

    /// A failed save on exit returns to the menu
    fn exit(&mut self, registry: &Registry) -> io::Result<Flow> {
        if self.settings.prompt_save_on_exit {
            let wants_save = match self.confirm("Save before exit? (y/N): ") {
                Ok(answer) => answer,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => false,
                Err(e) => return Err(e),
            };
            if wants_save && !self.save(registry)? {
                return Ok(Flow::Continue);
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(Flow::Exit)
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.prompt(question)?.eq_ignore_ascii_case("y"))
    }

    /// Print `label` and read one trimmed line
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }
}
