//! Student Registry - a console student record manager
//!
//! Core modules:
//! - `registry`: Ordered in-memory records (add, find, update, delete)
//! - `student`: Record type and partial updates
//! - `persistence`: JSON save/load with a versioned layout
//! - `settings`: Data file location and prompt preferences
//! - `ui`: Menu loop and table output

pub mod error;
pub mod persistence;
pub mod registry;
pub mod settings;
pub mod student;
pub mod ui;

pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use settings::Settings;
pub use student::{Student, StudentUpdate};

/// Default data file, relative to the working directory
pub const DATA_FILE: &str = "data.json";
