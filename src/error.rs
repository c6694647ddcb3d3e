//! Error types for registry operations
//!
//! Every failure the registry can report is a variant of [`RegistryError`].
//! None of them are fatal: the console prints the message and carries on.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A record with this roll is already registered
    #[error("roll no {0} already exists")]
    DuplicateKey(String),

    /// No record has this roll
    #[error("no student with roll no {0}")]
    NotFound(String),

    /// A required field was blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The data file does not exist
    #[error("data file {} not found", .0.display())]
    FileNotFound(PathBuf),

    /// The data file exists but is not a registry document
    #[error("cannot parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// Reading or writing the data file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RegistryError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap an I/O error, mapping `NotFound` to [`RegistryError::FileNotFound`]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            RegistryError::FileNotFound(path)
        } else {
            RegistryError::Io { path, source }
        }
    }
}
