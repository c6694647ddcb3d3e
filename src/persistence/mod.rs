//! Save/load of the registry as a JSON document
//!
//! Features:
//! - Pretty-printed JSON array, one object per record
//! - Versioned envelope accepted on read
//! - Write to a temporary sibling, then rename over the target

pub mod envelope;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};
use crate::student::Student;

pub use envelope::SCHEMA_VERSION;

/// Read and validate every record in `path`
pub fn read_students(path: &Path) -> Result<Vec<Student>> {
    let bytes = fs::read(path).map_err(|e| RegistryError::io(path, e))?;
    let document: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| RegistryError::parse(path, e))?;
    let mut records = envelope::decode(document).map_err(|e| RegistryError::parse(path, e))?;
    envelope::validate(&mut records).map_err(|e| RegistryError::parse(path, e))?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write `records` to `path`, replacing any existing file
pub fn write_students(path: &Path, records: &[Student]) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(records).map_err(|e| RegistryError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    bytes.push(b'\n');

    let tmp = temp_path(path);
    fs::write(&tmp, &bytes).map_err(|e| RegistryError::Io {
        path: tmp.clone(),
        source: e,
    })?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(RegistryError::Io {
            path: path.to_path_buf(),
            source: e,
        });
    }
    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
