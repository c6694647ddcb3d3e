//! On-disk document layout
//!
//! The registry is written as a bare JSON array of records. On read we also
//! accept a versioned envelope: `{"version": 1, "students": [...]}`.

use serde::Deserialize;
use serde_json::Value;

use crate::student::Student;

/// Schema version of the record layout
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    students: Vec<Student>,
}

/// Decode a parsed document into records, in file order
pub fn decode(document: Value) -> Result<Vec<Student>, String> {
    let is_envelope = matches!(&document, Value::Object(map) if map.contains_key("version"));
    if document.is_array() {
        serde_json::from_value(document).map_err(|e| e.to_string())
    } else if is_envelope {
        let envelope: Envelope = serde_json::from_value(document).map_err(|e| e.to_string())?;
        if envelope.version != SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema version {} (expected {})",
                envelope.version, SCHEMA_VERSION
            ));
        }
        Ok(envelope.students)
    } else {
        Err("expected a JSON array of student records".to_string())
    }
}

/// Check every record is complete and rolls are unique, trimming as we go
pub fn validate(records: &mut [Student]) -> Result<(), String> {
    for (i, record) in records.iter_mut().enumerate() {
        record.normalize();
        if let Some(field) = record.missing_field() {
            return Err(format!("record {}: {} is required", i + 1, field));
        }
    }
    for (i, record) in records.iter().enumerate() {
        if records[..i].iter().any(|r| r.roll == record.roll) {
            return Err(format!("duplicate roll no {}", record.roll));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_bare_array() {
        let records = decode(json!([{"roll": "101", "name": "Asha", "grade": "A"}])).expect("array");
        assert_eq!(records, vec![Student::new("101", "Asha").with_grade("A")]);
    }

    #[test]
    fn test_decode_envelope() {
        let records = decode(json!({"version": 1, "students": [{"roll": "1", "name": "A"}]}))
            .expect("envelope");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_decode_rejects_other_versions() {
        let err = decode(json!({"version": 2, "students": []})).unwrap_err();
        assert!(err.contains("unsupported schema version 2"));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode(json!({"roll": "1", "name": "A"})).is_err());
        assert!(decode(json!("students")).is_err());
        assert!(decode(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut records = vec![Student::new("1", "A"), Student::new(" 1 ", "B")];
        assert_eq!(validate(&mut records).unwrap_err(), "duplicate roll no 1");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut records = vec![Student::new("1", "A"), Student::new("2", "  ")];
        assert_eq!(validate(&mut records).unwrap_err(), "record 2: name is required");
    }
}
