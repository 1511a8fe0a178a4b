use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{ImportExportError, ImportExportResult};

/// Top-level key holding the record array in the revenue document.
pub const DEFAULT_RECORDS_KEY: &str = "jmu-revenues";

/// One financial line item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub name: String,
    pub value: f64,
}

impl Record {
    pub fn new(
        kind: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            kind: kind.into(),
            category: category.into(),
            name: name.into(),
            value,
        }
    }
}

pub fn load_records(filename: &Path, records_key: &str) -> ImportExportResult<Vec<Record>> {
    info!("Loading records from {}", filename.display());
    let content = std::fs::read_to_string(filename)
        .map_err(|e| ImportExportError::io(filename, e))?;
    parse_document(&content, records_key)
}

/// Parse a revenue document and validate every record against the schema.
///
/// Keys other than `records_key` are ignored, as are extra fields on a record.
pub fn parse_document(content: &str, records_key: &str) -> ImportExportResult<Vec<Record>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ImportExportError::InputSchema(format!("document is not valid JSON: {}", e)))?;

    let object = document.as_object().ok_or_else(|| {
        ImportExportError::InputSchema("document root must be an object".to_string())
    })?;

    let rows = object
        .get(records_key)
        .ok_or_else(|| ImportExportError::InputSchema(format!("missing key '{}'", records_key)))?
        .as_array()
        .ok_or_else(|| {
            ImportExportError::InputSchema(format!("'{}' must be an array", records_key))
        })?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| verify_record(idx, row))
        .collect::<ImportExportResult<Vec<Record>>>()?;

    debug!("Parsed {} records from '{}'", records.len(), records_key);
    Ok(records)
}

/// JSON text has no NaN or infinity, and serde_json rejects out-of-range
/// numbers while parsing the document, so every value here is finite.
fn verify_record(idx: usize, row: &Value) -> ImportExportResult<Record> {
    Record::deserialize(row)
        .map_err(|e| ImportExportError::InputSchema(format!("record {}: {}", idx, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let records = parse_document(
            r#"{
                "generated": "2019",
                "jmu-revenues": [
                    {"type": "Operating revenues", "category": "Student fees", "name": "Tuition", "value": 100, "note": "x"},
                    {"type": "Operating expense", "category": "Instruction", "name": "Salaries", "value": 80.5}
                ]
            }"#,
            DEFAULT_RECORDS_KEY,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record::new("Operating revenues", "Student fees", "Tuition", 100.0)
        );
        assert_eq!(records[1].kind, "Operating expense");
        assert_eq!(records[1].value, 80.5);
    }

    #[test]
    fn test_missing_records_key() {
        let err = parse_document(r#"{"revenues": []}"#, DEFAULT_RECORDS_KEY).unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("missing key 'jmu-revenues'"));
    }

    #[test]
    fn test_records_key_must_be_array() {
        let err = parse_document(r#"{"jmu-revenues": {}}"#, DEFAULT_RECORDS_KEY).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn test_missing_field_names_record() {
        let err = parse_document(
            r#"{"jmu-revenues": [
                {"type": "Other revenues", "category": "Gifts", "name": "Gifts", "value": 1},
                {"type": "Other revenues", "category": "Gifts", "name": "Grants"}
            ]}"#,
            DEFAULT_RECORDS_KEY,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("record 1"), "{}", message);
        assert!(message.contains("value"), "{}", message);
    }

    #[test]
    fn test_wrong_field_type() {
        let err = parse_document(
            r#"{"jmu-revenues": [{"type": "Other revenues", "category": "Gifts", "name": "Gifts", "value": "12"}]}"#,
            DEFAULT_RECORDS_KEY,
        )
        .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let err = parse_document(
            r#"{"jmu-revenues": [{"type": "Other revenues", "category": "Gifts", "name": "Gifts", "value": 1e400}]}"#,
            DEFAULT_RECORDS_KEY,
        )
        .unwrap_err();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("number out of range"), "{}", err);
    }

    #[test]
    fn test_not_json() {
        let err = parse_document("jmu-revenues: []", DEFAULT_RECORDS_KEY).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_custom_records_key() {
        let records = parse_document(r#"{"rows": []}"#, "rows").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("does-not-exist.json"), DEFAULT_RECORDS_KEY).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
