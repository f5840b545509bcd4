//! Peripheral statistics document for analytics data counts.

use serde::{Deserialize, Serialize};

/// Document counters reported by the analytics pipeline.
///
/// Pure data-transfer contract: each field independently defaults to 0 when
/// absent on read, and all three are always emitted on write. Unknown fields
/// in the source document are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataCounts {
    #[serde(default)]
    pub training_docs_count: u64,
    #[serde(default)]
    pub test_docs_count: u64,
    #[serde(default)]
    pub skipped_docs_count: u64,
}

impl DataCounts {
    #[must_use]
    pub const fn new(
        training_docs_count: u64,
        test_docs_count: u64,
        skipped_docs_count: u64,
    ) -> Self {
        Self { training_docs_count, test_docs_count, skipped_docs_count }
    }

    /// Decode from a JSON document, applying the per-field defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents or
    /// fields of the wrong type.
    pub fn from_json_str(doc: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(doc)
    }

    /// Emit the full document, all three fields included.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error; serialization of plain
    /// integers does not fail in practice.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_default_to_zero() {
        let counts = DataCounts::from_json_str("{}").unwrap();
        assert_eq!(counts, DataCounts::new(0, 0, 0));

        let counts = DataCounts::from_json_str(r#"{"test_docs_count": 7}"#).unwrap();
        assert_eq!(counts, DataCounts::new(0, 7, 0));
    }

    #[test]
    fn all_fields_round_trip() {
        let counts = DataCounts::new(120, 30, 2);
        let doc = counts.to_json_string().unwrap();
        assert_eq!(DataCounts::from_json_str(&doc).unwrap(), counts);
    }

    #[test]
    fn every_field_is_emitted_on_write() {
        let doc = DataCounts::default().to_json_string().unwrap();
        for field in ["training_docs_count", "test_docs_count", "skipped_docs_count"] {
            assert!(doc.contains(field), "missing {field} in {doc}");
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let counts =
            DataCounts::from_json_str(r#"{"training_docs_count": 5, "extra": true}"#).unwrap();
        assert_eq!(counts, DataCounts::new(5, 0, 0));
    }
}
