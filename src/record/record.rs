//! Record structure for analyzed strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::TextProperties;
use crate::util::digest::sha256_hex;

/// An analyzed string persisted under its content digest.
///
/// The `id` is the digest of the *trimmed* value; `value` keeps the
/// submission exactly as received, untrimmed. Create, lookup, and delete
/// all derive the digest through [`StringRecord::id_for`], so padded and
/// unpadded spellings of the same trimmed text address the same record.
///
/// Records are immutable after creation; the only mutation the store
/// offers is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content digest of the trimmed value; the storage key.
    pub id: String,

    /// The submitted string, exactly as received.
    pub value: String,

    /// Properties derived at creation time.
    pub properties: TextProperties,

    /// Creation timestamp (UTC, ISO-8601), set once.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record for `value` with its computed `properties`, stamped
    /// with the current UTC time.
    pub fn new<S: Into<String>>(value: S, properties: TextProperties) -> Self {
        let value = value.into();
        StringRecord {
            id: Self::id_for(&value),
            value,
            properties,
            created_at: Utc::now(),
        }
    }

    /// The storage identity of `value`: hex SHA-256 of its trimmed bytes.
    pub fn id_for(value: &str) -> String {
        sha256_hex(value.trim().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PropertyAnalyzer;

    #[test]
    fn test_id_ignores_surrounding_whitespace() {
        assert_eq!(StringRecord::id_for("hello"), StringRecord::id_for("  hello \n"));
        assert_ne!(StringRecord::id_for("hello"), StringRecord::id_for("hello!"));
    }

    #[test]
    fn test_record_keeps_raw_value() {
        let analyzer = PropertyAnalyzer::new();
        let record = StringRecord::new("  padded  ", analyzer.analyze("  padded  "));

        assert_eq!(record.value, "  padded  ");
        assert_eq!(record.id, StringRecord::id_for("padded"));
        // The property hash covers the raw value, so it differs from the id
        // exactly when the input carries surrounding whitespace.
        assert_ne!(record.id, record.properties.sha256_hash);
    }

    #[test]
    fn test_unpadded_record_hash_matches_id() {
        let analyzer = PropertyAnalyzer::new();
        let record = StringRecord::new("plain", analyzer.analyze("plain"));

        assert_eq!(record.id, record.properties.sha256_hash);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let analyzer = PropertyAnalyzer::new();
        let record = StringRecord::new("round trip", analyzer.analyze("round trip"));

        let json = serde_json::to_string(&record).unwrap();
        let back: StringRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
    }
}
