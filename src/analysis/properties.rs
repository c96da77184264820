//! Derived property set for submitted strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full set of properties derived from one submitted string.
///
/// Every shape property (`length`, `is_palindrome`, `unique_characters`,
/// `word_count`, `character_frequency_map`) describes the *trimmed* value.
/// `sha256_hash` digests the raw value exactly as submitted, so for inputs
/// with leading or trailing whitespace it differs from the record id, which
/// is always derived from the trimmed value.
///
/// Character-level properties count Unicode scalar values, not bytes or
/// grapheme clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProperties {
    /// Number of characters in the trimmed value.
    pub length: usize,

    /// Whether the trimmed value equals its own reverse, case-insensitively.
    pub is_palindrome: bool,

    /// Number of distinct characters in the trimmed value.
    pub unique_characters: usize,

    /// Number of whitespace-delimited tokens in the trimmed value.
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the raw value's bytes.
    pub sha256_hash: String,

    /// Occurrence count for each distinct character of the trimmed value.
    ///
    /// Contains exactly the characters present; counts sum to `length`.
    /// BTreeMap keeps the serialized keys sorted and deterministic.
    pub character_frequency_map: BTreeMap<char, usize>,
}
