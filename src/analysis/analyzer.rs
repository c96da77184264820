//! Property analyzer: the pure computation from text to [`TextProperties`].
//!
//! The analyzer is deterministic and total over all string inputs, including
//! the empty string. It never fails and holds no state; the pluggable seams
//! of the crate are the storage backend and the query detectors, not this
//! computation.

use std::collections::BTreeMap;

use ahash::AHashSet;

use crate::analysis::properties::TextProperties;
use crate::util::digest::sha256_hex;

/// Computes the property set of a submitted string.
///
/// Leading and trailing whitespace is trimmed before any shape property is
/// computed; the digest in `sha256_hash` covers the raw bytes as submitted.
///
/// # Examples
///
/// ```
/// use tessera::analysis::PropertyAnalyzer;
///
/// let analyzer = PropertyAnalyzer::new();
/// let props = analyzer.analyze("  level ");
///
/// assert_eq!(props.length, 5);
/// assert!(props.is_palindrome);
/// assert_eq!(props.word_count, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyAnalyzer;

impl PropertyAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        PropertyAnalyzer
    }

    /// Analyze `raw` and return its derived properties.
    pub fn analyze(&self, raw: &str) -> TextProperties {
        let trimmed = raw.trim();

        let length = trimmed.chars().count();
        let unique_characters = trimmed.chars().collect::<AHashSet<char>>().len();
        let word_count = trimmed.split_whitespace().count();

        let mut character_frequency_map: BTreeMap<char, usize> = BTreeMap::new();
        for ch in trimmed.chars() {
            *character_frequency_map.entry(ch).or_insert(0) += 1;
        }

        TextProperties {
            length,
            is_palindrome: is_palindrome(trimmed),
            unique_characters,
            word_count,
            sha256_hash: sha256_hex(raw.as_bytes()),
            character_frequency_map,
        }
    }
}

/// Case-insensitive palindrome check over Unicode scalar values.
///
/// Reversal happens first, lowercasing second, on both sides; characters
/// whose lowercase form expands to multiple scalars are compared in their
/// expanded order.
fn is_palindrome(trimmed: &str) -> bool {
    let forward = trimmed.to_lowercase();
    let reversed: String = trimmed.chars().rev().collect::<String>().to_lowercase();
    forward == reversed
}
