//! Structured filters evaluated against stored records.

use serde::{Deserialize, Serialize};

use crate::record::StringRecord;

/// The structured filters a listing can apply.
///
/// Every field is optional; an unset field constrains nothing. Unset fields
/// are omitted when the set is echoed back in a query response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Keep only records whose palindrome property equals this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Keep only records at least this many characters long.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Keep only records at most this many characters long.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Keep only records with exactly this many words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Keep only records whose stored value contains this character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Create an empty filter set that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palindrome filter.
    pub fn with_is_palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    /// Set the minimum length filter (inclusive).
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Set the maximum length filter (inclusive).
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Set the exact word count filter.
    pub fn with_word_count(mut self, count: usize) -> Self {
        self.word_count = Some(count);
        self
    }

    /// Set the contained-character filter.
    pub fn with_contains_character(mut self, ch: char) -> Self {
        self.contains_character = Some(ch);
        self
    }

    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Whether `record` satisfies every set filter.
    ///
    /// Length and word count filters read the record's computed properties.
    /// The contained-character filter scans the stored value itself,
    /// case-sensitively, so padding and original casing both count.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(expected) = self.is_palindrome
            && record.properties.is_palindrome != expected
        {
            return false;
        }
        if let Some(min) = self.min_length
            && record.properties.length < min
        {
            return false;
        }
        if let Some(max) = self.max_length
            && record.properties.length > max
        {
            return false;
        }
        if let Some(count) = self.word_count
            && record.properties.word_count != count
        {
            return false;
        }
        if let Some(ch) = self.contains_character
            && !record.value.contains(ch)
        {
            return false;
        }
        true
    }
}

/// Echo of the filters a listing applied.
///
/// Unlike [`FilterSet`], unset filters serialize as explicit nulls, so a
/// response always shows the full filter surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<char>,
}

impl From<&FilterSet> for AppliedFilters {
    fn from(filters: &FilterSet) -> Self {
        AppliedFilters {
            is_palindrome: filters.is_palindrome,
            min_length: filters.min_length,
            max_length: filters.max_length,
            word_count: filters.word_count,
            contains_character: filters.contains_character,
        }
    }
}
