//! Phrase detectors that map natural-language fragments to constraints.

use lazy_static::lazy_static;
use regex::Regex;

use crate::query::filter::FilterSet;

lazy_static! {
    static ref LONGER_THAN: Regex = Regex::new(r"longer than (\d+)").unwrap();
    static ref SHORTER_THAN: Regex = Regex::new(r"shorter than (\d+)").unwrap();
    static ref CONTAINING_LETTER: Regex = Regex::new(r"containing the letter ([a-z])").unwrap();
}

/// A single structured constraint recognized inside a natural-language query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Restrict to records whose palindrome property equals the value.
    IsPalindrome(bool),
    /// Restrict to records at least this long (inclusive).
    MinLength(usize),
    /// Restrict to records at most this long (inclusive).
    MaxLength(usize),
    /// Restrict to records with exactly this many words.
    WordCount(usize),
    /// Restrict to records whose stored value contains the character.
    ContainsCharacter(char),
}

impl Constraint {
    /// Write this constraint into `filters`, replacing any earlier value
    /// for the same filter.
    pub fn apply(&self, filters: &mut FilterSet) {
        match *self {
            Constraint::IsPalindrome(value) => filters.is_palindrome = Some(value),
            Constraint::MinLength(length) => filters.min_length = Some(length),
            Constraint::MaxLength(length) => filters.max_length = Some(length),
            Constraint::WordCount(count) => filters.word_count = Some(count),
            Constraint::ContainsCharacter(ch) => filters.contains_character = Some(ch),
        }
    }
}

/// A detector for one fixed phrase family.
///
/// Detectors are independent: each inspects the whole normalized query and
/// either produces a constraint or stays silent. They never consume input,
/// so several detectors can fire on the same query.
pub trait Detector: Send + Sync + std::fmt::Debug {
    /// Short name reported for queries this detector fired on.
    fn name(&self) -> &'static str;

    /// Inspect `query` (already trimmed and lowercased) and produce a
    /// constraint if this detector's phrase is present.
    fn detect(&self, query: &str) -> Option<Constraint>;
}

/// Detects "palindrome" / "palindromic" and keeps only palindromes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeDetector;

impl Detector for PalindromeDetector {
    fn name(&self) -> &'static str {
        "palindrome"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        if query.contains("palindromic") || query.contains("palindrome") {
            Some(Constraint::IsPalindrome(true))
        } else {
            None
        }
    }
}

/// Detects "longer than N" as a strict bound and emits `MinLength(N + 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLengthDetector;

impl Detector for MinLengthDetector {
    fn name(&self) -> &'static str {
        "min_length"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        let captures = LONGER_THAN.captures(query)?;
        let bound: usize = captures.get(1)?.as_str().parse().ok()?;
        Some(Constraint::MinLength(bound.saturating_add(1)))
    }
}

/// Detects "shorter than N" as a strict bound and emits `MaxLength(N - 1)`.
///
/// "shorter than 0" saturates to a maximum length of zero, which no stored
/// record can satisfy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLengthDetector;

impl Detector for MaxLengthDetector {
    fn name(&self) -> &'static str {
        "max_length"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        let captures = SHORTER_THAN.captures(query)?;
        let bound: usize = captures.get(1)?.as_str().parse().ok()?;
        Some(Constraint::MaxLength(bound.saturating_sub(1)))
    }
}

/// Detects "single word" / "one word" and pins the word count to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCountDetector;

impl Detector for WordCountDetector {
    fn name(&self) -> &'static str {
        "word_count"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        if query.contains("single word") || query.contains("one word") {
            Some(Constraint::WordCount(1))
        } else {
            None
        }
    }
}

/// Detects the idiom "contain the first vowel" and resolves it to 'a'.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVowelDetector;

impl Detector for FirstVowelDetector {
    fn name(&self) -> &'static str {
        "first_vowel"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        if query.contains("contain the first vowel") {
            Some(Constraint::ContainsCharacter('a'))
        } else {
            None
        }
    }
}

/// Detects "containing the letter X" for a single lowercase letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsCharacterDetector;

impl Detector for ContainsCharacterDetector {
    fn name(&self) -> &'static str {
        "contains_character"
    }

    fn detect(&self, query: &str) -> Option<Constraint> {
        let captures = CONTAINING_LETTER.captures(query)?;
        let letter = captures.get(1)?.as_str().chars().next()?;
        Some(Constraint::ContainsCharacter(letter))
    }
}
