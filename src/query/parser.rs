//! Parser for converting natural-language queries to structured filters.

use crate::error::{Result, TesseraError};
use crate::query::detector::{
    ContainsCharacterDetector, Detector, FirstVowelDetector, MaxLengthDetector, MinLengthDetector,
    PalindromeDetector, WordCountDetector,
};
use crate::query::filter::FilterSet;

/// Outcome of parsing a natural-language query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Filters assembled from every detector that fired.
    pub filters: FilterSet,
    /// Names of the detectors that fired, in chain order.
    pub matched: Vec<&'static str>,
}

/// Parser that reduces a free-form query to a [`FilterSet`].
///
/// The query is trimmed and lowercased once, then every detector in the
/// chain inspects it independently. Constraints are applied in chain order,
/// so when two detectors target the same filter the later one wins; the
/// explicit-letter phrase therefore overrides the first-vowel idiom.
#[derive(Debug)]
pub struct NaturalLanguageParser {
    detectors: Vec<Box<dyn Detector>>,
}

impl Default for NaturalLanguageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NaturalLanguageParser {
    /// Create a parser with the standard detector chain.
    pub fn new() -> Self {
        NaturalLanguageParser {
            detectors: vec![
                Box::new(PalindromeDetector),
                Box::new(MinLengthDetector),
                Box::new(MaxLengthDetector),
                Box::new(WordCountDetector),
                Box::new(FirstVowelDetector),
                Box::new(ContainsCharacterDetector),
            ],
        }
    }

    /// Parse `query` into structured filters.
    ///
    /// Fails with `Unparseable` when no detector recognizes anything, so an
    /// unconstrained match-all query cannot be produced by accident.
    pub fn parse(&self, query: &str) -> Result<ParsedQuery> {
        let normalized = query.trim().to_lowercase();

        let mut filters = FilterSet::new();
        let mut matched = Vec::new();
        for detector in &self.detectors {
            if let Some(constraint) = detector.detect(&normalized) {
                constraint.apply(&mut filters);
                matched.push(detector.name());
            }
        }

        if matched.is_empty() {
            return Err(TesseraError::unparseable(query.trim()));
        }

        Ok(ParsedQuery { filters, matched })
    }

    /// Names of the detectors in the chain, in order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_phrase_query() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser.parse("strings longer than 10 characters").unwrap();

        assert_eq!(parsed.filters, FilterSet::new().with_min_length(11));
        assert_eq!(parsed.matched, vec!["min_length"]);
    }

    #[test]
    fn test_phrases_combine() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser.parse("all single word palindromic strings").unwrap();

        assert_eq!(
            parsed.filters,
            FilterSet::new().with_is_palindrome(true).with_word_count(1)
        );
        assert_eq!(parsed.matched, vec!["palindrome", "word_count"]);
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser.parse("  Strings LONGER THAN 3 Characters  ").unwrap();

        assert_eq!(parsed.filters.min_length, Some(4));
    }

    #[test]
    fn test_explicit_letter_overrides_first_vowel() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser
            .parse("strings that contain the first vowel and containing the letter x")
            .unwrap();

        assert_eq!(parsed.filters.contains_character, Some('x'));
        assert_eq!(parsed.matched, vec!["first_vowel", "contains_character"]);
    }

    #[test]
    fn test_first_vowel_alone_means_a() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser.parse("strings that contain the first vowel").unwrap();

        assert_eq!(parsed.filters.contains_character, Some('a'));
    }

    #[test]
    fn test_unrecognized_query_is_unparseable() {
        let parser = NaturalLanguageParser::new();

        match parser.parse("banana bread") {
            Err(TesseraError::Unparseable(query)) => assert_eq!(query, "banana bread"),
            other => panic!("expected unparseable, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_query_is_unparseable() {
        let parser = NaturalLanguageParser::new();

        assert!(matches!(
            parser.parse("   "),
            Err(TesseraError::Unparseable(_))
        ));
    }

    #[test]
    fn test_bounds_combine_into_a_range() {
        let parser = NaturalLanguageParser::new();
        let parsed = parser
            .parse("strings longer than 3 but shorter than 10 characters")
            .unwrap();

        assert_eq!(parsed.filters.min_length, Some(4));
        assert_eq!(parsed.filters.max_length, Some(9));
    }

    #[test]
    fn test_detector_chain_order_is_fixed() {
        let parser = NaturalLanguageParser::new();

        assert_eq!(
            parser.detector_names(),
            vec![
                "palindrome",
                "min_length",
                "max_length",
                "word_count",
                "first_vowel",
                "contains_character",
            ]
        );
    }
}
