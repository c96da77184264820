//! String property analysis for tessera.
//!
//! This module provides the deterministic computation from a submitted
//! string to its derived property set: length, palindrome flag, distinct
//! character count, word count, content digest, and character frequencies.

pub mod analyzer;
pub mod properties;

// Re-export commonly used types
pub use analyzer::PropertyAnalyzer;
pub use properties::TextProperties;
