//! Query system: structured filters and the natural-language parser.

pub mod detector;
pub mod filter;
pub mod parser;

// Re-export commonly used types
pub use detector::{Constraint, Detector};
pub use filter::{AppliedFilters, FilterSet};
pub use parser::{NaturalLanguageParser, ParsedQuery};
