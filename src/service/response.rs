//! Response envelopes returned by the record service.

use serde::{Deserialize, Serialize};

use crate::query::{AppliedFilters, FilterSet};
use crate::record::StringRecord;

/// Listing produced by a structured filter request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredListing {
    /// Records that satisfied every applied filter.
    pub data: Vec<StringRecord>,
    /// Number of records in `data`.
    pub count: usize,
    /// Echo of the applied filters, unset dimensions shown as null.
    pub filters_applied: AppliedFilters,
}

/// Listing produced by a natural-language query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedListing {
    /// Records that satisfied the interpreted filters.
    pub data: Vec<StringRecord>,
    /// Number of records in `data`.
    pub count: usize,
    /// How the query text was understood.
    pub interpreted_query: InterpretedQuery,
}

/// How a natural-language query was understood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// The query exactly as submitted.
    pub original: String,
    /// The structured filters the detectors produced; unset dimensions
    /// are omitted.
    pub parsed_filters: FilterSet,
}
