//! Record service: the orchestration facade over analyzer, parser, and store.

use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::analysis::PropertyAnalyzer;
use crate::error::{Result, TesseraError};
use crate::query::{AppliedFilters, FilterSet, NaturalLanguageParser};
use crate::record::StringRecord;
use crate::service::response::{FilteredListing, InterpretedListing, InterpretedQuery};
use crate::storage::file::FileSnapshotStorage;
use crate::storage::memory::MemorySnapshotStorage;
use crate::storage::traits::SnapshotConfig;
use crate::store::RecordStore;

/// High-level service tying the analyzer, the natural-language parser, and
/// the record store together.
///
/// All validation happens here: values are rejected before they reach the
/// store, and the store's digest-keyed operations are only ever called with
/// identities derived through [`StringRecord::id_for`].
#[derive(Debug)]
pub struct RecordService {
    /// Property computation for submitted values.
    analyzer: PropertyAnalyzer,
    /// Natural-language query interpretation.
    parser: NaturalLanguageParser,
    /// The persistent record collection.
    store: RecordStore,
}

impl RecordService {
    /// Create a service over an existing store.
    pub fn new(store: RecordStore) -> Self {
        RecordService {
            analyzer: PropertyAnalyzer::new(),
            parser: NaturalLanguageParser::new(),
            store,
        }
    }

    /// Open (or initialize) a file-backed service in `dir`.
    pub fn open_dir<P: AsRef<Path>>(dir: P, config: SnapshotConfig) -> Result<Self> {
        let storage = FileSnapshotStorage::new(dir, config)?;
        Ok(Self::new(RecordStore::new(Arc::new(storage))))
    }

    /// Create a service over an ephemeral in-memory store.
    pub fn in_memory() -> Self {
        Self::new(RecordStore::new(Arc::new(MemorySnapshotStorage::new())))
    }

    /// Get the underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Analyze `raw` and persist it under its content digest.
    ///
    /// Fails with `EmptyValue` for blank input and `Conflict` when a record
    /// with the same digest already exists. Returns the stored record.
    pub fn create(&self, raw: &str) -> Result<StringRecord> {
        if raw.trim().is_empty() {
            return Err(TesseraError::EmptyValue);
        }

        let properties = self.analyzer.analyze(raw);
        let record = StringRecord::new(raw, properties);
        self.store.insert(record.clone())?;

        Ok(record)
    }

    /// Validate a JSON payload and create a record from its `value` field.
    ///
    /// The payload must be a JSON object with a string `value` field;
    /// anything else is `InvalidInput`. Value-level rules are then the same
    /// as [`RecordService::create`].
    pub fn create_from_payload(&self, payload: &Value) -> Result<StringRecord> {
        let object = payload
            .as_object()
            .ok_or_else(|| TesseraError::invalid_input("payload must be a JSON object"))?;
        let value = object
            .get("value")
            .ok_or_else(|| TesseraError::invalid_input("payload is missing the 'value' field"))?;
        let raw = value
            .as_str()
            .ok_or_else(|| TesseraError::invalid_input("the 'value' field must be a string"))?;

        self.create(raw)
    }

    /// Fetch the record addressed by `raw`'s content digest.
    pub fn get_by_value(&self, raw: &str) -> Result<StringRecord> {
        self.store.get(&StringRecord::id_for(raw))
    }

    /// Delete the record addressed by `raw`'s content digest.
    pub fn delete_by_value(&self, raw: &str) -> Result<()> {
        self.store.delete(&StringRecord::id_for(raw))
    }

    /// List every record satisfying `filters`, echoing the filter surface.
    pub fn list_filtered(&self, filters: &FilterSet) -> Result<FilteredListing> {
        let data: Vec<StringRecord> = self
            .store
            .list_all()?
            .into_iter()
            .filter(|record| filters.matches(record))
            .collect();
        let count = data.len();

        Ok(FilteredListing {
            data,
            count,
            filters_applied: AppliedFilters::from(filters),
        })
    }

    /// Interpret a natural-language `query` and list the matching records.
    ///
    /// `Unparseable` propagates when no phrase is recognized.
    pub fn query_natural_language(&self, query: &str) -> Result<InterpretedListing> {
        let parsed = self.parser.parse(query)?;
        debug!(
            "query {:?} fired detectors {:?}",
            query.trim(),
            parsed.matched
        );

        let listing = self.list_filtered(&parsed.filters)?;

        Ok(InterpretedListing {
            data: listing.data,
            count: listing.count,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: parsed.filters,
            },
        })
    }
}
