//! # Search Engine Facade
//!
//! ## Purpose
//! Front door for presentation layers: owns the configuration and the
//! in-memory listing collection, and runs the full search pipeline —
//! parse query → apply facet filters → deduplicate and order.
//!
//! ## Input/Output Specification
//! - **Input**: Raw query text, facet selections, a sort key
//! - **Output**: Filtered, deduplicated, ordered listing collections
//! - **Purity**: No shared mutable state; safe to call from any number of
//!   call sites without coordination
//!
//! ## Key Features
//! - Unified free-text search (location + keyword parsed from one string)
//! - Suggestion generation with the configured limit
//! - Boundary query validation for calling layers that want it

use crate::config::Config;
use crate::errors::{Result, SearchError};
use crate::filter::{apply_filters, FilterSpec, SearchQuery};
use crate::generator::generate_records;
use crate::query::parse_query;
use crate::rank::finalize;
use crate::suggest::generate_suggestions;
use crate::utils::Timer;
use crate::{PropertyRecord, SortKey};

/// Search facade over an in-memory listing collection
pub struct ListingSearchEngine {
    config: Config,
    records: Vec<PropertyRecord>,
}

impl ListingSearchEngine {
    /// Create an engine over an existing listing collection
    pub fn new(config: Config, records: Vec<PropertyRecord>) -> Self {
        Self { config, records }
    }

    /// Create an engine over a freshly generated collection of `count` listings
    pub fn with_generated(config: Config, count: usize) -> Self {
        let records = generate_records(count);
        Self::new(config, records)
    }

    /// Create an engine using the configured dataset size
    pub fn from_config(config: Config) -> Self {
        let count = config.generator.default_count;
        Self::with_generated(config, count)
    }

    /// The underlying listing collection
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    /// Engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline: parse the raw query, filter, dedup, and order.
    ///
    /// Total over all inputs; an empty query with an empty spec returns the
    /// whole (deduplicated, ordered) collection.
    pub fn search(
        &self,
        raw_query: &str,
        spec: &FilterSpec,
        sort_key: SortKey,
    ) -> Vec<PropertyRecord> {
        let timer = Timer::new("search");
        let parsed = parse_query(raw_query);
        let query = SearchQuery::from(parsed.clone());
        let filtered = apply_filters(&self.records, &query, spec);
        let results = finalize(&filtered, sort_key);
        tracing::info!(
            query = %raw_query,
            location = %parsed.location,
            keyword = %parsed.keyword,
            results = results.len(),
            elapsed_ms = timer.elapsed_ms(),
            "search completed"
        );
        results
    }

    /// Generate suggestions for a partial query with the configured limit
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        generate_suggestions(partial, self.config.search.suggestion_limit)
    }

    /// Boundary validation for calling layers: reject overlong queries
    /// before they reach the (total) search pipeline.
    pub fn validate_query(&self, raw_query: &str) -> Result<()> {
        let max = self.config.search.max_query_length;
        if raw_query.chars().count() > max {
            return Err(SearchError::InvalidSearchQuery {
                query: raw_query.to_string(),
                reason: format!("Query too long: maximum {} characters", max),
            });
        }
        Ok(())
    }
}
