//! # Multi-Facet Filter Engine
//!
//! ## Purpose
//! Applies an ordered sequence of independent predicate facets (keyword,
//! location, price bucket, area bucket, transaction type, property type,
//! floor bucket, amenities, special features) to a listing collection.
//! A record survives only if it passes every facet with a non-empty
//! constraint (AND across facets); inside a facet any selected value may
//! match (OR within the facet).
//!
//! ## Input/Output Specification
//! - **Input**: Listing records, a search query, a `FilterSpec`
//! - **Output**: New collection of matching records, input order preserved
//! - **Totality**: No failure modes — unknown bucket labels match nothing,
//!   absent numeric fields fail active bands silently
//!
//! ## Key Features
//! - Scalar and multi-select facet values normalized at the boundary
//! - `"all"` / empty-string sentinels treated as "no constraint"
//! - Bucket boundaries held as numeric ranges keyed by their display labels

use crate::query::ParsedQuery;
use crate::{PropertyRecord, SpecialFeature};
use serde::{Deserialize, Serialize};

/// A facet constraint as received from the caller: absent, a single string,
/// or an array of strings. The legacy scalar form and the multi-select array
/// form are both accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    /// No value supplied
    #[default]
    Absent,
    /// Legacy scalar selection
    One(String),
    /// Multi-select selection
    Many(Vec<String>),
}

impl FacetValue {
    /// Canonical array-of-strings form with the `"all"` and empty-string
    /// sentinels dropped. An empty result means "no constraint".
    pub fn selections(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            FacetValue::Absent => Vec::new(),
            FacetValue::One(value) => vec![value.as_str()],
            FacetValue::Many(values) => values.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .filter(|value| !value.is_empty() && *value != "all")
            .collect()
    }

    /// Whether this facet imposes any constraint
    pub fn is_unconstrained(&self) -> bool {
        self.selections().is_empty()
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::One(value.to_string())
    }
}

impl From<Vec<String>> for FacetValue {
    fn from(values: Vec<String>) -> Self {
        FacetValue::Many(values)
    }
}

/// Faceted filter selections; absent or empty facets impose no constraint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub price_range: FacetValue,
    pub area_range: FacetValue,
    pub transaction_type: FacetValue,
    pub property_type: FacetValue,
    pub floor_range: FacetValue,
    pub amenities: FacetValue,
    pub special_feature: FacetValue,
}

/// Free-text search terms; empty strings impose no constraint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    /// Matched against title, description, and address
    pub keyword: String,
    /// Matched against address only
    pub location: String,
}

impl From<ParsedQuery> for SearchQuery {
    fn from(parsed: ParsedQuery) -> Self {
        SearchQuery {
            keyword: parsed.keyword,
            location: parsed.location,
        }
    }
}

/// Named price bands over the sale price in won
const PRICE_BANDS: &[(&str, Option<u64>, Option<u64>)] = &[
    ("1억이하", None, Some(100_000_000)),
    ("1억-5억", Some(100_000_000), Some(500_000_000)),
    ("5억-10억", Some(500_000_000), Some(1_000_000_000)),
    ("10억-20억", Some(1_000_000_000), Some(2_000_000_000)),
    ("20억이상", Some(2_000_000_000), None),
];

/// Named area bands in square meters (1 pyeong ≈ 3.3 m²)
const AREA_BANDS: &[(&str, Option<f64>, Option<f64>)] = &[
    ("10평이하", None, Some(33.0)),
    ("10-30평", Some(33.0), Some(99.0)),
    ("30-50평", Some(99.0), Some(165.0)),
    ("50-100평", Some(165.0), Some(330.0)),
    ("100평이상", Some(330.0), None),
];

/// Apply the query and facet constraints to a record collection.
///
/// Input order is preserved; ordering and deduplication belong to
/// [`crate::rank::finalize`].
pub fn apply_filters(
    records: &[PropertyRecord],
    query: &SearchQuery,
    spec: &FilterSpec,
) -> Vec<PropertyRecord> {
    let results: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| matches_record(record, query, spec))
        .cloned()
        .collect();
    tracing::debug!(
        input = records.len(),
        output = results.len(),
        "applied facet filters"
    );
    results
}

/// All-facets predicate for a single record
fn matches_record(record: &PropertyRecord, query: &SearchQuery, spec: &FilterSpec) -> bool {
    matches_keyword(record, &query.keyword)
        && matches_location(record, &query.location)
        && matches_facet(&spec.price_range, |band| {
            price_band_matches(band, record.price)
        })
        && matches_facet(&spec.area_range, |band| area_band_matches(band, record.area))
        && matches_facet(&spec.transaction_type, |value| {
            record.transaction_type.matches_selection(value)
        })
        && matches_facet(&spec.property_type, |value| {
            record.property_type.matches_selection(value)
        })
        && matches_facet(&spec.floor_range, |band| {
            floor_band_matches(band, record.floor)
        })
        && matches_facet(&spec.amenities, |value| {
            record.amenities.iter().any(|amenity| amenity == value)
        })
        && matches_facet(&spec.special_feature, |value| {
            match SpecialFeature::from_selection(value) {
                Some(feature) => record.special_features.contains(&feature),
                None => false,
            }
        })
}

/// OR over the facet's selections; an unconstrained facet always passes
fn matches_facet<F>(value: &FacetValue, predicate: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let selections = value.selections();
    selections.is_empty() || selections.into_iter().any(predicate)
}

/// Case-insensitive substring match against title, description, or address
fn matches_keyword(record: &PropertyRecord, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }
    let needle = keyword.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record.address.to_lowercase().contains(&needle)
}

/// Case-insensitive substring match against the address
fn matches_location(record: &PropertyRecord, location: &str) -> bool {
    location.is_empty() || record.address.to_lowercase().contains(&location.to_lowercase())
}

/// Whether `price` falls in the named band. Records without a price fail
/// every band; unknown band labels match nothing.
fn price_band_matches(band: &str, price: Option<u64>) -> bool {
    let Some(price) = price else {
        return false;
    };
    PRICE_BANDS
        .iter()
        .find(|(label, _, _)| *label == band)
        .is_some_and(|(_, min, max)| {
            min.map_or(true, |m| price > m) && max.map_or(true, |m| price <= m)
        })
}

/// Whether `area` falls in the named band; unknown labels match nothing
fn area_band_matches(band: &str, area: f64) -> bool {
    AREA_BANDS
        .iter()
        .find(|(label, _, _)| *label == band)
        .is_some_and(|(_, min, max)| {
            min.map_or(true, |m| area > m) && max.map_or(true, |m| area <= m)
        })
}

/// Whether `floor` falls in the named band; unknown labels match nothing
fn floor_band_matches(band: &str, floor: i32) -> bool {
    match band {
        "저층(1-3층)" => (1..=3).contains(&floor),
        "중층(4-10층)" => (4..=10).contains(&floor),
        "고층(11층이상)" => floor >= 11,
        "지하층" => floor < 1,
        _ => false,
    }
}
