//! # Commercial Listing Search Engine
//!
//! ## Overview
//! This library implements the search core of a commercial real-estate listing
//! application: deterministic mock-listing generation, free-text query parsing,
//! search suggestions, multi-facet filtering, and result ranking.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `generator`: Deterministic (seeded) listing record generation
//! - `query`: Free-text query parsing with location detection
//! - `suggest`: Search suggestion generation from partial queries
//! - `filter`: Multi-facet filter engine (price, area, floor, type, amenities)
//! - `rank`: Address deduplication and result ordering
//! - `engine`: Search facade combining parse, filter, and rank
//! - `liked`: Liked-listing state with a pluggable storage collaborator
//! - `vocab`: Closed dictionaries (locations, keywords, districts, amenities)
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Listing collections, free-text queries, facet selections
//! - **Output**: Filtered, deduplicated, ordered listing collections
//! - **Performance**: Pure synchronous functions, deterministic results
//!
//! ## Usage
//! ```rust
//! use realty_search::{Config, ListingSearchEngine, FilterSpec, SortKey};
//!
//! let engine = ListingSearchEngine::with_generated(Config::default(), 50);
//! let results = engine.search("강남구 사무실", &FilterSpec::default(), SortKey::Latest);
//! println!("Found {} listings", results.len());
//! ```

// Core modules
pub mod config;
pub mod engine;
pub mod errors;
pub mod filter;
pub mod generator;
pub mod liked;
pub mod query;
pub mod rank;
pub mod suggest;
pub mod vocab;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use engine::ListingSearchEngine;
pub use errors::{Result, SearchError};
pub use filter::{FacetValue, FilterSpec, SearchQuery};
pub use query::ParsedQuery;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for listings
pub type ListingId = Uuid;

/// Property category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Office,
    Retail,
    Building,
    Warehouse,
    Factory,
}

impl PropertyType {
    /// All property types in display order
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Office,
        PropertyType::Retail,
        PropertyType::Building,
        PropertyType::Warehouse,
        PropertyType::Factory,
    ];

    /// Korean display label, also accepted as a facet selection value
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Office => "사무실",
            PropertyType::Retail => "상가",
            PropertyType::Building => "빌딩",
            PropertyType::Warehouse => "창고",
            PropertyType::Factory => "공장",
        }
    }

    /// Stable wire name used in facet selections
    pub fn wire_name(&self) -> &'static str {
        match self {
            PropertyType::Office => "office",
            PropertyType::Retail => "retail",
            PropertyType::Building => "building",
            PropertyType::Warehouse => "warehouse",
            PropertyType::Factory => "factory",
        }
    }

    /// Whether a facet selection string refers to this type.
    /// Both the wire name and the Korean label are accepted.
    pub fn matches_selection(&self, value: &str) -> bool {
        value == self.wire_name() || value == self.label()
    }
}

/// Transaction type of a listing.
///
/// Listing feeds carry looser jeonse/rent variants, but those are a
/// display-layer concern; the filter engine only distinguishes sale
/// from lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Lease,
}

impl TransactionType {
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Sale => "매매",
            TransactionType::Lease => "임대",
        }
    }

    /// Stable wire name used in facet selections
    pub fn wire_name(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Lease => "lease",
        }
    }

    pub fn matches_selection(&self, value: &str) -> bool {
        value == self.wire_name() || value == self.label()
    }
}

/// Special feature tags drawn from a closed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialFeature {
    /// 급매 — urgent sale
    UrgentSale,
    /// 큰길가 — main-road frontage
    MainRoadFrontage,
    /// 역세권 — near transit
    NearTransit,
}

impl SpecialFeature {
    pub const ALL: [SpecialFeature; 3] = [
        SpecialFeature::UrgentSale,
        SpecialFeature::MainRoadFrontage,
        SpecialFeature::NearTransit,
    ];

    /// Korean label, also the facet selection value
    pub fn label(&self) -> &'static str {
        match self {
            SpecialFeature::UrgentSale => "급매",
            SpecialFeature::MainRoadFrontage => "큰길가",
            SpecialFeature::NearTransit => "역세권",
        }
    }

    /// Parse a facet selection string; unknown values yield `None`
    pub fn from_selection(value: &str) -> Option<SpecialFeature> {
        SpecialFeature::ALL.iter().copied().find(|f| f.label() == value)
    }
}

/// A single commercial listing record — the unit of search and filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Unique listing identifier
    pub id: ListingId,
    /// Property category
    pub property_type: PropertyType,
    /// Sale or lease
    pub transaction_type: TransactionType,
    /// Listing title
    pub title: String,
    /// Street-level address, the deduplication key
    pub address: String,
    /// Unit/floor-level address detail
    pub detailed_address: String,
    /// Free-text description
    pub description: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Sale price in won; populated only for sale listings
    pub price: Option<u64>,
    /// Lease deposit in won; populated only for lease listings
    pub deposit: Option<u64>,
    /// Monthly rent in won; populated only for lease listings
    pub monthly_rent: Option<u64>,
    /// Floor area in square meters, always >= 0
    pub area: f64,
    /// Floor number; zero or negative means below grade
    pub floor: i32,
    /// Total floors of the building, always >= `floor`
    pub total_floors: i32,
    /// Facility names from the amenity vocabulary
    pub amenities: Vec<String>,
    /// Special feature tags
    pub special_features: Vec<SpecialFeature>,
    /// View counter (decorative)
    pub view_count: u32,
    /// Like counter (decorative)
    pub like_count: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl PropertyRecord {
    /// First non-null of price, deposit, monthly rent — the key used by
    /// the price sort orders.
    pub fn effective_price(&self) -> u64 {
        self.price
            .or(self.deposit)
            .or(self.monthly_rent)
            .unwrap_or(0)
    }
}

/// Result ordering selectable by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    Latest,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Largest area first
    AreaLarge,
    /// Smallest area first
    AreaSmall,
}

impl SortKey {
    /// Parse the wire name (`latest`, `price-low`, ...); unknown names yield `None`
    pub fn from_wire_name(name: &str) -> Option<SortKey> {
        match name {
            "latest" => Some(SortKey::Latest),
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "area-large" => Some(SortKey::AreaLarge),
            "area-small" => Some(SortKey::AreaSmall),
            _ => None,
        }
    }
}
