//! # Search Vocabulary Module
//!
//! ## Purpose
//! Closed dictionaries shared by the query parser, suggestion generator, and
//! record generator: known location names, property-type keywords, popular
//! search combinations, the district table, and the amenity pools.
//!
//! ## Input/Output Specification
//! - **Input**: None — all vocabularies are static
//! - **Output**: Ordered slices and derived orderings (longest-first)
//! - **Ordering**: Dictionary order is fixed and meaningful; it is the
//!   tie-break for equal-length location matches.

use crate::SpecialFeature;

/// Known location names in fixed dictionary order.
///
/// Longer, more specific names (e.g. 강남구) must be listed so that the
/// longest-first scan prefers them over their substrings (강남); among
/// equal-length entries the earlier one wins.
pub const LOCATIONS: &[&str] = &[
    "강남구",
    "서초구",
    "송파구",
    "마포구",
    "영등포구",
    "종로구",
    "테헤란로",
    "역삼동",
    "여의도",
    "강남",
    "서초",
    "송파",
    "마포",
    "영등포",
    "종로",
    "역삼",
    "홍대",
    "신촌",
    "잠실",
];

/// Property-type keywords recognized in free text, most common first
pub const PROPERTY_KEYWORDS: &[&str] = &[
    "사무실",
    "상가",
    "빌딩",
    "창고",
    "공장",
    "오피스",
    "점포",
    "사옥",
];

/// Transaction-type keywords recognized in free text
pub const TRANSACTION_KEYWORDS: &[&str] = &["매매", "임대"];

/// Static "popular combination" phrases used as example suggestions
pub const POPULAR_COMBINATIONS: &[&str] = &[
    "강남구 사무실",
    "서초구 상가",
    "송파구 빌딩",
    "마포구 사무실",
    "영등포구 창고",
    "종로구 상가",
];

/// A named district with its base coordinate, used by the record generator
#[derive(Debug, Clone, Copy)]
pub struct District {
    /// Gu-level name, appears in generated addresses
    pub name: &'static str,
    /// Representative dong within the district
    pub dong: &'static str,
    /// Base latitude
    pub latitude: f64,
    /// Base longitude
    pub longitude: f64,
}

/// Fixed district table for generated listings
pub const DISTRICTS: &[District] = &[
    District { name: "강남구", dong: "역삼동", latitude: 37.4979, longitude: 127.0276 },
    District { name: "서초구", dong: "서초동", latitude: 37.4837, longitude: 127.0324 },
    District { name: "송파구", dong: "잠실동", latitude: 37.5145, longitude: 127.1060 },
    District { name: "마포구", dong: "서교동", latitude: 37.5663, longitude: 126.9019 },
    District { name: "영등포구", dong: "여의도동", latitude: 37.5264, longitude: 126.8962 },
    District { name: "종로구", dong: "관철동", latitude: 37.5735, longitude: 126.9790 },
];

/// Basic amenities seeded into most listings
pub const BASIC_AMENITIES: &[&str] = &["엘리베이터", "주차장", "에어컨", "화장실"];

/// Inclusion probability for each basic amenity
pub const BASIC_AMENITY_PROBABILITY: f64 = 0.7;

/// Extended amenity pool used to fill remaining amenity slots
pub const EXTRA_AMENITIES: &[&str] = &[
    "CCTV",
    "보안시스템",
    "광랜",
    "냉난방기",
    "회의실",
    "탕비실",
    "창고공간",
    "화물엘리베이터",
    "하역장",
    "바닥보강",
];

/// Per-feature inclusion probability for special feature tags
pub const SPECIAL_FEATURE_PROBABILITIES: &[(SpecialFeature, f64)] = &[
    (SpecialFeature::UrgentSale, 0.15),
    (SpecialFeature::MainRoadFrontage, 0.25),
    (SpecialFeature::NearTransit, 0.30),
];

/// Location names ordered longest-first for substring detection.
///
/// The sort is stable, so equal-length names keep their dictionary order.
pub fn locations_longest_first() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LOCATIONS.to_vec();
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    names
}

/// Property keywords ordered longest-first for substring detection
pub fn property_keywords_longest_first() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PROPERTY_KEYWORDS.to_vec();
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_longest_first_ordering() {
        let ordered = locations_longest_first();
        for pair in ordered.windows(2) {
            assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
        // 강남구 must come before 강남 so the parser prefers it
        let gangnam_gu = ordered.iter().position(|n| *n == "강남구").unwrap();
        let gangnam = ordered.iter().position(|n| *n == "강남").unwrap();
        assert!(gangnam_gu < gangnam);
    }

    #[test]
    fn test_equal_length_keeps_dictionary_order() {
        let ordered = locations_longest_first();
        let gangnam_gu = ordered.iter().position(|n| *n == "강남구").unwrap();
        let seocho_gu = ordered.iter().position(|n| *n == "서초구").unwrap();
        assert!(gangnam_gu < seocho_gu);
    }

    #[test]
    fn test_popular_combinations_size() {
        // The empty-query suggestion contract depends on this list size
        assert_eq!(POPULAR_COMBINATIONS.len(), 6);
    }

    #[test]
    fn test_district_table_names_are_known_locations() {
        for district in DISTRICTS {
            assert!(LOCATIONS.contains(&district.name));
        }
    }
}
