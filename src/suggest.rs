//! # Suggestion Generator Module
//!
//! ## Purpose
//! Proposes completion strings for a partial search query by combining
//! detected location and property-keyword fragments with the static popular
//! combinations.
//!
//! ## Input/Output Specification
//! - **Input**: Partial query text, suggestion limit
//! - **Output**: At most `limit` distinct suggestion strings
//! - **Matching**: Containment tests are case-insensitive; duplicate
//!   suppression compares assembled strings exactly

use crate::query::{detect_property_keyword, normalize_query, parse_query};
use crate::vocab::{LOCATIONS, POPULAR_COMBINATIONS, PROPERTY_KEYWORDS};

/// How many dictionary locations to combine with a keyword fragment
const LOCATION_CANDIDATES: usize = 3;

/// How many property keywords to combine with a detected location
const KEYWORD_CANDIDATES: usize = 5;

/// Generate up to `limit` suggestions for a partial query.
///
/// Empty input returns the static example list truncated to `limit`.
pub fn generate_suggestions(partial: &str, limit: usize) -> Vec<String> {
    let normalized = normalize_query(partial);
    let mut suggestions: Vec<String> = Vec::new();

    if normalized.is_empty() {
        for combination in POPULAR_COMBINATIONS.iter().take(limit) {
            suggestions.push((*combination).to_string());
        }
        return suggestions;
    }

    let parsed = parse_query(&normalized);

    if !parsed.location.is_empty() {
        // Location known: complete it with common property keywords
        for keyword in PROPERTY_KEYWORDS.iter().take(KEYWORD_CANDIDATES) {
            let candidate = format!("{} {}", parsed.location, keyword);
            if contains_ci(&candidate, &normalized) {
                push_unique(&mut suggestions, candidate, limit);
            }
        }
    } else {
        // No location yet: prefix the partial query with dictionary locations
        for location in LOCATIONS.iter().take(LOCATION_CANDIDATES) {
            push_unique(&mut suggestions, format!("{} {}", location, normalized), limit);
        }
        if let Some(keyword) = detect_property_keyword(&normalized) {
            for location in LOCATIONS.iter().take(LOCATION_CANDIDATES) {
                push_unique(&mut suggestions, format!("{} {}", location, keyword), limit);
            }
        }
    }

    // Popular combinations still matching the partial query round it out
    for combination in POPULAR_COMBINATIONS {
        if contains_ci(combination, &normalized) {
            push_unique(&mut suggestions, (*combination).to_string(), limit);
        }
    }

    suggestions
}

/// Case-insensitive containment test
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Append unless already present or at the limit
fn push_unique(suggestions: &mut Vec<String>, candidate: String, limit: usize) {
    if suggestions.len() < limit && !suggestions.contains(&candidate) {
        suggestions.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_static_examples() {
        assert_eq!(generate_suggestions("", 10).len(), 6);
        assert_eq!(generate_suggestions("", 4).len(), 4);
        assert_eq!(generate_suggestions("", 0).len(), 0);
        assert_eq!(
            generate_suggestions("", 2),
            vec!["강남구 사무실".to_string(), "서초구 상가".to_string()]
        );
    }

    #[test]
    fn test_detected_location_completes_with_keywords() {
        let suggestions = generate_suggestions("강남구", 10);
        assert!(suggestions.contains(&"강남구 사무실".to_string()));
        assert!(suggestions.contains(&"강남구 상가".to_string()));
        assert!(suggestions.iter().all(|s| s.contains("강남구")));
    }

    #[test]
    fn test_partial_location_and_keyword_filtering() {
        // 강남구 + keyword candidates must still contain the partial query
        let suggestions = generate_suggestions("강남구 사", 10);
        assert!(suggestions.contains(&"강남구 사무실".to_string()));
        assert!(!suggestions.contains(&"강남구 상가".to_string()));
    }

    #[test]
    fn test_keyword_only_query_prefixes_locations() {
        let suggestions = generate_suggestions("사무실", 10);
        assert!(suggestions.contains(&"강남구 사무실".to_string()));
        assert!(suggestions.contains(&"서초구 사무실".to_string()));
        // 마포구 사무실 arrives through the popular combinations
        assert!(suggestions.contains(&"마포구 사무실".to_string()));
    }

    #[test]
    fn test_no_duplicates_and_limit_respected() {
        let suggestions = generate_suggestions("사무실", 3);
        assert!(suggestions.len() <= 3);
        let unique: std::collections::HashSet<_> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }
}
