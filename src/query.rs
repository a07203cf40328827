//! # Query Parser Module
//!
//! ## Purpose
//! Decomposes a single free-text search string into a detected location token
//! and a residual keyword string. Location detection scans the known-location
//! dictionary longest-first, so a specific name such as 강남구 wins over its
//! substring 강남.
//!
//! ## Input/Output Specification
//! - **Input**: Raw user query text
//! - **Output**: `ParsedQuery { location, keyword, original_query }`
//! - **Normalization**: NFC, trim, case-fold, whitespace collapse

use crate::vocab;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Result of parsing a unified search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Detected location name, empty when none matched
    pub location: String,
    /// Residual keyword text after removing the location
    pub keyword: String,
    /// The normalized input the parse was performed on
    pub original_query: String,
}

impl ParsedQuery {
    fn empty() -> Self {
        ParsedQuery {
            location: String::new(),
            keyword: String::new(),
            original_query: String::new(),
        }
    }
}

/// Parse a free-text query into location and keyword parts.
///
/// The first dictionary entry (longest-first, dictionary order among equal
/// lengths) occurring as a substring of the normalized query becomes the
/// location; a single occurrence is removed and residual whitespace collapsed
/// to form the keyword. With no dictionary match the whole normalized query
/// is the keyword.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let normalized = normalize_query(raw);
    if normalized.is_empty() {
        return ParsedQuery::empty();
    }

    for name in vocab::locations_longest_first() {
        if normalized.contains(name) {
            let keyword = collapse_whitespace(&normalized.replacen(name, "", 1));
            return ParsedQuery {
                location: name.to_string(),
                keyword,
                original_query: normalized,
            };
        }
    }

    ParsedQuery {
        location: String::new(),
        keyword: normalized.clone(),
        original_query: normalized,
    }
}

/// Detect a property-type keyword in free text, longest-first
pub fn detect_property_keyword(text: &str) -> Option<&'static str> {
    let normalized = normalize_query(text);
    vocab::property_keywords_longest_first()
        .into_iter()
        .find(|keyword| normalized.contains(keyword))
}

/// NFC-normalize, trim, case-fold, and collapse whitespace
pub fn normalize_query(raw: &str) -> String {
    let folded: String = raw.nfc().collect::<String>().to_lowercase();
    collapse_whitespace(&folded)
}

fn collapse_whitespace(text: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    whitespace.replace_all(text.trim(), " ").to_string()
}
