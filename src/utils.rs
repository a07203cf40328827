//! # Utilities Module
//!
//! ## Purpose
//! Common helpers used throughout the listing search engine: performance
//! timing and display formatting for prices, areas, and text.
//!
//! ## Input/Output Specification
//! - **Input**: Various data types requiring common operations
//! - **Output**: Formatted strings, elapsed durations

use std::time::Instant;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop timer and log duration
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!("Timer '{}' completed in {}ms", self.name, elapsed);
        elapsed
    }
}

/// Text processing utilities
pub struct TextUtils;

impl TextUtils {
    /// Truncate text to a character count with ellipsis
    pub fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a won amount in the customary 억/만원 units
pub fn format_won(amount: u64) -> String {
    const EOK: u64 = 100_000_000;
    const MAN: u64 = 10_000;

    if amount >= EOK {
        let eok = amount / EOK;
        let man = (amount % EOK) / MAN;
        if man == 0 {
            format!("{}억원", eok)
        } else {
            format!("{}억 {}만원", eok, man)
        }
    } else if amount >= MAN {
        format!("{}만원", amount / MAN)
    } else {
        format!("{}원", amount)
    }
}

/// Format square meters with the pyeong equivalent (1평 ≈ 3.3 m²)
pub fn format_area(square_meters: f64) -> String {
    format!("{:.1}㎡ ({:.1}평)", square_meters, square_meters / 3.3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(TextUtils::truncate("강남구 사무실", 20), "강남구 사무실");
        assert_eq!(TextUtils::truncate("강남구 역삼동 사무실 임대", 10), "강남구 역삼동...");
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(90_000_000), "9000만원");
        assert_eq!(format_won(100_000_000), "1억원");
        assert_eq!(format_won(620_000_000), "6억 2000만원");
        assert_eq!(format_won(5_000), "5000원");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(33.0), "33.0㎡ (10.0평)");
    }
}
