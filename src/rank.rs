//! # Sort/Dedup Stage
//!
//! ## Purpose
//! Final resequencing of filtered results: duplicate addresses are collapsed
//! to their first occurrence, then the collection is ordered by the selected
//! sort key. Sorting is stable, so ties keep their relative order and the
//! stage is idempotent.
//!
//! ## Input/Output Specification
//! - **Input**: Listing records, a [`SortKey`]
//! - **Output**: Deduplicated, ordered collection
//! - **Dedup key**: The `address` field alone — two listings at the same
//!   address are duplicates regardless of other field differences

use crate::{PropertyRecord, SortKey};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Deduplicate by address and order by the sort key
pub fn finalize(records: &[PropertyRecord], sort_key: SortKey) -> Vec<PropertyRecord> {
    let mut seen_addresses: HashSet<&str> = HashSet::new();
    let mut results: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| seen_addresses.insert(record.address.as_str()))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Latest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceLow => results.sort_by_key(PropertyRecord::effective_price),
        SortKey::PriceHigh => results.sort_by_key(|r| Reverse(r.effective_price())),
        SortKey::AreaLarge => results.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortKey::AreaSmall => results.sort_by(|a, b| a.area.total_cmp(&b.area)),
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PropertyType, TransactionType};
    use chrono::{DateTime, Duration, Utc};

    fn record(address: &str, area: f64, price: Option<u64>, age_days: i64) -> PropertyRecord {
        PropertyRecord {
            id: uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, address.as_bytes()),
            property_type: PropertyType::Office,
            transaction_type: if price.is_some() {
                TransactionType::Sale
            } else {
                TransactionType::Lease
            },
            title: address.to_string(),
            address: address.to_string(),
            detailed_address: "1층".to_string(),
            description: String::new(),
            latitude: 37.5,
            longitude: 127.0,
            price,
            deposit: None,
            monthly_rent: None,
            area,
            floor: 1,
            total_floors: 5,
            amenities: Vec::new(),
            special_features: Vec::new(),
            view_count: 0,
            like_count: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH - Duration::days(age_days),
            updated_at: DateTime::<Utc>::UNIX_EPOCH - Duration::days(age_days),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let records = vec![
            record("주소 A", 50.0, Some(100), 0),
            record("주소 B", 60.0, Some(200), 1),
            record("주소 A", 70.0, Some(300), 2),
        ];
        let results = finalize(&records, SortKey::Latest);
        assert_eq!(results.len(), 2);
        let first_a = results.iter().find(|r| r.address == "주소 A").unwrap();
        assert_eq!(first_a.area, 50.0);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let records = vec![
            record("주소 A", 50.0, Some(500), 3),
            record("주소 B", 10.0, Some(100), 1),
            record("주소 A", 70.0, Some(900), 0),
            record("주소 C", 30.0, Some(300), 2),
        ];
        for key in [
            SortKey::Latest,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::AreaLarge,
            SortKey::AreaSmall,
        ] {
            let once = finalize(&records, key);
            let twice = finalize(&once, key);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_area_small_ordering() {
        let records = vec![
            record("주소 A", 50.0, Some(100), 0),
            record("주소 B", 10.0, Some(100), 0),
            record("주소 C", 30.0, Some(100), 0),
        ];
        let areas: Vec<f64> = finalize(&records, SortKey::AreaSmall)
            .iter()
            .map(|r| r.area)
            .collect();
        assert_eq!(areas, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_area_large_ordering() {
        let records = vec![
            record("주소 A", 50.0, Some(100), 0),
            record("주소 B", 10.0, Some(100), 0),
        ];
        let areas: Vec<f64> = finalize(&records, SortKey::AreaLarge)
            .iter()
            .map(|r| r.area)
            .collect();
        assert_eq!(areas, vec![50.0, 10.0]);
    }

    #[test]
    fn test_latest_ordering() {
        let records = vec![
            record("주소 A", 50.0, Some(100), 5),
            record("주소 B", 50.0, Some(100), 1),
            record("주소 C", 50.0, Some(100), 3),
        ];
        let addresses: Vec<String> = finalize(&records, SortKey::Latest)
            .iter()
            .map(|r| r.address.clone())
            .collect();
        assert_eq!(addresses, vec!["주소 B", "주소 C", "주소 A"]);
    }

    #[test]
    fn test_price_ordering_uses_fallback_chain() {
        let mut lease = record("주소 A", 50.0, None, 0);
        lease.deposit = Some(150);
        let mut rent_only = record("주소 B", 50.0, None, 0);
        rent_only.monthly_rent = Some(50);
        let sale = record("주소 C", 50.0, Some(100), 0);

        let records = vec![lease, rent_only, sale];
        let addresses: Vec<String> = finalize(&records, SortKey::PriceLow)
            .iter()
            .map(|r| r.address.clone())
            .collect();
        assert_eq!(addresses, vec!["주소 B", "주소 C", "주소 A"]);

        let addresses: Vec<String> = finalize(&records, SortKey::PriceHigh)
            .iter()
            .map(|r| r.address.clone())
            .collect();
        assert_eq!(addresses, vec!["주소 A", "주소 C", "주소 B"]);
    }

    #[test]
    fn test_stable_ties_preserve_input_order() {
        let records = vec![
            record("주소 A", 50.0, Some(100), 0),
            record("주소 B", 50.0, Some(100), 0),
            record("주소 C", 50.0, Some(100), 0),
        ];
        let addresses: Vec<String> = finalize(&records, SortKey::AreaSmall)
            .iter()
            .map(|r| r.address.clone())
            .collect();
        assert_eq!(addresses, vec!["주소 A", "주소 B", "주소 C"]);
    }
}
