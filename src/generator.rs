//! # Deterministic Record Generator
//!
//! ## Purpose
//! Produces a reproducible synthetic collection of listing records from an
//! integer count. Every randomized attribute is derived from a seeded scalar
//! pseudo-random function, so repeated calls with the same count yield
//! identical output — the application's only data source is stable across
//! page loads.
//!
//! ## Input/Output Specification
//! - **Input**: Record count (total over all counts, zero yields empty)
//! - **Output**: `Vec<PropertyRecord>` of exactly that length
//! - **Determinism**: Pure mapping from record index to record contents
//!
//! ## Key Features
//! - Seeded sin-based unit random, distinct offset per attribute
//! - Fixed district table with base coordinates plus seeded jitter
//! - Price populated only for sale, deposit/rent only for lease
//! - Probabilistic amenity and special-feature selection

use crate::vocab::{
    District, BASIC_AMENITIES, BASIC_AMENITY_PROBABILITY, DISTRICTS, EXTRA_AMENITIES,
    SPECIAL_FEATURE_PROBABILITIES,
};
use crate::{ListingId, PropertyRecord, PropertyType, SpecialFeature, TransactionType};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

// Per-attribute seed offsets. Each attribute of record `i` draws from
// `seeded_unit(i + offset)`; the offsets must stay distinct so attributes
// vary independently within one record.
const OFFSET_AREA: i64 = 1;
const OFFSET_FLOOR: i64 = 2;
const OFFSET_TOTAL_FLOORS: i64 = 3;
const OFFSET_TYPE: i64 = 4;
const OFFSET_TRANSACTION: i64 = 5;
const OFFSET_DISTRICT: i64 = 6;
const OFFSET_LAT_JITTER: i64 = 7;
const OFFSET_LNG_JITTER: i64 = 8;
const OFFSET_PRICE: i64 = 9;
const OFFSET_DEPOSIT: i64 = 10;
const OFFSET_MONTHLY_RENT: i64 = 11;
const OFFSET_AMENITY_TARGET: i64 = 12;
const OFFSET_VIEW_COUNT: i64 = 13;
const OFFSET_LIKE_COUNT: i64 = 14;
const OFFSET_CREATED_AGE: i64 = 15;
const OFFSET_LOT_NUMBER: i64 = 16;
const OFFSET_LOT_SUFFIX: i64 = 17;
const OFFSET_BASIC_AMENITY: i64 = 20;
const OFFSET_EXTRA_AMENITY: i64 = 30;
const OFFSET_SPECIAL_FEATURE: i64 = 60;

/// Days from the Unix epoch to the generator's fixed reference date
/// (2024-06-01), from which listing ages are subtracted.
const REFERENCE_EPOCH_DAYS: i64 = 19_875;

/// Seeded scalar pseudo-random function: `frac(sin(seed) * 10000)`.
///
/// The fractional part is taken as `x - floor(x)` so the result lands in
/// `[0, 1)` for negative `sin` values as well.
pub fn seeded_unit(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Generate `count` listing records deterministically.
///
/// Calling this twice with the same count returns identical collections.
pub fn generate_records(count: usize) -> Vec<PropertyRecord> {
    let records: Vec<PropertyRecord> = (0..count).map(build_record).collect();
    tracing::debug!(count = records.len(), "generated listing records");
    records
}

/// Unit random for attribute `offset` of record `index`
fn unit(index: usize, offset: i64) -> f64 {
    seeded_unit(index as i64 + offset)
}

/// Build the record at `index` as a pure function of the index
fn build_record(index: usize) -> PropertyRecord {
    let district = pick_district(index);
    let property_type = pick_property_type(index);
    let transaction_type = if unit(index, OFFSET_TRANSACTION) < 0.5 {
        TransactionType::Sale
    } else {
        TransactionType::Lease
    };

    // Area in 20..500 m², one decimal place
    let area = round1(20.0 + unit(index, OFFSET_AREA) * 480.0);

    // 3..=20 total floors; floor may go down to two levels below grade
    let total_floors = 3 + (unit(index, OFFSET_TOTAL_FLOORS) * 18.0) as i32;
    let floor = (unit(index, OFFSET_FLOOR) * (total_floors + 3) as f64) as i32 - 2;

    let latitude = district.latitude + (unit(index, OFFSET_LAT_JITTER) - 0.5) * 0.02;
    let longitude = district.longitude + (unit(index, OFFSET_LNG_JITTER) - 0.5) * 0.02;

    // Exactly one pricing scheme applies per transaction type
    let (price, deposit, monthly_rent) = match transaction_type {
        TransactionType::Sale => {
            let price = 50_000_000 + (unit(index, OFFSET_PRICE) * 295.0) as u64 * 10_000_000;
            (Some(price), None, None)
        }
        TransactionType::Lease => {
            let deposit = 10_000_000 + (unit(index, OFFSET_DEPOSIT) * 49.0) as u64 * 10_000_000;
            let rent = 500_000 + (unit(index, OFFSET_MONTHLY_RENT) * 195.0) as u64 * 100_000;
            (None, Some(deposit), Some(rent))
        }
    };

    let amenities = pick_amenities(index);
    let special_features = pick_special_features(index);

    let lot_number = 100 + (unit(index, OFFSET_LOT_NUMBER) * 800.0) as u32;
    let lot_suffix = 1 + (unit(index, OFFSET_LOT_SUFFIX) * 20.0) as u32;
    let address = format!(
        "서울특별시 {} {} {}-{}",
        district.name, district.dong, lot_number, lot_suffix
    );
    let detailed_address = if floor >= 1 {
        format!("{}층", floor)
    } else {
        "지하층".to_string()
    };

    let title = format!(
        "{} {} {} {}",
        district.name,
        district.dong,
        property_type.label(),
        transaction_type.label()
    );
    let description = format!(
        "{} {} 인근 {} 매물입니다. 전용면적 {}㎡, {}층 건물 {}.",
        district.name,
        district.dong,
        property_type.label(),
        area,
        total_floors,
        detailed_address
    );

    let age_days = (unit(index, OFFSET_CREATED_AGE) * 365.0) as i64;
    let created_at: DateTime<Utc> =
        DateTime::<Utc>::UNIX_EPOCH + Duration::days(REFERENCE_EPOCH_DAYS - age_days);

    PropertyRecord {
        id: listing_id(index),
        property_type,
        transaction_type,
        title,
        address,
        detailed_address,
        description,
        latitude,
        longitude,
        price,
        deposit,
        monthly_rent,
        area,
        floor,
        total_floors,
        amenities,
        special_features,
        view_count: (unit(index, OFFSET_VIEW_COUNT) * 500.0) as u32,
        like_count: (unit(index, OFFSET_LIKE_COUNT) * 50.0) as u32,
        created_at,
        updated_at: created_at,
    }
}

/// Stable listing identifier derived from the record index
fn listing_id(index: usize) -> ListingId {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("realty-listing-{}", index).as_bytes(),
    )
}

fn pick_district(index: usize) -> &'static District {
    let slot = (unit(index, OFFSET_DISTRICT) * DISTRICTS.len() as f64) as usize;
    &DISTRICTS[slot]
}

fn pick_property_type(index: usize) -> PropertyType {
    let slot = (unit(index, OFFSET_TYPE) * PropertyType::ALL.len() as f64) as usize;
    PropertyType::ALL[slot]
}

/// Seed in basic amenities with a fixed inclusion probability, then fill
/// remaining slots up to a seeded 2..=7 target from the extended pool,
/// skipping duplicates.
fn pick_amenities(index: usize) -> Vec<String> {
    let mut amenities: Vec<String> = Vec::new();

    for (slot, name) in BASIC_AMENITIES.iter().enumerate() {
        if unit(index, OFFSET_BASIC_AMENITY + slot as i64) < BASIC_AMENITY_PROBABILITY {
            amenities.push((*name).to_string());
        }
    }

    let target = 2 + (unit(index, OFFSET_AMENITY_TARGET) * 6.0) as usize;
    let mut draw = 0;
    while amenities.len() < target && draw < EXTRA_AMENITIES.len() * 2 {
        let slot = (unit(index, OFFSET_EXTRA_AMENITY + draw as i64)
            * EXTRA_AMENITIES.len() as f64) as usize;
        let candidate = EXTRA_AMENITIES[slot];
        if !amenities.iter().any(|a| a == candidate) {
            amenities.push(candidate.to_string());
        }
        draw += 1;
    }

    amenities
}

/// Include each special feature independently per its probability table
fn pick_special_features(index: usize) -> Vec<SpecialFeature> {
    let mut features = Vec::new();
    for (slot, (feature, probability)) in SPECIAL_FEATURE_PROBABILITIES.iter().enumerate() {
        if unit(index, OFFSET_SPECIAL_FEATURE + slot as i64) < *probability {
            features.push(*feature);
        }
    }
    features
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_unit_range() {
        for seed in -1000..1000 {
            let value = seeded_unit(seed);
            assert!((0.0..1.0).contains(&value), "seed {} gave {}", seed, value);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_records(80);
        let second = generate_records(80);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generation_length() {
        assert_eq!(generate_records(0).len(), 0);
        assert_eq!(generate_records(1).len(), 1);
        assert_eq!(generate_records(37).len(), 37);
    }

    #[test]
    fn test_record_invariants() {
        for record in generate_records(200) {
            assert!(record.area >= 0.0);
            assert!(record.total_floors >= record.floor);
            match record.transaction_type {
                TransactionType::Sale => {
                    assert!(record.price.is_some());
                    assert!(record.deposit.is_none());
                    assert!(record.monthly_rent.is_none());
                }
                TransactionType::Lease => {
                    assert!(record.price.is_none());
                    assert!(record.deposit.is_some());
                    assert!(record.monthly_rent.is_some());
                }
            }
        }
    }

    #[test]
    fn test_amenities_have_no_duplicates() {
        for record in generate_records(100) {
            let mut seen = std::collections::HashSet::new();
            for amenity in &record.amenities {
                assert!(seen.insert(amenity.clone()), "duplicate {}", amenity);
            }
        }
    }

    #[test]
    fn test_coordinates_stay_near_district_bases() {
        for record in generate_records(100) {
            let near_base = crate::vocab::DISTRICTS.iter().any(|d| {
                (record.latitude - d.latitude).abs() <= 0.011
                    && (record.longitude - d.longitude).abs() <= 0.011
            });
            assert!(near_base, "coordinates drifted for {}", record.address);
        }
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let records = generate_records(50);
        let ids: std::collections::HashSet<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(records[0].id, generate_records(1)[0].id);
    }
}
