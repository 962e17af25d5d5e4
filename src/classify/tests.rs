#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::SpendCategory;

// ── classify ──────────────────────────────────────────────────

#[test]
fn test_classify_common_codes() {
    assert_eq!(classify("5812"), SpendCategory::Dining);
    assert_eq!(classify("5814"), SpendCategory::Dining);
    assert_eq!(classify("5411"), SpendCategory::Groceries);
    assert_eq!(classify("5300"), SpendCategory::WholesaleClub);
    assert_eq!(classify("5541"), SpendCategory::Gas);
    assert_eq!(classify("5552"), SpendCategory::EvCharging);
    assert_eq!(classify("4121"), SpendCategory::Rideshare);
    assert_eq!(classify("4111"), SpendCategory::Transit);
    assert_eq!(classify("5815"), SpendCategory::Streaming);
    assert_eq!(classify("4814"), SpendCategory::PhoneInternet);
    assert_eq!(classify("5912"), SpendCategory::Drugstore);
    assert_eq!(classify("5200"), SpendCategory::HomeImprovement);
    assert_eq!(classify("5943"), SpendCategory::OfficeSupply);
    assert_eq!(classify("7997"), SpendCategory::Fitness);
    assert_eq!(classify("7832"), SpendCategory::Entertainment);
}

#[test]
fn test_classify_travel_ranges() {
    assert_eq!(classify("3000"), SpendCategory::TravelAir);
    assert_eq!(classify("3299"), SpendCategory::TravelAir);
    assert_eq!(classify("4511"), SpendCategory::TravelAir);
    assert_eq!(classify("3351"), SpendCategory::TravelCarRental);
    assert_eq!(classify("3500"), SpendCategory::TravelCarRental);
    assert_eq!(classify("7512"), SpendCategory::TravelCarRental);
    assert_eq!(classify("3501"), SpendCategory::TravelHotel);
    assert_eq!(classify("7011"), SpendCategory::TravelHotel);
}

#[test]
fn test_classify_unmapped_falls_back_to_other() {
    assert_eq!(classify("0000"), SpendCategory::Other);
    assert_eq!(classify("5999"), SpendCategory::Other);
    assert_eq!(classify("3300"), SpendCategory::Other);
}

#[test]
fn test_classify_garbage_is_other() {
    assert_eq!(classify(""), SpendCategory::Other);
    assert_eq!(classify("   "), SpendCategory::Other);
    assert_eq!(classify("restaurant"), SpendCategory::Other);
    assert_eq!(classify("58"), SpendCategory::Other);
    // Five digits is not a merchant-category code
    assert_eq!(classify("58120"), SpendCategory::Other);
}

#[test]
fn test_classify_decorated_codes() {
    assert_eq!(classify(" 5812 "), SpendCategory::Dining);
    assert_eq!(classify("MCC 5411"), SpendCategory::Groceries);
    assert_eq!(classify("mcc:5541"), SpendCategory::Gas);
    assert_eq!(classify("5812 - Eating Places"), SpendCategory::Dining);
}

#[test]
fn test_classify_is_deterministic() {
    for code in ["5812", "abc", "3001", "9999"] {
        assert_eq!(classify(code), classify(code));
    }
}

// ── parse_code ────────────────────────────────────────────────

#[test]
fn test_parse_code() {
    assert_eq!(parse_code("5812"), Some(5812));
    assert_eq!(parse_code("MCC #0742"), Some(742));
    assert_eq!(parse_code("x5812"), None);
}
