#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::engine::resolve_multiplier;

// ── Built-in products ─────────────────────────────────────────

#[test]
fn test_built_in_products_load() {
    let products = built_in_products().unwrap();
    assert_eq!(products.len(), 10);
    assert!(products.iter().all(|p| !p.issuer.is_empty()));
}

#[test]
fn test_amex_gold_rates() {
    let products = built_in_products().unwrap();
    let gold = find_product(&products, "American Express Gold Card").unwrap();
    let s = &gold.schedule;
    assert_eq!(s.ecosystem.as_str(), "AMEX_MR");
    assert_eq!(s.currency, CurrencyKind::Points);
    assert_eq!(resolve_multiplier(s, SpendCategory::Dining), dec!(4));
    assert_eq!(resolve_multiplier(s, SpendCategory::TravelHotel), dec!(3));
    assert_eq!(resolve_multiplier(s, SpendCategory::Gas), dec!(1));
    assert_eq!(gold.annual_fee, dec!(325));
}

#[test]
fn test_fractional_base_rate() {
    let products = built_in_products().unwrap();
    let cfu = find_product(&products, "Chase Freedom Unlimited").unwrap();
    assert_eq!(cfu.schedule.base_earn_rate, dec!(1.5));
    assert_eq!(cfu.schedule.ecosystem, Ecosystem::cashback());
}

#[test]
fn test_find_product_case_insensitive() {
    let products = built_in_products().unwrap();
    assert!(find_product(&products, "  citi double CASH ").is_some());
    assert!(find_product(&products, "Nonexistent Card").is_none());
}

#[test]
fn test_merge_products_overrides_and_appends() {
    let base = built_in_products().unwrap();
    let count = base.len();
    let custom = CardProduct {
        issuer: "Citi".into(),
        annual_fee: Decimal::ZERO,
        schedule: Arc::new(RewardSchedule::cashback("Citi Double Cash", dec!(3)).unwrap()),
    };
    let brand_new = CardProduct {
        issuer: "Local CU".into(),
        annual_fee: Decimal::ZERO,
        schedule: Arc::new(RewardSchedule::cashback("Credit Union Rewards", dec!(1.25)).unwrap()),
    };
    let merged = merge_products(base, vec![custom, brand_new]);
    assert_eq!(merged.len(), count + 1);
    let dc = find_product(&merged, "Citi Double Cash").unwrap();
    assert_eq!(dc.schedule.base_earn_rate, dec!(3));
    assert!(find_product(&merged, "credit union rewards").is_some());
}

// ── Valuations ────────────────────────────────────────────────

#[test]
fn test_default_valuations() {
    let v = Valuations::default();
    assert_eq!(v.cents_per_point(&Ecosystem::new("AMEX_MR")), Some(dec!(2.0)));
    assert_eq!(v.cents_per_point(&Ecosystem::new("CAPITAL_ONE")), Some(dec!(1.7)));
    assert_eq!(v.cents_per_point(&Ecosystem::cashback()), Some(dec!(1.0)));
    assert_eq!(v.cents_per_point(&Ecosystem::new("UNKNOWN")), None);
}

#[test]
fn test_valuation_override() {
    let v = Valuations::default().with_override(Ecosystem::new("AMEX_MR"), dec!(1.5));
    assert_eq!(v.cents_per_point(&Ecosystem::new("AMEX_MR")), Some(dec!(1.5)));
}

#[test]
fn test_estimated_value_in_dollars() {
    let v = Valuations::default();
    assert_eq!(
        v.estimated_value(&Ecosystem::new("CHASE_UR"), dec!(1200)),
        Some(dec!(24.00))
    );
    assert_eq!(v.estimated_value(&Ecosystem::new("NOPE"), dec!(1200)), None);
}

#[test]
fn test_ecosystem_labels() {
    assert_eq!(ecosystem_label(&Ecosystem::new("CHASE_UR")), "Chase Ultimate Rewards");
    assert_eq!(ecosystem_label(&Ecosystem::cashback()), "Cash Back");
    assert_eq!(ecosystem_label(&Ecosystem::new("hilton")), "HILTON");
}
