#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Ecosystem, OwnedCard, RewardSchedule, SpendCategory, TransactionRecord};

// ── round_cents ───────────────────────────────────────────────

#[test]
fn test_round_cents_half_up() {
    assert_eq!(round_cents(dec!(1.005)), dec!(1.01));
    assert_eq!(round_cents(dec!(1.004)), dec!(1.00));
    assert_eq!(round_cents(dec!(2.675)), dec!(2.68));
    assert_eq!(round_cents(dec!(400)), dec!(400.00));
}

// ── End to end ────────────────────────────────────────────────

#[test]
fn test_history_to_projection_pipeline() {
    let gold = RewardSchedule::points("Gold", Ecosystem::new("AMEX_MR"), dec!(1))
        .unwrap()
        .with_multiplier(SpendCategory::Dining, dec!(4))
        .unwrap()
        .with_multiplier(SpendCategory::Groceries, dec!(4))
        .unwrap();
    let cards = vec![OwnedCard::new("gold", Arc::new(gold))];

    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
    let txns = vec![
        TransactionRecord::new(day(3, 5), dec!(100), "5812", "gold"),
        TransactionRecord::new(day(4, 5), dec!(100), "5812", "gold"),
        TransactionRecord::new(day(5, 5), dec!(100), "5812", "gold"),
        // Outside the window
        TransactionRecord::new(day(1, 5), dec!(900), "5812", "gold"),
    ];

    let as_of = day(5, 31).and_hms_opt(12, 0, 0).unwrap();
    let profile = aggregate_spend(&txns, window_start(as_of, DEFAULT_WINDOW_MONTHS)).unwrap();
    assert_eq!(
        profile.get(SpendCategory::Dining).unwrap().average_amount,
        dec!(100)
    );

    let recs = build_recommendations(&cards);
    assert_eq!(recs.recommendations.len(), 2);

    let projection = project(&profile, &cards, 3);
    let cumulative: Vec<_> = projection.points.iter().map(|p| p.cumulative_points).collect();
    assert_eq!(cumulative, vec![dec!(400), dec!(800), dec!(1200)]);
}
