#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use rust_decimal_macros::dec;

use super::*;
use crate::models::{Ecosystem, RewardSchedule};

fn card(id: &str, base: Decimal, rates: &[(SpendCategory, Decimal)]) -> OwnedCard {
    let mut schedule = RewardSchedule::points(id, Ecosystem::new("TEST"), base).unwrap();
    for &(c, r) in rates {
        schedule = schedule.with_multiplier(c, r).unwrap();
    }
    OwnedCard::new(id, Arc::new(schedule))
}

#[test]
fn test_picks_highest_multiplier() {
    let cards = vec![
        card("a", dec!(1), &[(SpendCategory::Dining, dec!(3))]),
        card("b", dec!(1), &[(SpendCategory::Dining, dec!(4))]),
    ];
    let best = select_best_card(SpendCategory::Dining, &cards).unwrap();
    assert_eq!(best.card_id(), "b");
    assert_eq!(best.multiplier, dec!(4));
}

#[test]
fn test_tie_goes_to_first_card() {
    let cards = vec![
        card("first", dec!(1), &[(SpendCategory::Gas, dec!(3))]),
        card("second", dec!(1), &[(SpendCategory::Gas, dec!(3))]),
    ];
    for _ in 0..5 {
        let best = select_best_card(SpendCategory::Gas, &cards).unwrap();
        assert_eq!(best.card_id(), "first");
    }

    let reversed: Vec<OwnedCard> = cards.into_iter().rev().collect();
    let best = select_best_card(SpendCategory::Gas, &reversed).unwrap();
    assert_eq!(best.card_id(), "second");
}

#[test]
fn test_baseline_rate_is_not_recommended() {
    let cards = vec![card("only", dec!(1), &[])];
    assert!(select_best_card(SpendCategory::Dining, &cards).is_none());
}

#[test]
fn test_base_rate_above_floor_counts() {
    let cards = vec![
        card("flat", dec!(2), &[]),
        card("dining", dec!(1), &[(SpendCategory::Dining, dec!(3))]),
    ];
    let best = select_best_card(SpendCategory::Gas, &cards).unwrap();
    assert_eq!(best.card_id(), "flat");
    assert_eq!(best.multiplier, dec!(2));

    let best = select_best_card(SpendCategory::Dining, &cards).unwrap();
    assert_eq!(best.card_id(), "dining");
}

#[test]
fn test_inactive_and_unconfigured_cards_skipped() {
    let cards = vec![
        card("closed", dec!(1), &[(SpendCategory::Dining, dec!(10))]).inactive(),
        OwnedCard::unconfigured("mystery"),
        card("open", dec!(1), &[(SpendCategory::Dining, dec!(2))]),
    ];
    let best = select_best_card(SpendCategory::Dining, &cards).unwrap();
    assert_eq!(best.card_id(), "open");
}

#[test]
fn test_empty_cards_yield_none() {
    for c in SpendCategory::all() {
        assert!(select_best_card(*c, &[]).is_none());
    }
}
