use rust_decimal::Decimal;

use super::resolve_multiplier;
use crate::models::{OwnedCard, SpendCategory};

/// A card must beat this rate to be recommended for a category.
pub const BASELINE_MULTIPLIER: Decimal = Decimal::ONE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestCard<'a> {
    pub card: &'a OwnedCard,
    pub multiplier: Decimal,
}

impl BestCard<'_> {
    pub fn card_id(&self) -> &str {
        &self.card.id
    }
}

/// Pick the eligible card with the highest effective rate for `category`.
///
/// Cards are scanned in the supplied order and only a strictly higher rate
/// replaces the current pick, so the earliest card wins a tie. Returns `None`
/// when no card beats [`BASELINE_MULTIPLIER`].
pub fn select_best_card(category: SpendCategory, cards: &[OwnedCard]) -> Option<BestCard<'_>> {
    let mut best: Option<BestCard<'_>> = None;
    let mut best_multiplier = BASELINE_MULTIPLIER;

    for card in cards.iter().filter(|c| c.active) {
        let Some(schedule) = card.schedule.as_deref() else {
            continue;
        };
        let multiplier = resolve_multiplier(schedule, category);
        if multiplier > best_multiplier {
            best_multiplier = multiplier;
            best = Some(BestCard { card, multiplier });
        }
    }

    best
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
