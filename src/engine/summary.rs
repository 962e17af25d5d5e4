use std::cmp::Reverse;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::compute_reward;
use crate::classify::classify;
use crate::error::{Result, RewardError};
use crate::models::{CurrencyKind, Ecosystem, OwnedCard, SpendCategory, TransactionRecord};

/// Inclusive date bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTotals {
    pub spend: Decimal,
    pub earned: Decimal,
    pub count: u32,
}

impl RewardTotals {
    fn add(&mut self, spend: Decimal, earned: Decimal) {
        self.spend += spend;
        self.earned += earned;
        self.count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub category: SpendCategory,
    #[serde(flatten)]
    pub totals: RewardTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTotals {
    pub card_id: String,
    pub card_name: String,
    #[serde(flatten)]
    pub totals: RewardTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemTotals {
    pub ecosystem: Ecosystem,
    pub currency: CurrencyKind,
    pub earned: Decimal,
}

/// Rewards actually earned by recorded transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    pub range: DateRange,
    /// Highest spend first.
    pub by_category: Vec<CategoryTotals>,
    /// Cards with at least one transaction, in card order.
    pub by_card: Vec<CardTotals>,
    pub by_ecosystem: Vec<EcosystemTotals>,
    pub totals: RewardTotals,
    /// Cards whose spend was counted with nothing earned because they have
    /// no schedule.
    pub unscheduled_cards: Vec<String>,
}

/// What to do with a transaction on a card that has no reward schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnscheduledCards {
    /// Fail with [`RewardError::MissingSchedule`].
    #[default]
    Reject,
    /// Count the spend with zero earned and list the card in
    /// [`RewardSummary::unscheduled_cards`].
    CountSpend,
}

/// Summarize realized rewards, rejecting cards without a schedule.
pub fn summarize(
    transactions: &[TransactionRecord],
    cards: &[OwnedCard],
    range: DateRange,
) -> Result<RewardSummary> {
    summarize_with(transactions, cards, range, UnscheduledCards::Reject)
}

pub fn summarize_with(
    transactions: &[TransactionRecord],
    cards: &[OwnedCard],
    range: DateRange,
    unscheduled: UnscheduledCards,
) -> Result<RewardSummary> {
    let mut by_category = [RewardTotals::default(); SpendCategory::COUNT];
    let mut by_card = vec![RewardTotals::default(); cards.len()];
    let mut by_ecosystem: Vec<EcosystemTotals> = Vec::new();
    let mut totals = RewardTotals::default();
    let mut unscheduled_cards: Vec<String> = Vec::new();

    for txn in transactions.iter().filter(|t| range.contains(t.date)) {
        let slot = cards
            .iter()
            .position(|c| c.id == txn.card_id)
            .ok_or_else(|| RewardError::UnknownCard {
                card: txn.card_id.clone(),
            })?;
        let card = &cards[slot];
        let category = classify(&txn.merchant_code);

        let Some(schedule) = card.schedule.as_deref() else {
            if unscheduled == UnscheduledCards::Reject {
                return Err(RewardError::MissingSchedule {
                    card: card.id.clone(),
                });
            }
            if txn.is_refund() {
                return Err(RewardError::NegativeAmount(txn.amount));
            }
            if !unscheduled_cards.contains(&card.id) {
                warn!(card = %card.id, "card has no reward schedule, counting spend only");
                unscheduled_cards.push(card.id.clone());
            }
            by_category[category.index()].add(txn.amount, Decimal::ZERO);
            by_card[slot].add(txn.amount, Decimal::ZERO);
            totals.add(txn.amount, Decimal::ZERO);
            continue;
        };

        let reward = compute_reward(txn.amount, category, schedule)?;

        by_category[category.index()].add(txn.amount, reward.earned);
        by_card[slot].add(txn.amount, reward.earned);
        match by_ecosystem.iter_mut().find(|e| e.ecosystem == reward.ecosystem) {
            Some(entry) => entry.earned += reward.earned,
            None => by_ecosystem.push(EcosystemTotals {
                ecosystem: reward.ecosystem,
                currency: reward.currency,
                earned: reward.earned,
            }),
        }
        totals.add(txn.amount, reward.earned);
    }

    let mut by_category: Vec<CategoryTotals> = SpendCategory::all()
        .iter()
        .map(|&category| CategoryTotals {
            category,
            totals: by_category[category.index()],
        })
        .filter(|c| c.totals.count > 0)
        .collect();
    by_category.sort_by_key(|c| Reverse(c.totals.spend));

    let by_card = cards
        .iter()
        .zip(by_card)
        .filter(|(_, t)| t.count > 0)
        .map(|(card, totals)| CardTotals {
            card_id: card.id.clone(),
            card_name: card.display_name().to_string(),
            totals,
        })
        .collect();

    debug!(transactions = totals.count, "summarized realized rewards");

    Ok(RewardSummary {
        range,
        by_category,
        by_card,
        by_ecosystem,
        totals,
        unscheduled_cards,
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
