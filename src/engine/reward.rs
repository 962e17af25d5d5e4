use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::error::{Result, RewardError};
use crate::models::{CurrencyKind, Ecosystem, RewardSchedule, SpendCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardCalculation {
    /// Whole points for points schedules, exact currency units for cashback.
    pub earned: Decimal,
    pub multiplier: Decimal,
    pub currency: CurrencyKind,
    pub ecosystem: Ecosystem,
}

/// Effective rate for `category`: the explicit rate, else the base rate,
/// else 1. A zero at either step counts as unusable, so the result is always
/// strictly positive.
pub fn resolve_multiplier(schedule: &RewardSchedule, category: SpendCategory) -> Decimal {
    schedule
        .multiplier_for(category)
        .filter(|rate| *rate > Decimal::ZERO)
        .or_else(|| Some(schedule.base_earn_rate).filter(|rate| *rate > Decimal::ZERO))
        .unwrap_or(Decimal::ONE)
}

pub fn compute_reward(
    amount: Decimal,
    category: SpendCategory,
    schedule: &RewardSchedule,
) -> Result<RewardCalculation> {
    if amount < Decimal::ZERO {
        return Err(RewardError::NegativeAmount(amount));
    }

    let multiplier = resolve_multiplier(schedule, category);
    let raw = amount * multiplier;
    let earned = match schedule.currency {
        CurrencyKind::Points => raw.floor(),
        CurrencyKind::Cashback => raw,
    };

    trace!(%amount, %category, %multiplier, %earned, schedule = %schedule.name, "computed reward");

    Ok(RewardCalculation {
        earned,
        multiplier,
        currency: schedule.currency,
        ecosystem: schedule.ecosystem.clone(),
    })
}

#[cfg(test)]
#[path = "reward_tests.rs"]
mod tests;
