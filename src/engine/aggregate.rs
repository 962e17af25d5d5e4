use chrono::{Months, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use crate::classify::classify;
use crate::error::{Result, RewardError};
use crate::models::{SpendCategory, TransactionRecord};

pub const DEFAULT_WINDOW_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: SpendCategory,
    pub average_amount: Decimal,
    pub average_count: u32,
}

/// Average monthly spend per category over a trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendProfile {
    pub window_start: NaiveDate,
    pub months: u32,
    /// Categories with positive spend, in category order.
    pub categories: Vec<CategorySpend>,
}

impl SpendProfile {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: SpendCategory) -> Option<&CategorySpend> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategorySpend> {
        self.categories.iter()
    }

    /// Sum of the per-category monthly averages.
    pub fn total_monthly_average(&self) -> Decimal {
        self.categories.iter().map(|c| c.average_amount).sum()
    }
}

/// Start of the trailing window: `months` calendar months before `as_of`,
/// at the start of that day.
pub fn window_start(as_of: NaiveDateTime, months: u32) -> NaiveDateTime {
    let day = as_of.date();
    day.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
        .and_time(chrono::NaiveTime::MIN)
}

pub fn aggregate_spend(
    transactions: &[TransactionRecord],
    window_start: NaiveDateTime,
) -> Result<SpendProfile> {
    aggregate_spend_over(transactions, window_start, DEFAULT_WINDOW_MONTHS)
}

/// Bucket transactions on or after `window_start` by category and divide the
/// totals by `months`.
pub fn aggregate_spend_over(
    transactions: &[TransactionRecord],
    window_start: NaiveDateTime,
    months: u32,
) -> Result<SpendProfile> {
    if months == 0 {
        return Err(RewardError::InvalidWindow);
    }
    let start = window_start.date();

    let mut sums = [Decimal::ZERO; SpendCategory::COUNT];
    let mut counts = [0u32; SpendCategory::COUNT];
    let mut considered = 0usize;

    for txn in transactions.iter().filter(|t| t.date >= start) {
        if txn.is_refund() {
            return Err(RewardError::NegativeAmount(txn.amount));
        }
        let idx = classify(&txn.merchant_code).index();
        sums[idx] += txn.amount;
        counts[idx] += 1;
        considered += 1;
    }

    let divisor = Decimal::from(months);
    let categories: Vec<CategorySpend> = SpendCategory::all()
        .iter()
        .map(|&category| {
            let idx = category.index();
            CategorySpend {
                category,
                average_amount: sums[idx] / divisor,
                average_count: average_count(counts[idx], divisor),
            }
        })
        .filter(|c| c.average_amount > Decimal::ZERO)
        .collect();

    debug!(
        %start,
        months,
        transactions = considered,
        categories = categories.len(),
        "aggregated spend"
    );

    Ok(SpendProfile {
        window_start: start,
        months,
        categories,
    })
}

fn average_count(count: u32, divisor: Decimal) -> u32 {
    (Decimal::from(count) / divisor)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
