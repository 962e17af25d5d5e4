use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SpendCategory;
use crate::error::{Result, RewardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyKind {
    Points,
    Cashback,
}

impl CurrencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "POINTS",
            Self::Cashback => "CASHBACK",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "points" | "point" | "miles" => Some(Self::Points),
            "cashback" | "cash back" | "cash" => Some(Self::Cashback),
            _ => None,
        }
    }
}

impl std::fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A rewards currency program points accrue into, e.g. `CHASE_UR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ecosystem(String);

impl Ecosystem {
    pub const CASHBACK: &'static str = "CASHBACK";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_uppercase())
    }

    /// The generic ecosystem every cashback schedule accrues into.
    pub fn cashback() -> Self {
        Self(Self::CASHBACK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Sparse per-category rates. An absent entry is distinct from an explicit
/// zero so lookups can fall back to the base rate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMultipliers {
    rates: [Option<Decimal>; SpendCategory::COUNT],
}

impl CategoryMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: SpendCategory) -> Option<Decimal> {
        self.rates[category.index()]
    }

    pub fn set(&mut self, category: SpendCategory, rate: Decimal) -> Result<()> {
        if rate < Decimal::ZERO {
            return Err(RewardError::InvalidMultiplier {
                category: category.as_str().to_string(),
                value: rate,
            });
        }
        self.rates[category.index()] = Some(rate);
        Ok(())
    }

    pub fn remove(&mut self, category: SpendCategory) {
        self.rates[category.index()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.rates.iter().all(Option::is_none)
    }

    /// Explicit entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (SpendCategory, Decimal)> + '_ {
        SpendCategory::ALL
            .iter()
            .filter_map(|&c| self.get(c).map(|rate| (c, rate)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardSchedule {
    pub name: String,
    pub base_earn_rate: Decimal,
    pub multipliers: CategoryMultipliers,
    pub currency: CurrencyKind,
    pub ecosystem: Ecosystem,
}

impl RewardSchedule {
    pub fn points(name: impl Into<String>, ecosystem: Ecosystem, base_earn_rate: Decimal) -> Result<Self> {
        Self::build(name.into(), CurrencyKind::Points, ecosystem, base_earn_rate)
    }

    pub fn cashback(name: impl Into<String>, base_earn_rate: Decimal) -> Result<Self> {
        Self::build(
            name.into(),
            CurrencyKind::Cashback,
            Ecosystem::cashback(),
            base_earn_rate,
        )
    }

    fn build(
        name: String,
        currency: CurrencyKind,
        ecosystem: Ecosystem,
        base_earn_rate: Decimal,
    ) -> Result<Self> {
        if base_earn_rate < Decimal::ZERO {
            return Err(RewardError::InvalidMultiplier {
                category: "BASE".into(),
                value: base_earn_rate,
            });
        }
        Ok(Self {
            name,
            base_earn_rate,
            multipliers: CategoryMultipliers::new(),
            currency,
            ecosystem,
        })
    }

    /// Builder-style helper for adding one category rate.
    pub fn with_multiplier(mut self, category: SpendCategory, rate: Decimal) -> Result<Self> {
        self.multipliers.set(category, rate)?;
        Ok(self)
    }

    /// The explicit rate for `category`, if the schedule has one.
    pub fn multiplier_for(&self, category: SpendCategory) -> Option<Decimal> {
        self.multipliers.get(category)
    }
}
