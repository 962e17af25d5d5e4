use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::Ecosystem;

const DEFAULT_CENTS_PER_POINT: &[(&str, i64)] = &[
    ("AMEX_MR", 20),
    ("CHASE_UR", 20),
    ("CAPITAL_ONE", 17),
    ("CITI_TYP", 17),
    (Ecosystem::CASHBACK, 10),
];

/// Cents-per-point by ecosystem, defaults merged with user overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuations {
    cents_per_point: BTreeMap<Ecosystem, Decimal>,
}

impl Default for Valuations {
    fn default() -> Self {
        let cents_per_point = DEFAULT_CENTS_PER_POINT
            .iter()
            .map(|&(eco, tenths)| (Ecosystem::new(eco), Decimal::new(tenths, 1)))
            .collect();
        Self { cents_per_point }
    }
}

impl Valuations {
    pub fn with_override(mut self, ecosystem: Ecosystem, cents_per_point: Decimal) -> Self {
        self.cents_per_point.insert(ecosystem, cents_per_point);
        self
    }

    pub fn cents_per_point(&self, ecosystem: &Ecosystem) -> Option<Decimal> {
        self.cents_per_point.get(ecosystem).copied()
    }

    /// Dollar value of `points`, if the ecosystem has a valuation.
    pub fn estimated_value(&self, ecosystem: &Ecosystem, points: Decimal) -> Option<Decimal> {
        self.cents_per_point(ecosystem)
            .map(|cpp| crate::engine::round_cents(points * cpp / Decimal::ONE_HUNDRED))
    }
}

pub fn ecosystem_label(ecosystem: &Ecosystem) -> &str {
    match ecosystem.as_str() {
        "AMEX_MR" => "American Express MR",
        "CHASE_UR" => "Chase Ultimate Rewards",
        "CAPITAL_ONE" => "Capital One Miles",
        "CITI_TYP" => "Citi ThankYou Points",
        Ecosystem::CASHBACK => "Cash Back",
        other => other,
    }
}
