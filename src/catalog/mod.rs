//! Built-in card products and ecosystem metadata.

mod valuation;

pub use valuation::{ecosystem_label, Valuations};

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{CurrencyKind, Ecosystem, RewardSchedule, SpendCategory};

/// A card product: its reward schedule plus issuer metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CardProduct {
    pub issuer: String,
    pub annual_fee: Decimal,
    pub schedule: Arc<RewardSchedule>,
}

impl CardProduct {
    pub fn name(&self) -> &str {
        &self.schedule.name
    }
}

struct ProductSpec {
    name: &'static str,
    issuer: &'static str,
    currency: CurrencyKind,
    ecosystem: &'static str,
    annual_fee: i64,
    /// Rates here and in `rates` are tenths, so 15 means 1.5x.
    base: i64,
    rates: &'static [(SpendCategory, i64)],
}

use SpendCategory::*;

const BUILT_IN: &[ProductSpec] = &[
    ProductSpec {
        name: "American Express Gold Card",
        issuer: "American Express",
        currency: CurrencyKind::Points,
        ecosystem: "AMEX_MR",
        annual_fee: 325,
        base: 10,
        rates: &[
            (Dining, 40),
            (Groceries, 40),
            (TravelAir, 30),
            (TravelHotel, 30),
            (TravelCarRental, 30),
        ],
    },
    ProductSpec {
        name: "Chase Sapphire Preferred",
        issuer: "Chase",
        currency: CurrencyKind::Points,
        ecosystem: "CHASE_UR",
        annual_fee: 95,
        base: 10,
        rates: &[
            (Dining, 30),
            (TravelAir, 20),
            (TravelHotel, 20),
            (TravelCarRental, 20),
            (Streaming, 30),
            (Groceries, 30),
        ],
    },
    ProductSpec {
        name: "Chase Sapphire Reserve",
        issuer: "Chase",
        currency: CurrencyKind::Points,
        ecosystem: "CHASE_UR",
        annual_fee: 550,
        base: 10,
        rates: &[(Dining, 30), (TravelAir, 50), (TravelHotel, 100), (TravelCarRental, 30)],
    },
    ProductSpec {
        name: "Capital One Venture X",
        issuer: "Capital One",
        currency: CurrencyKind::Points,
        ecosystem: "CAPITAL_ONE",
        annual_fee: 395,
        base: 20,
        rates: &[(TravelAir, 50), (TravelHotel, 100), (TravelCarRental, 100)],
    },
    ProductSpec {
        name: "Citi Double Cash",
        issuer: "Citi",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 0,
        base: 20,
        rates: &[],
    },
    ProductSpec {
        name: "Amex Blue Cash Preferred",
        issuer: "American Express",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 95,
        base: 10,
        rates: &[(Groceries, 60), (Gas, 30), (Transit, 30), (Streaming, 60)],
    },
    ProductSpec {
        name: "Chase Freedom Flex",
        issuer: "Chase",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 0,
        base: 10,
        rates: &[(Dining, 30), (Drugstore, 30)],
    },
    ProductSpec {
        name: "Discover it Cash Back",
        issuer: "Discover",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 0,
        base: 10,
        rates: &[],
    },
    ProductSpec {
        name: "Capital One Savor",
        issuer: "Capital One",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 95,
        base: 10,
        rates: &[(Dining, 40), (Entertainment, 40), (Streaming, 40), (Groceries, 30)],
    },
    ProductSpec {
        name: "Chase Freedom Unlimited",
        issuer: "Chase",
        currency: CurrencyKind::Cashback,
        ecosystem: Ecosystem::CASHBACK,
        annual_fee: 0,
        base: 15,
        rates: &[(Dining, 30), (Drugstore, 30)],
    },
];

fn tenths(value: i64) -> Decimal {
    Decimal::new(value, 1).normalize()
}

impl ProductSpec {
    fn build(&self) -> Result<CardProduct> {
        let mut schedule = match self.currency {
            CurrencyKind::Points => {
                RewardSchedule::points(self.name, Ecosystem::new(self.ecosystem), tenths(self.base))?
            }
            CurrencyKind::Cashback => RewardSchedule::cashback(self.name, tenths(self.base))?,
        };
        for &(category, rate) in self.rates {
            schedule.multipliers.set(category, tenths(rate))?;
        }
        Ok(CardProduct {
            issuer: self.issuer.to_string(),
            annual_fee: Decimal::from(self.annual_fee),
            schedule: Arc::new(schedule),
        })
    }
}

/// The products every installation knows about.
pub fn built_in_products() -> Result<Vec<CardProduct>> {
    BUILT_IN.iter().map(ProductSpec::build).collect()
}

/// Find a product by name (case-insensitive).
pub fn find_product<'a>(products: &'a [CardProduct], name: &str) -> Option<&'a CardProduct> {
    let lower = name.trim().to_lowercase();
    products
        .iter()
        .find(|p| p.name().to_lowercase() == lower)
}

/// Overlay `extra` onto `base`: same-named products are replaced in place,
/// new ones appended.
pub fn merge_products(mut base: Vec<CardProduct>, extra: Vec<CardProduct>) -> Vec<CardProduct> {
    for product in extra {
        let lower = product.name().to_lowercase();
        match base.iter_mut().find(|p| p.name().to_lowercase() == lower) {
            Some(existing) => *existing = product,
            None => base.push(product),
        }
    }
    base
}

#[cfg(test)]
mod tests;
