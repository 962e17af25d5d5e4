mod csv_import;

pub use csv_import::{load_cards, load_schedules, load_transactions, load_valuations};

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::{built_in_products, merge_products, CardProduct, Valuations};
use crate::models::{OwnedCard, TransactionRecord};

pub const SCHEDULES_FILE: &str = "schedules.csv";
pub const CARDS_FILE: &str = "cards.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const VALUATIONS_FILE: &str = "valuations.csv";

/// One consistent read of everything the engine needs.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub products: Vec<CardProduct>,
    pub cards: Vec<OwnedCard>,
    pub transactions: Vec<TransactionRecord>,
    pub valuations: Valuations,
}

impl Snapshot {
    /// Load from a data directory. Only the built-in catalog is required;
    /// missing files read as empty.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut products = built_in_products().context("Built-in card catalog is invalid")?;

        let schedules_path = dir.join(SCHEDULES_FILE);
        if schedules_path.exists() {
            let custom = load_schedules(&schedules_path)?;
            tracing::debug!(count = custom.len(), "loaded custom schedules");
            products = merge_products(products, custom);
        }

        let cards_path = dir.join(CARDS_FILE);
        let cards = if cards_path.exists() {
            load_cards(&cards_path, &products)?
        } else {
            Vec::new()
        };

        let txns_path = dir.join(TRANSACTIONS_FILE);
        let transactions = if txns_path.exists() {
            load_transactions(&txns_path)?
        } else {
            Vec::new()
        };

        let valuations_path = dir.join(VALUATIONS_FILE);
        let valuations = if valuations_path.exists() {
            load_valuations(&valuations_path, Valuations::default())?
        } else {
            Valuations::default()
        };

        tracing::info!(
            dir = %dir.display(),
            products = products.len(),
            cards = cards.len(),
            transactions = transactions.len(),
            "loaded snapshot"
        );

        Ok(Self {
            products,
            cards,
            transactions,
            valuations,
        })
    }
}

#[cfg(test)]
mod tests;
