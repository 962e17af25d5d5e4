use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::{find_product, CardProduct, Valuations};
use crate::models::{CurrencyKind, Ecosystem, OwnedCard, RewardSchedule, SpendCategory, TransactionRecord};

/// Read every data row of a headed CSV file, trimmed.
fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.context("Failed to read CSV record")?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// `name,currency,ecosystem,base_rate,multipliers[,issuer,annual_fee]`
pub fn load_schedules(path: &Path) -> Result<Vec<CardProduct>> {
    let rows = read_rows(path)?;
    let mut products = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        let name = field(row, 0);
        if name.is_empty() {
            anyhow::bail!("Row {line}: schedule name is required");
        }
        let currency = CurrencyKind::parse(field(row, 1))
            .ok_or_else(|| anyhow::anyhow!("Row {line}: unknown currency '{}'", field(row, 1)))?;
        let base = parse_decimal(field(row, 3))
            .with_context(|| format!("Row {line}: failed to parse base rate"))?;

        let schedule = match currency {
            CurrencyKind::Points => {
                let eco = field(row, 2);
                if eco.is_empty() {
                    anyhow::bail!("Row {line}: points schedule '{name}' needs an ecosystem");
                }
                RewardSchedule::points(name, Ecosystem::new(eco), base)
            }
            CurrencyKind::Cashback => RewardSchedule::cashback(name, base),
        }
        .with_context(|| format!("Row {line}: invalid schedule '{name}'"))?;

        let mut schedule = schedule;
        for (category, rate) in parse_multipliers(field(row, 4))
            .with_context(|| format!("Row {line}: failed to parse multipliers"))?
        {
            schedule
                .multipliers
                .set(category, rate)
                .with_context(|| format!("Row {line}: invalid multiplier"))?;
        }

        let annual_fee = parse_decimal(field(row, 6))
            .with_context(|| format!("Row {line}: failed to parse annual fee"))?;

        products.push(CardProduct {
            issuer: field(row, 5).to_string(),
            annual_fee,
            schedule: Arc::new(schedule),
        });
    }

    Ok(products)
}

/// `id,product,active[,nickname]`; row order is the card selection order.
pub fn load_cards(path: &Path, products: &[CardProduct]) -> Result<Vec<OwnedCard>> {
    let rows = read_rows(path)?;
    let mut cards = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        let id = field(row, 0);
        if id.is_empty() {
            anyhow::bail!("Row {line}: card id is required");
        }
        if cards.iter().any(|c: &OwnedCard| c.id == id) {
            anyhow::bail!("Row {line}: duplicate card id '{id}'");
        }

        let product_name = field(row, 1);
        let mut card = match find_product(products, product_name) {
            Some(product) => OwnedCard::new(id, product.schedule.clone()),
            None => {
                tracing::warn!(card = id, product = product_name, "unknown card product");
                OwnedCard::unconfigured(id)
            }
        };
        card.active = parse_bool(field(row, 2))
            .with_context(|| format!("Row {line}: failed to parse active flag"))?;
        card.nickname = field(row, 3).to_string();
        cards.push(card);
    }

    Ok(cards)
}

/// `date,amount,mcc,card_id[,description]`
pub fn load_transactions(path: &Path) -> Result<Vec<TransactionRecord>> {
    let rows = read_rows(path)?;
    let mut transactions = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        let date_str = field(row, 0);
        if date_str.is_empty() {
            continue;
        }
        let date = parse_date(date_str)
            .with_context(|| format!("Row {line}: failed to parse date '{date_str}'"))?;
        let amount_str = field(row, 1);
        if amount_str.is_empty() {
            anyhow::bail!("Row {line}: amount is required");
        }
        let amount = parse_decimal(amount_str)
            .with_context(|| format!("Row {line}: failed to parse amount"))?;
        let card_id = field(row, 3);
        if card_id.is_empty() {
            anyhow::bail!("Row {line}: card id is required");
        }

        let mut txn = TransactionRecord::new(date, amount, field(row, 2), card_id);
        txn.description = field(row, 4).to_string();
        transactions.push(txn);
    }

    Ok(transactions)
}

/// `ecosystem,cents_per_point`, laid over `base`.
pub fn load_valuations(path: &Path, base: Valuations) -> Result<Valuations> {
    let rows = read_rows(path)?;
    let mut valuations = base;

    for (i, row) in rows.iter().enumerate() {
        let line = i + 2;
        let ecosystem = field(row, 0);
        if ecosystem.is_empty() {
            anyhow::bail!("Row {line}: ecosystem is required");
        }
        let raw = field(row, 1);
        if raw.is_empty() {
            anyhow::bail!("Row {line}: cents per point is required");
        }
        let cents = parse_decimal(raw)
            .with_context(|| format!("Row {line}: failed to parse cents per point"))?;
        if cents < Decimal::ZERO {
            anyhow::bail!("Row {line}: cents per point must not be negative, got {cents}");
        }
        valuations = valuations.with_override(Ecosystem::new(ecosystem), cents);
    }

    Ok(valuations)
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

pub(crate) fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ',', '"'], "").trim().to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse '{}' as decimal", s))
}

pub(crate) fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "" | "true" | "yes" | "y" | "1" | "active" => Ok(true),
        "false" | "no" | "n" | "0" | "inactive" => Ok(false),
        other => anyhow::bail!("Not a boolean: {other}"),
    }
}

/// `DINING=4;GROCERIES=4` into category/rate pairs.
pub(crate) fn parse_multipliers(s: &str) -> Result<Vec<(SpendCategory, Decimal)>> {
    s.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (cat, rate) = part
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("Expected CATEGORY=rate, got '{part}'"))?;
            let category = SpendCategory::from_str(cat)?;
            let rate = parse_decimal(rate)?;
            Ok((category, rate))
        })
        .collect()
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
