use std::sync::LazyLock;

use regex::Regex;

use crate::models::SpendCategory;

/// Pulls the four-digit code out of inputs like `5812`, `MCC 5812` or
/// `5812 - Eating Places`.
static MCC_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[Mm][Cc][Cc])?[\s:#-]*([0-9]{4})\b").ok());

/// Map a raw merchant-category code to its spend category.
///
/// Total over every input: anything unparseable or unmapped is `Other`.
pub fn classify(raw_code: &str) -> SpendCategory {
    match parse_code(raw_code) {
        Some(code) => category_for_code(code),
        None => SpendCategory::Other,
    }
}

pub(crate) fn parse_code(raw_code: &str) -> Option<u16> {
    let re = MCC_CODE.as_ref()?;
    re.captures(raw_code)?
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
}

pub(crate) fn category_for_code(code: u16) -> SpendCategory {
    use SpendCategory::*;

    match code {
        // Airline-specific codes plus generic carriers and airports
        3000..=3299 | 4511 | 4582 => TravelAir,
        // Car rental agencies
        3351..=3500 | 7512 | 7513 | 7519 => TravelCarRental,
        // Hotel-specific codes plus generic lodging
        3501..=3999 | 7011 | 7012 => TravelHotel,
        4111 | 4112 | 4131 | 4784 | 4789 | 7523 => Transit,
        4121 => Rideshare,
        4812 | 4814 | 4816 => PhoneInternet,
        4899 | 5815..=5818 => Streaming,
        5111 | 5943 => OfficeSupply,
        5200 | 5211 | 5231 | 5251 | 5261 => HomeImprovement,
        5300 => WholesaleClub,
        5411 | 5422 | 5441 | 5451 | 5462 | 5499 => Groceries,
        5541 | 5542 | 5983 => Gas,
        5552 => EvCharging,
        5811..=5814 => Dining,
        5912 => Drugstore,
        7832 | 7922 | 7929 | 7932 | 7933 | 7941 | 7991 | 7996 | 7998 | 7999 => Entertainment,
        7298 | 7997 => Fitness,
        _ => Other,
    }
}

#[cfg(test)]
mod tests;
