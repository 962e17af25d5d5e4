use rust_decimal::Decimal;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn grouped(val: Decimal, places: usize) -> String {
    let formatted = format!("{:.*}", places, val.abs());
    let (int_part, frac) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match frac {
        Some(f) => format!("{sign}{}.{f}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(int_part)),
    }
}

/// `1234.5` → `"$1,234.50"`
pub(crate) fn format_money(val: Decimal) -> String {
    let s = grouped(val, 2);
    match s.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${s}"),
    }
}

/// Points keep whole units unless the value carries cents (cashback).
pub(crate) fn format_points(val: Decimal) -> String {
    if val.fract().is_zero() {
        grouped(val, 0)
    } else {
        grouped(val, 2)
    }
}

/// Clip to `max` characters, marking the cut with "…".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    match max {
        0 => String::new(),
        _ => s.chars().take(max - 1).chain(std::iter::once('…')).collect(),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
