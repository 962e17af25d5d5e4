#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── format_money ──────────────────────────────────────────────

#[test]
fn test_format_money_small() {
    assert_eq!(format_money(dec!(0)), "$0.00");
    assert_eq!(format_money(dec!(5.1)), "$5.10");
    assert_eq!(format_money(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_money_thousands() {
    assert_eq!(format_money(dec!(1000)), "$1,000.00");
    assert_eq!(format_money(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_money_negative() {
    assert_eq!(format_money(dec!(-2500.5)), "-$2,500.50");
}

// ── format_points ─────────────────────────────────────────────

#[test]
fn test_format_points_whole() {
    assert_eq!(format_points(dec!(24000)), "24,000");
    assert_eq!(format_points(dec!(636)), "636");
}

#[test]
fn test_format_points_fractional() {
    assert_eq!(format_points(dec!(509.72)), "509.72");
    assert_eq!(format_points(dec!(1016.5)), "1,016.50");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate() {
    assert_eq!(truncate("Sapphire", 20), "Sapphire");
    assert_eq!(truncate("Sapphire", 8), "Sapphire");
    assert_eq!(truncate("Sapphire Reserve", 8), "Sapphir…");
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café crème", 5), "café…");
}
