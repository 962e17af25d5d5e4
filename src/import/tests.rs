#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_empty_dir_loads_catalog_only() {
    let dir = tempfile::tempdir().unwrap();
    let snap = Snapshot::load(dir.path()).unwrap();
    assert_eq!(snap.products.len(), 10);
    assert!(snap.cards.is_empty());
    assert!(snap.transactions.is_empty());
    assert_eq!(snap.valuations, Valuations::default());
}

#[test]
fn test_full_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(SCHEDULES_FILE),
        "name,currency,ecosystem,base_rate,multipliers\nHouse Card,points,HOUSE,1,GAS=5\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(CARDS_FILE),
        "id,product,active\nh1,House Card,true\ng1,American Express Gold Card,true\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(TRANSACTIONS_FILE),
        "date,amount,mcc,card_id\n2024-04-01,40.00,5541,h1\n",
    )
    .unwrap();

    let snap = Snapshot::load(dir.path()).unwrap();
    assert_eq!(snap.products.len(), 11);
    assert_eq!(snap.cards.len(), 2);
    assert!(snap.cards.iter().all(|c| c.is_eligible()));
    assert_eq!(snap.cards[0].schedule.as_ref().unwrap().ecosystem.as_str(), "HOUSE");
    assert_eq!(snap.transactions.len(), 1);
}

#[test]
fn test_bad_cards_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CARDS_FILE), "id,product,active\n,Citi Double Cash,1\n").unwrap();
    assert!(Snapshot::load(dir.path()).is_err());
}

#[test]
fn test_valuations_file_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(VALUATIONS_FILE),
        "ecosystem,cents_per_point\nCHASE_UR,1.25\n",
    )
    .unwrap();

    let snap = Snapshot::load(dir.path()).unwrap();
    let ur = crate::models::Ecosystem::new("CHASE_UR");
    assert_eq!(
        snap.valuations.estimated_value(&ur, rust_decimal_macros::dec!(1000)),
        Some(rust_decimal_macros::dec!(12.50))
    );
}
