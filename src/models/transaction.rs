use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Raw merchant-category code as delivered by the data source.
    pub merchant_code: String,
    pub card_id: String,
    pub description: String,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        merchant_code: impl Into<String>,
        card_id: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            merchant_code: merchant_code.into(),
            card_id: card_id.into(),
            description: String::new(),
        }
    }

    pub fn is_refund(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}
