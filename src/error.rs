use rust_decimal::Decimal;
use thiserror::Error;

/// Precondition failures raised by the reward engine.
///
/// Empty input (no cards, no transactions in the window) is not an error and
/// never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("unknown spend category: {0}")]
    UnknownCategory(String),

    #[error("card {card} has no reward schedule")]
    MissingSchedule { card: String },

    #[error("transaction references unknown card {card}")]
    UnknownCard { card: String },

    #[error("trailing window must cover at least one month")]
    InvalidWindow,

    #[error("multiplier for {category} must not be negative, got {value}")]
    InvalidMultiplier { category: String, value: Decimal },
}

pub type Result<T> = std::result::Result<T, RewardError>;
