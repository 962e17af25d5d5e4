mod card;
mod category;
mod schedule;
mod transaction;

pub use card::OwnedCard;
pub use category::SpendCategory;
pub use schedule::{CategoryMultipliers, CurrencyKind, Ecosystem, RewardSchedule};
pub use transaction::TransactionRecord;
