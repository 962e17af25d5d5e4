//! Pure reward computations over caller-supplied snapshots.
//!
//! Nothing in here performs I/O or holds state between calls; identical inputs
//! always produce identical outputs.

mod aggregate;
mod project;
mod recommend;
mod reward;
mod select;
mod summary;

pub use aggregate::{
    aggregate_spend, aggregate_spend_over, window_start, CategorySpend, SpendProfile,
    DEFAULT_WINDOW_MONTHS,
};
pub use project::{project, EcosystemSummary, Projection, ProjectionPoint};
pub use recommend::{
    build_recommendations, CategoryRecommendation, RecommendationStatus, Recommendations,
};
pub use reward::{compute_reward, resolve_multiplier, RewardCalculation};
pub use select::{select_best_card, BestCard, BASELINE_MULTIPLIER};
pub use summary::{
    summarize, summarize_with, CardTotals, CategoryTotals, DateRange, EcosystemTotals,
    RewardSummary, RewardTotals, UnscheduledCards,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, half-up for the non-negative values the engine produces.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests;
