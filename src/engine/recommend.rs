use std::cmp::Reverse;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::select_best_card;
use crate::models::{OwnedCard, SpendCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecommendation {
    pub category: SpendCategory,
    pub card_id: String,
    pub card_name: String,
    pub multiplier: Decimal,
}

/// Distinguishes "nothing to recommend" from "no cards to judge".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    Ready,
    NoActiveCards,
}

impl RecommendationStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Ready => None,
            Self::NoActiveCards => {
                Some("No active cards found. Please link and configure your cards first.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommendations: Vec<CategoryRecommendation>,
    pub status: RecommendationStatus,
    pub cards_analyzed: usize,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn for_category(&self, category: SpendCategory) -> Option<&CategoryRecommendation> {
        self.recommendations.iter().find(|r| r.category == category)
    }
}

/// Best card for every category that has one, highest multiplier first.
pub fn build_recommendations(cards: &[OwnedCard]) -> Recommendations {
    let cards_analyzed = cards.iter().filter(|c| c.is_eligible()).count();
    if cards_analyzed == 0 {
        debug!(supplied = cards.len(), "no active configured cards");
        return Recommendations {
            recommendations: Vec::new(),
            status: RecommendationStatus::NoActiveCards,
            cards_analyzed,
        };
    }

    let mut recommendations: Vec<CategoryRecommendation> = SpendCategory::all()
        .iter()
        .filter_map(|&category| {
            select_best_card(category, cards).map(|best| CategoryRecommendation {
                category,
                card_id: best.card.id.clone(),
                card_name: best.card.display_name().to_string(),
                multiplier: best.multiplier,
            })
        })
        .collect();

    // Stable: equal multipliers keep category order.
    recommendations.sort_by_key(|r| Reverse(r.multiplier));

    debug!(
        cards = cards_analyzed,
        categories = recommendations.len(),
        "built recommendations"
    );

    Recommendations {
        recommendations,
        status: RecommendationStatus::Ready,
        cards_analyzed,
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
