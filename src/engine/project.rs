use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::{round_cents, select_best_card, SpendProfile};
use crate::models::{Ecosystem, OwnedCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub month_offset: u32,
    pub ecosystem: Ecosystem,
    pub projected_points: Decimal,
    pub cumulative_points: Decimal,
}

impl ProjectionPoint {
    /// First day of the calendar month this point forecasts, counting the
    /// month after `as_of` as offset zero.
    pub fn calendar_month(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        as_of
            .with_day(1)?
            .checked_add_months(Months::new(self.month_offset + 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemSummary {
    pub ecosystem: Ecosystem,
    pub avg_monthly_points: Decimal,
    pub final_cumulative_points: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Month-major: every ecosystem for month 0, then month 1, ...
    pub points: Vec<ProjectionPoint>,
    /// One entry per ecosystem, in the order the ecosystems first appear
    /// among the cards.
    pub summary: Vec<EcosystemSummary>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.summary.is_empty()
    }

    pub fn summary_for(&self, ecosystem: &Ecosystem) -> Option<&EcosystemSummary> {
        self.summary.iter().find(|s| &s.ecosystem == ecosystem)
    }

    pub fn points_for<'a>(
        &'a self,
        ecosystem: &'a Ecosystem,
    ) -> impl Iterator<Item = &'a ProjectionPoint> + 'a {
        self.points.iter().filter(move |p| &p.ecosystem == ecosystem)
    }
}

/// Forecast reward accrual per ecosystem over `months` future months.
///
/// The current best-card assignment is held fixed for the whole horizon.
pub fn project(profile: &SpendProfile, cards: &[OwnedCard], months: u32) -> Projection {
    let ecosystems = distinct_ecosystems(cards);
    if ecosystems.is_empty() {
        debug!("no ecosystems to project");
        return Projection::default();
    }

    // Spend routed to each ecosystem per month, resolved once up front.
    let assignments: Vec<(&Ecosystem, Decimal)> = profile
        .iter()
        .filter_map(|spend| {
            let best = select_best_card(spend.category, cards)?;
            let schedule = best.card.schedule.as_deref()?;
            Some((&schedule.ecosystem, spend.average_amount * best.multiplier))
        })
        .collect();

    let mut points = Vec::with_capacity(ecosystems.len() * months as usize);
    // Running sum of rounded monthly figures per ecosystem.
    let mut previous = vec![Decimal::ZERO; ecosystems.len()];

    for month_offset in 0..months {
        for (slot, ecosystem) in ecosystems.iter().enumerate() {
            let monthly: Decimal = assignments
                .iter()
                .filter(|(eco, _)| *eco == *ecosystem)
                .map(|(_, earned)| *earned)
                .sum();

            let projected_points = round_cents(monthly);
            let cumulative_points = round_cents(previous[slot] + monthly);
            previous[slot] += projected_points;

            points.push(ProjectionPoint {
                month_offset,
                ecosystem: (*ecosystem).clone(),
                projected_points,
                cumulative_points,
            });
        }
    }

    let summary = ecosystems
        .iter()
        .map(|ecosystem| summarize_ecosystem(ecosystem, &points, months))
        .collect();

    debug!(
        ecosystems = ecosystems.len(),
        months,
        categories = profile.categories.len(),
        "projected rewards"
    );

    Projection { points, summary }
}

fn distinct_ecosystems(cards: &[OwnedCard]) -> Vec<&Ecosystem> {
    let mut seen: Vec<&Ecosystem> = Vec::new();
    for schedule in cards
        .iter()
        .filter(|c| c.active)
        .filter_map(|c| c.schedule.as_deref())
    {
        if !seen.contains(&&schedule.ecosystem) {
            seen.push(&schedule.ecosystem);
        }
    }
    seen
}

fn summarize_ecosystem(
    ecosystem: &Ecosystem,
    points: &[ProjectionPoint],
    months: u32,
) -> EcosystemSummary {
    let mine: Vec<&ProjectionPoint> = points.iter().filter(|p| &p.ecosystem == ecosystem).collect();

    let avg_monthly_points = if months == 0 {
        Decimal::ZERO
    } else {
        let total: Decimal = mine.iter().map(|p| p.projected_points).sum();
        round_cents(total / Decimal::from(months))
    };
    let final_cumulative_points = mine
        .last()
        .map(|p| p.cumulative_points)
        .unwrap_or(Decimal::ZERO);

    EcosystemSummary {
        ecosystem: ecosystem.clone(),
        avg_monthly_points,
        final_cumulative_points,
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
