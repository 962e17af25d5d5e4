use std::sync::Arc;

use super::RewardSchedule;

/// A user's instance of a card product. Several cards may share one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedCard {
    pub id: String,
    pub nickname: String,
    pub schedule: Option<Arc<RewardSchedule>>,
    pub active: bool,
}

impl OwnedCard {
    pub fn new(id: impl Into<String>, schedule: Arc<RewardSchedule>) -> Self {
        Self {
            id: id.into(),
            nickname: String::new(),
            schedule: Some(schedule),
            active: true,
        }
    }

    /// A card whose product could not be matched to a schedule.
    pub fn unconfigured(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nickname: String::new(),
            schedule: None,
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Active and backed by a schedule; the only cards that earn in selection.
    pub fn is_eligible(&self) -> bool {
        self.active && self.schedule.is_some()
    }

    pub fn display_name(&self) -> &str {
        if !self.nickname.is_empty() {
            &self.nickname
        } else if let Some(schedule) = &self.schedule {
            &schedule.name
        } else {
            &self.id
        }
    }
}

