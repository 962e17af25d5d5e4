use serde::{Deserialize, Serialize};

use crate::error::RewardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpendCategory {
    Dining,
    Groceries,
    WholesaleClub,
    Gas,
    EvCharging,
    TravelAir,
    TravelHotel,
    TravelCarRental,
    Transit,
    Rideshare,
    Entertainment,
    Streaming,
    PhoneInternet,
    Drugstore,
    HomeImprovement,
    OfficeSupply,
    Fitness,
    Other,
}

impl SpendCategory {
    pub const COUNT: usize = 18;

    /// Every category, in the order recommendations and projections iterate them.
    pub const ALL: [SpendCategory; Self::COUNT] = [
        Self::Dining,
        Self::Groceries,
        Self::WholesaleClub,
        Self::Gas,
        Self::EvCharging,
        Self::TravelAir,
        Self::TravelHotel,
        Self::TravelCarRental,
        Self::Transit,
        Self::Rideshare,
        Self::Entertainment,
        Self::Streaming,
        Self::PhoneInternet,
        Self::Drugstore,
        Self::HomeImprovement,
        Self::OfficeSupply,
        Self::Fitness,
        Self::Other,
    ];

    pub fn all() -> &'static [SpendCategory] {
        &Self::ALL
    }

    /// Position in [`SpendCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dining => "DINING",
            Self::Groceries => "GROCERIES",
            Self::WholesaleClub => "WHOLESALE_CLUB",
            Self::Gas => "GAS",
            Self::EvCharging => "EV_CHARGING",
            Self::TravelAir => "TRAVEL_AIR",
            Self::TravelHotel => "TRAVEL_HOTEL",
            Self::TravelCarRental => "TRAVEL_CAR_RENTAL",
            Self::Transit => "TRANSIT",
            Self::Rideshare => "RIDESHARE",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Streaming => "STREAMING",
            Self::PhoneInternet => "PHONE_INTERNET",
            Self::Drugstore => "DRUGSTORE",
            Self::HomeImprovement => "HOME_IMPROVEMENT",
            Self::OfficeSupply => "OFFICE_SUPPLY",
            Self::Fitness => "FITNESS",
            Self::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dining => "Dining",
            Self::Groceries => "Groceries",
            Self::WholesaleClub => "Wholesale Clubs",
            Self::Gas => "Gas",
            Self::EvCharging => "EV Charging",
            Self::TravelAir => "Airfare",
            Self::TravelHotel => "Hotels",
            Self::TravelCarRental => "Car Rental",
            Self::Transit => "Transit",
            Self::Rideshare => "Rideshare",
            Self::Entertainment => "Entertainment",
            Self::Streaming => "Streaming",
            Self::PhoneInternet => "Phone & Internet",
            Self::Drugstore => "Drugstores",
            Self::HomeImprovement => "Home Improvement",
            Self::OfficeSupply => "Office Supply",
            Self::Fitness => "Fitness",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for SpendCategory {
    type Err = RewardError;

    /// Accepts the canonical identifier in any case, with `-` or spaces in
    /// place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| RewardError::UnknownCategory(s.trim().to_string()))
    }
}

impl std::fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
