use crate::dom::{FormSource, ids};
use crate::model::Vehicle;
use serde::{Deserialize, Serialize};

pub const BUDGET_CEILING: u64 = 3000;
pub const PREMIUM_FLOOR: u64 = 6000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBracket {
    #[default]
    All,
    Budget,
    Mid,
    Premium,
}

impl PriceBracket {
    /// Unknown control values behave like `all`.
    pub fn from_control(value: &str) -> Self {
        match value {
            "budget" => PriceBracket::Budget,
            "mid" => PriceBracket::Mid,
            "premium" => PriceBracket::Premium,
            _ => PriceBracket::All,
        }
    }

    pub fn as_control(self) -> &'static str {
        match self {
            PriceBracket::All => "all",
            PriceBracket::Budget => "budget",
            PriceBracket::Mid => "mid",
            PriceBracket::Premium => "premium",
        }
    }

    /// Both limits are inclusive, so 3000 and 6000 sit in two brackets each.
    pub fn contains(self, price: u64) -> bool {
        match self {
            PriceBracket::All => true,
            PriceBracket::Budget => price <= BUDGET_CEILING,
            PriceBracket::Mid => (BUDGET_CEILING..=PREMIUM_FLOOR).contains(&price),
            PriceBracket::Premium => price >= PREMIUM_FLOOR,
        }
    }
}

/// Current values of the price, type and search controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price: PriceBracket,
    pub vehicle_type: String,
    pub search: String,
}

impl FilterCriteria {
    pub fn new(price: PriceBracket, vehicle_type: &str, search: &str) -> Self {
        Self {
            price,
            vehicle_type: vehicle_type.to_string(),
            search: search.to_string(),
        }
    }

    /// Missing controls fall back to the unfiltered defaults.
    pub fn from_controls<S: FormSource + ?Sized>(source: &S) -> Self {
        Self {
            price: PriceBracket::from_control(source.value(ids::PRICE_FILTER).unwrap_or("all")),
            vehicle_type: source.value(ids::TYPE_FILTER).unwrap_or("").to_string(),
            search: source.value(ids::VEHICLE_SEARCH).unwrap_or("").to_string(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.price == PriceBracket::All && self.vehicle_type.is_empty() && self.search.is_empty()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let name = vehicle.name.to_lowercase();

        if !self.search.is_empty() && !name.contains(&self.search.to_lowercase()) {
            return false;
        }
        if !self.price.contains(vehicle.price) {
            return false;
        }
        if !self.vehicle_type.is_empty() && !name.contains(&self.vehicle_type.to_lowercase()) {
            return false;
        }
        true
    }
}
