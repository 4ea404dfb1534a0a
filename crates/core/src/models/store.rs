//! Store model - a physical retail location

use serde::{Deserialize, Serialize};

use super::StoreSector;

/// Rough footprint classification of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSize {
    Small,
    Medium,
    Large,
}

impl StoreSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            StoreSize::Small => "Small",
            StoreSize::Medium => "Medium",
            StoreSize::Large => "Large",
        }
    }
}

/// Opening hours, as display strings per day group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

/// Geographic coordinates for the store map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A physical retail location referenced by spaces via its `id`.
/// Static seed data for this system; no create/update/delete in scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub opening_hours: OpeningHours,
    pub store_size: StoreSize,
    /// Average visitors per day
    pub foot_traffic: u32,
    pub coordinates: Coordinates,
    /// Sectors present in this store
    pub sectors: Vec<StoreSector>,
}
