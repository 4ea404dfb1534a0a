//! Media space model - the unit of advertising inventory

use serde::{Deserialize, Serialize};

/// Physical placement kind of a media space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceKind {
    Endcap,
    DigitalDisplay,
    Window,
    FloorStanding,
    Checkout,
    Entrance,
}

impl SpaceKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SpaceKind::Endcap => "Endcap",
            SpaceKind::DigitalDisplay => "Digital Display",
            SpaceKind::Window => "Window Display",
            SpaceKind::FloorStanding => "Floor-Standing Display",
            SpaceKind::Checkout => "Checkout",
            SpaceKind::Entrance => "Entrance",
        }
    }

    /// All kinds, in the order filter chrome presents them
    pub fn all() -> &'static [SpaceKind] {
        &[
            SpaceKind::Endcap,
            SpaceKind::DigitalDisplay,
            SpaceKind::Window,
            SpaceKind::FloorStanding,
            SpaceKind::Checkout,
            SpaceKind::Entrance,
        ]
    }
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Availability status of a media space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceStatus {
    Available,
    Reserved,
    HighDemand,
}

/// Visual tone for a status badge (the UI maps these to its own colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Default,
    Secondary,
    Destructive,
}

impl SpaceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SpaceStatus::Available => "Available",
            SpaceStatus::Reserved => "Reserved",
            SpaceStatus::HighDemand => "High Demand",
        }
    }

    pub fn badge(&self) -> BadgeTone {
        match self {
            SpaceStatus::Available => BadgeTone::Default,
            SpaceStatus::Reserved => BadgeTone::Destructive,
            SpaceStatus::HighDemand => BadgeTone::Secondary,
        }
    }
}

impl std::fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Retail sectors a space or store can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreSector {
    SalesFloor,
    SelfService,
    WhiteGoods,
    Furniture,
    Mobile,
    Electronics,
    Appliances,
    BedAndBath,
    Fashion,
    Groceries,
}

impl StoreSector {
    pub fn display_name(&self) -> &'static str {
        match self {
            StoreSector::SalesFloor => "Sales Floor",
            StoreSector::SelfService => "Self Service",
            StoreSector::WhiteGoods => "White Goods",
            StoreSector::Furniture => "Furniture",
            StoreSector::Mobile => "Mobile",
            StoreSector::Electronics => "Electronics",
            StoreSector::Appliances => "Appliances",
            StoreSector::BedAndBath => "Bed & Bath",
            StoreSector::Fashion => "Fashion",
            StoreSector::Groceries => "Groceries",
        }
    }
}

impl std::fmt::Display for StoreSector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a space sits: store reference is by ID, never by name.
/// Display names are a join through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceLocation {
    pub store_id: String,
    pub sector: StoreSector,
    pub city: String,
}

/// An advertising space inside a physical store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: SpaceKind,
    pub location: SpaceLocation,
    /// Monthly rate
    pub price: u32,
    pub images: Vec<String>,
    pub status: SpaceStatus,
    /// Estimated viewers per day
    pub exposure_potential: u32,
    /// Display-only percentage
    pub occupancy_rate: u8,
}

impl Space {
    /// Only available spaces may enter a selection
    pub fn is_selectable(&self) -> bool {
        matches!(self.status, SpaceStatus::Available)
    }
}
