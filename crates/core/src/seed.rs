//! Seed data - the in-memory source's default contents
//!
//! A small catalog of spaces across a Brazilian retail chain
//! (Manaus-centered, with two northern satellites) plus a reservation
//! history covering every lifecycle state. Reservation dates are relative
//! to "now" so the history always renders a live mix of states.

use chrono::{Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::{
    ContactInfo, Coordinates, OpeningHours, PaymentStatus, Reservation, ReservationStatus, Space,
    SpaceKind, SpaceLocation, SpaceStatus, StoreLocation, StoreSector, StoreSize,
};

/// The stubbed session user every seeded reservation belongs to
pub const DEMO_USER_ID: &str = "user-001";

fn space(
    id: &str,
    name: &str,
    description: &str,
    kind: SpaceKind,
    store_id: &str,
    sector: StoreSector,
    city: &str,
    price: u32,
    status: SpaceStatus,
    exposure_potential: u32,
    occupancy_rate: u8,
) -> Space {
    Space {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        kind,
        location: SpaceLocation {
            store_id: store_id.into(),
            sector,
            city: city.into(),
        },
        price,
        images: vec![format!("https://media.vitrine.example/{}.jpg", id)],
        status,
        exposure_potential,
        occupancy_rate,
    }
}

pub fn spaces() -> Vec<Space> {
    vec![
        space(
            "space-001",
            "Premium Endcap",
            "End-of-gondola exposure in high-traffic aisles, ideal for product launches.",
            SpaceKind::Endcap,
            "store-001",
            StoreSector::Electronics,
            "Manaus",
            8000,
            SpaceStatus::Available,
            5000,
            85,
        ),
        space(
            "space-002",
            "55-inch Digital Display",
            "Digital screen at strategic points of the store for ads and promotional content.",
            SpaceKind::DigitalDisplay,
            "store-002",
            StoreSector::Mobile,
            "Manaus",
            5500,
            SpaceStatus::Available,
            6000,
            75,
        ),
        space(
            "space-003",
            "Central Window Display",
            "Premium spot in the main storefront, visible from the street and the entrance.",
            SpaceKind::Window,
            "store-002",
            StoreSector::Furniture,
            "Manaus",
            10_000,
            SpaceStatus::Reserved,
            8000,
            90,
        ),
        space(
            "space-004",
            "Premium Floor Display",
            "Floor-standing display in a high-circulation area, perfect for product demos.",
            SpaceKind::FloorStanding,
            "store-001",
            StoreSector::Appliances,
            "Manaus",
            4000,
            SpaceStatus::Available,
            4500,
            70,
        ),
        space(
            "space-005",
            "Checkout Panel",
            "Panel next to the registers, seen by every customer finishing a purchase.",
            SpaceKind::Checkout,
            "store-003",
            StoreSector::SelfService,
            "Manaus",
            1500,
            SpaceStatus::Available,
            3500,
            60,
        ),
        space(
            "space-006",
            "Entrance Totem",
            "Freestanding totem at the main entrance, the first brand touchpoint in the store.",
            SpaceKind::Entrance,
            "store-003",
            StoreSector::SalesFloor,
            "Manaus",
            2200,
            SpaceStatus::HighDemand,
            7000,
            95,
        ),
        space(
            "space-007",
            "Secondary Window Display",
            "Side storefront facing the gallery corridor, strong evening foot traffic.",
            SpaceKind::Window,
            "store-004",
            StoreSector::Fashion,
            "Belém",
            900,
            SpaceStatus::Available,
            1200,
            40,
        ),
        space(
            "space-008",
            "Aisle Endcap",
            "Gondola end in the grocery aisles, steady weekday circulation.",
            SpaceKind::Endcap,
            "store-004",
            StoreSector::Groceries,
            "Belém",
            1000,
            SpaceStatus::Available,
            1500,
            55,
        ),
        space(
            "space-009",
            "Food Court Screen",
            "Shared screen loop by the food court seating area.",
            SpaceKind::DigitalDisplay,
            "store-005",
            StoreSector::Groceries,
            "Porto Velho",
            3000,
            SpaceStatus::Available,
            2800,
            65,
        ),
        space(
            "space-010",
            "Seasonal Floor Display",
            "Rotating seasonal display near the fashion section.",
            SpaceKind::FloorStanding,
            "store-005",
            StoreSector::Fashion,
            "Porto Velho",
            800,
            SpaceStatus::Reserved,
            900,
            30,
        ),
    ]
}

fn store(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    state: &str,
    postal_code: &str,
    phone: &str,
    store_size: StoreSize,
    foot_traffic: u32,
    coordinates: Coordinates,
    sectors: Vec<StoreSector>,
) -> StoreLocation {
    StoreLocation {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        city: city.into(),
        state: state.into(),
        postal_code: postal_code.into(),
        phone: phone.into(),
        opening_hours: OpeningHours {
            weekdays: "09:00 - 19:00".into(),
            saturday: "09:00 - 18:00".into(),
            sunday: "12:00 - 17:00".into(),
        },
        store_size,
        foot_traffic,
        coordinates,
        sectors,
    }
}

pub fn stores() -> Vec<StoreLocation> {
    vec![
        store(
            "store-001",
            "Loja Centro",
            "Av. Eduardo Ribeiro, 520 - Centro",
            "Manaus",
            "AM",
            "69010-010",
            "(92) 3232-9900",
            StoreSize::Large,
            2500,
            Coordinates {
                lat: -3.1313,
                lng: -60.0231,
            },
            vec![
                StoreSector::Electronics,
                StoreSector::Appliances,
                StoreSector::WhiteGoods,
                StoreSector::SalesFloor,
            ],
        ),
        store(
            "store-002",
            "Loja Shopping Manauara",
            "Av. Mário Ypiranga, 1300 - Adrianópolis",
            "Manaus",
            "AM",
            "69057-002",
            "(92) 3232-9950",
            StoreSize::Medium,
            3000,
            Coordinates {
                lat: -3.1003,
                lng: -60.0233,
            },
            vec![
                StoreSector::Mobile,
                StoreSector::Furniture,
                StoreSector::Electronics,
            ],
        ),
        store(
            "store-003",
            "Loja Cidade Nova",
            "Av. Noel Nutels, 1762 - Cidade Nova",
            "Manaus",
            "AM",
            "69095-000",
            "(92) 3232-9930",
            StoreSize::Large,
            2200,
            Coordinates {
                lat: -3.0413,
                lng: -59.9865,
            },
            vec![
                StoreSector::SelfService,
                StoreSector::SalesFloor,
                StoreSector::Groceries,
            ],
        ),
        store(
            "store-004",
            "Loja Belém Centro",
            "Av. Presidente Vargas, 800 - Campina",
            "Belém",
            "PA",
            "66017-000",
            "(91) 3223-4400",
            StoreSize::Medium,
            1800,
            Coordinates {
                lat: -1.4520,
                lng: -48.4890,
            },
            vec![
                StoreSector::Fashion,
                StoreSector::Groceries,
                StoreSector::BedAndBath,
            ],
        ),
        store(
            "store-005",
            "Loja Porto Velho",
            "Av. Sete de Setembro, 1045 - Centro",
            "Porto Velho",
            "RO",
            "76801-097",
            "(69) 3224-7700",
            StoreSize::Small,
            1200,
            Coordinates {
                lat: -8.7619,
                lng: -63.9039,
            },
            vec![StoreSector::Groceries, StoreSector::Fashion],
        ),
    ]
}

fn date_from_today(days: i64) -> NaiveDate {
    let today = Utc::now().date_naive();
    if days >= 0 {
        today + Days::new(days.unsigned_abs())
    } else {
        today - Days::new(days.unsigned_abs())
    }
}

fn demo_contact() -> ContactInfo {
    ContactInfo {
        company_name: "Tech Solutions LTDA".into(),
        contact_name: "Maria Silva".into(),
        email: "maria@techsolutions.com".into(),
        phone: "(92) 98765-4321".into(),
    }
}

fn reservation(
    space_ids: &[&str],
    start: i64,
    end: i64,
    status: ReservationStatus,
    total_price: u64,
    payment_status: PaymentStatus,
    notes: &str,
    created: i64,
    updated: i64,
) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        space_ids: space_ids.iter().map(|s| s.to_string()).collect(),
        user_id: DEMO_USER_ID.into(),
        start_date: date_from_today(start),
        end_date: date_from_today(end),
        status,
        total_price,
        payment_status,
        contact: demo_contact(),
        notes: Some(notes.into()),
        created_at: Utc::now() + chrono::Duration::days(created),
        updated_at: Utc::now() + chrono::Duration::days(updated),
    }
}

/// One reservation per lifecycle state, dated around "now"
pub fn reservations() -> Vec<Reservation> {
    vec![
        reservation(
            &["space-001"],
            5,
            35,
            ReservationStatus::Pending,
            8000,
            PaymentStatus::Pending,
            "Prefer peak shopping hours",
            -2,
            -2,
        ),
        reservation(
            &["space-002"],
            -30,
            0,
            ReservationStatus::Completed,
            5500,
            PaymentStatus::Paid,
            "Product launch campaign",
            -60,
            0,
        ),
        reservation(
            &["space-001"],
            -15,
            15,
            ReservationStatus::Confirmed,
            8000,
            PaymentStatus::Paid,
            "Holiday campaign",
            -45,
            -15,
        ),
        reservation(
            &["space-002"],
            -60,
            -30,
            ReservationStatus::Cancelled,
            5500,
            PaymentStatus::Refunded,
            "Cancelled after strategy change",
            -90,
            -60,
        ),
    ]
}

pub fn catalog() -> Catalog {
    Catalog::new(spaces(), stores())
}
