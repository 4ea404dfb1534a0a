//! Core domain models

mod reservation;
mod space;
mod store;
mod user;

pub use reservation::{
    ContactInfo, PaymentStatus, Reservation, ReservationRequest, ReservationStatus,
};
pub use space::{BadgeTone, Space, SpaceKind, SpaceLocation, SpaceStatus, StoreSector};
pub use store::{Coordinates, OpeningHours, StoreLocation, StoreSize};
pub use user::User;
