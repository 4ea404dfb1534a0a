//! Wire protocol for the reservation service
//!
//! One request, one response per connection. All messages are
//! JSON-serialized and length-prefixed on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrine_core::{Reservation, ReservationRequest, Space, StoreLocation};

/// Client-to-service requests, mirroring the `DataSource` capability set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Fetch the full space catalog
    GetSpaces,

    /// Fetch a single space by ID
    GetSpace { id: String },

    /// Fetch the store locations
    GetStores,

    /// Fetch the current user's reservations
    GetReservations,

    /// Submit a reservation request
    Reserve { request: ReservationRequest },

    /// Cancel a reservation
    Cancel { id: Uuid },
}

/// Service-to-client responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Spaces { spaces: Vec<Space> },

    Space { space: Space },

    Stores { stores: Vec<StoreLocation> },

    Reservations { reservations: Vec<Reservation> },

    /// The stored reservation, initial status `pending`
    Reserved { reservation: Reservation },

    Cancelled { reservation: Reservation },

    /// Service-level rejection (unknown space, terminal reservation, ...)
    Error { message: String },
}
