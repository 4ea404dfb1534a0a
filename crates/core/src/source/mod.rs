//! Data-source facade
//!
//! One swappable interface over the catalog and reservation services.
//! Implementations may be backed by the in-memory fake ([`InMemorySource`])
//! or a networked client (`vitrine-net`); which one a session gets is
//! configuration, never an inline environment branch.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Reservation, ReservationRequest, Space, StoreLocation};

pub use memory::InMemorySource;

/// Catalog and reservation operations the UI layers consume.
///
/// The only async boundary in the system: everything above it is pure and
/// synchronous, and a caller's responsibility ends at producing a valid
/// request payload.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get_spaces(&self) -> Result<Vec<Space>>;

    /// `Error::SpaceNotFound` when the ID is unknown
    async fn get_space(&self, id: &str) -> Result<Space>;

    async fn get_stores(&self) -> Result<Vec<StoreLocation>>;

    /// The current user's reservation history
    async fn get_reservations(&self) -> Result<Vec<Reservation>>;

    /// Submit a reservation request; returns the stored reservation with
    /// initial `pending` status.
    async fn reserve_space(&self, request: ReservationRequest) -> Result<Reservation>;

    /// Cancel a reservation; rejects terminal reservations with
    /// `Error::InvalidOperation`.
    async fn cancel_reservation(&self, id: Uuid) -> Result<Reservation>;
}
