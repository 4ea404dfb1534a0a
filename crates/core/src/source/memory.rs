//! In-memory data source - the seeded fake behind development sessions
//!
//! Holds the catalog and a mutex-guarded reservation log for the session
//! only; nothing outlives the process. An optional per-call latency
//! simulates a remote round trip so loading states stay exercised.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{
    PaymentStatus, Reservation, ReservationRequest, ReservationStatus, Space, StoreLocation,
};
use crate::seed;
use crate::source::DataSource;

pub struct InMemorySource {
    spaces: Vec<Space>,
    stores: Vec<StoreLocation>,
    reservations: Mutex<Vec<Reservation>>,
    latency: Duration,
}

impl InMemorySource {
    pub fn new(
        spaces: Vec<Space>,
        stores: Vec<StoreLocation>,
        reservations: Vec<Reservation>,
    ) -> Self {
        Self {
            spaces,
            stores,
            reservations: Mutex::new(reservations),
            latency: Duration::ZERO,
        }
    }

    /// The standard development source: seed catalog, seed history
    pub fn seeded() -> Self {
        Self::new(seed::spaces(), seed::stores(), seed::reservations())
    }

    /// Simulate a remote round trip on every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn get_spaces(&self) -> Result<Vec<Space>> {
        self.round_trip().await;
        Ok(self.spaces.clone())
    }

    async fn get_space(&self, id: &str) -> Result<Space> {
        self.round_trip().await;
        self.spaces
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Error::SpaceNotFound(id.to_string()))
    }

    async fn get_stores(&self) -> Result<Vec<StoreLocation>> {
        self.round_trip().await;
        Ok(self.stores.clone())
    }

    async fn get_reservations(&self) -> Result<Vec<Reservation>> {
        self.round_trip().await;
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn reserve_space(&self, request: ReservationRequest) -> Result<Reservation> {
        self.round_trip().await;

        // Every referenced space must exist and still be available
        for id in &request.space_ids {
            let space = self
                .spaces
                .iter()
                .find(|s| s.id == *id)
                .ok_or_else(|| Error::SpaceNotFound(id.clone()))?;
            if !space.is_selectable() {
                return Err(Error::SpaceUnavailable {
                    id: space.id.clone(),
                    status: space.status,
                });
            }
        }

        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            space_ids: request.space_ids,
            user_id: seed::DEMO_USER_ID.into(),
            start_date: request.start_date,
            end_date: request.end_date,
            status: ReservationStatus::Pending,
            total_price: request.total_price,
            payment_status: PaymentStatus::Pending,
            contact: request.contact,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            reservation_id = %reservation.id,
            spaces = reservation.space_ids.len(),
            total_price = reservation.total_price,
            "Reservation stored"
        );

        self.reservations.lock().unwrap().push(reservation.clone());
        Ok(reservation)
    }

    async fn cancel_reservation(&self, id: Uuid) -> Result<Reservation> {
        self.round_trip().await;

        let mut reservations = self.reservations.lock().unwrap();
        let reservation = reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::ReservationNotFound(id.to_string()))?;

        if reservation.status.is_terminal() {
            return Err(Error::InvalidOperation(format!(
                "reservation {} is already {}",
                id,
                reservation.status.label().to_lowercase()
            )));
        }

        reservation.status = ReservationStatus::Cancelled;
        reservation.payment_status = PaymentStatus::Refunded;
        reservation.updated_at = Utc::now();

        tracing::info!(reservation_id = %id, "Reservation cancelled");
        Ok(reservation.clone())
    }
}
