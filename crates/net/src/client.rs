//! TCP client for a remote reservation service
//!
//! `RemoteSource` implements the core `DataSource` trait over the wire:
//! one connection, one request, one response per call. State lives on the
//! service side, so the client itself stays connectionless between calls.

use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;
use uuid::Uuid;
use vitrine_core::{DataSource, Reservation, ReservationRequest, Space, StoreLocation};

use crate::error::{Error, Result};
use crate::frame::{read_frame, write_frame};
use crate::protocol::{Request, Response};

/// Networked `DataSource` backed by a reservation service
pub struct RemoteSource {
    addr: SocketAddr,
}

impl RemoteSource {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Build from a `host:port` string (the `source.remote_addr` config key)
    pub fn from_addr(addr: &str) -> vitrine_core::Result<Self> {
        let addr = addr
            .parse()
            .map_err(|_| vitrine_core::Error::Config(format!("invalid remote address: {addr}")))?;
        Ok(Self::new(addr))
    }

    async fn round_trip(&self, request: Request) -> Result<Response> {
        debug!(addr = %self.addr, request = ?request, "Sending request");

        let mut stream = TcpStream::connect(self.addr).await?;
        let (mut reader, mut writer) = stream.split();

        write_frame(&mut writer, &request).await?;
        let response: Response = read_frame(&mut reader).await?;

        if let Response::Error { message } = response {
            return Err(Error::Rejected(message));
        }
        Ok(response)
    }
}

fn unexpected(response: Response) -> Error {
    Error::Protocol(format!("Unexpected response: {:?}", response))
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn get_spaces(&self) -> vitrine_core::Result<Vec<Space>> {
        match self.round_trip(Request::GetSpaces).await? {
            Response::Spaces { spaces } => Ok(spaces),
            other => Err(unexpected(other).into()),
        }
    }

    async fn get_space(&self, id: &str) -> vitrine_core::Result<Space> {
        let request = Request::GetSpace { id: id.to_string() };
        match self.round_trip(request).await? {
            Response::Space { space } => Ok(space),
            other => Err(unexpected(other).into()),
        }
    }

    async fn get_stores(&self) -> vitrine_core::Result<Vec<StoreLocation>> {
        match self.round_trip(Request::GetStores).await? {
            Response::Stores { stores } => Ok(stores),
            other => Err(unexpected(other).into()),
        }
    }

    async fn get_reservations(&self) -> vitrine_core::Result<Vec<Reservation>> {
        match self.round_trip(Request::GetReservations).await? {
            Response::Reservations { reservations } => Ok(reservations),
            other => Err(unexpected(other).into()),
        }
    }

    async fn reserve_space(
        &self,
        request: ReservationRequest,
    ) -> vitrine_core::Result<Reservation> {
        match self.round_trip(Request::Reserve { request }).await? {
            Response::Reserved { reservation } => Ok(reservation),
            other => Err(unexpected(other).into()),
        }
    }

    async fn cancel_reservation(&self, id: Uuid) -> vitrine_core::Result<Reservation> {
        match self.round_trip(Request::Cancel { id }).await? {
            Response::Cancelled { reservation } => Ok(reservation),
            other => Err(unexpected(other).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_addr_rejects_garbage() {
        assert!(RemoteSource::from_addr("not-an-address").is_err());
        assert!(RemoteSource::from_addr("127.0.0.1:7640").is_ok());
    }
}
