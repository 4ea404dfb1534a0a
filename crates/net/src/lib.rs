//! Vitrine Network Library
//!
//! The networked side of the `DataSource` seam: a TCP client speaking a
//! length-prefixed JSON protocol to a reservation service.
//!
//! # Architecture
//!
//! - **Client**: [`RemoteSource`], a `DataSource` implementation doing one
//!   request/response round trip per call
//! - **Protocol**: tagged request/response messages mirroring the
//!   `DataSource` capability set
//! - **Frames**: 4-byte big-endian length prefix + JSON payload
//!
//! # Usage
//!
//! ```ignore
//! let source = RemoteSource::from_addr(&config.source.remote_addr)?;
//! let spaces = source.get_spaces().await?;
//! ```

pub mod client;
pub mod error;
pub mod frame;
pub mod protocol;

pub use client::RemoteSource;
pub use error::{Error, Result};
pub use protocol::{Request, Response};

/// Default port for the reservation service
pub const DEFAULT_PORT: u16 = 7640;
