//! Error types for Vitrine Core

use thiserror::Error;

use crate::models::SpaceStatus;
use crate::request::ContactField;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Space not found: {0}")]
    SpaceNotFound(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Space '{id}' is currently {status}")]
    SpaceUnavailable { id: String, status: SpaceStatus },

    #[error("No spaces selected")]
    EmptySelection,

    #[error("Invalid lease period: {days} days (minimum {min_days})")]
    InvalidDateRange { days: i64, min_days: u32 },

    #[error("Invalid {field}: {reason}")]
    IncompleteContact { field: ContactField, reason: String },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
