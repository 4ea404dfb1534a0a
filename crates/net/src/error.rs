//! Network error types

use std::io;

/// Network result type
pub type Result<T> = std::result::Result<T, Error>;

/// Network errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Service rejected request: {0}")]
    Rejected(String),
}

impl From<Error> for vitrine_core::Error {
    fn from(err: Error) -> Self {
        match err {
            // Service rejections already carry a display-ready message
            Error::Rejected(msg) => vitrine_core::Error::Transport(msg),
            other => vitrine_core::Error::Transport(other.to_string()),
        }
    }
}
