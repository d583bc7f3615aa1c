//! Error taxonomy for the planit data core.
//!
//! Every accessor reports failures through [`Error`], so collaborators can
//! decide user-facing messaging from the variant alone:
//!
//! - [`Error::Validation`]: bad input, reported synchronously, never retried
//! - [`Error::NotFound`]: the target id does not exist; non-fatal
//! - [`Error::Storage`]: underlying engine or file failure
//! - [`Error::Startup`]: schema or preference initialization failed; the
//!   application cannot proceed
//!
//! No operation is retried automatically. Each accessor call is a single
//! statement or transaction, so a failure leaves the store unchanged.

use crate::libs::messages::Message;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before it reached the store.
    #[error("{0}")]
    Validation(String),

    /// The operation targeted an id that does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The underlying store failed.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// The database or preference store could not be initialized.
    #[error("Startup failure: {0}")]
    Startup(String),
}

impl Error {
    pub fn validation(msg: Message) -> Self {
        Error::Validation(msg.to_string())
    }

    pub fn not_found(msg: Message) -> Self {
        Error::NotFound(msg.to_string())
    }

    pub fn startup(msg: Message) -> Self {
        Error::Startup(msg.to_string())
    }

    /// Whether the caller may treat this as a recoverable "not found" result.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
