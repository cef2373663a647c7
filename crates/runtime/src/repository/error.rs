//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// None of these leave a partially written save in place of a good one.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("save slot {slot} is corrupted: {reason}")]
    Corrupted { slot: u8, reason: String },

    #[error("save slot {slot} is out of range (1..={max})")]
    InvalidSlot { slot: u8, max: u8 },
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
