//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, the battle engine and profile creation
//! so clients can bubble them up with consistent context.
use ranger_core::{BattleError, ProfileError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("runtime requires a ranger profile before building")]
    MissingProfile,

    #[error("save slot {slot} is empty")]
    EmptySlot { slot: u8 },

    #[error("action provider failed: {0}")]
    Provider(String),
}
