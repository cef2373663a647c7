//! Repository layer for ranger profiles.
//!
//! Repositories handle data that outlives a process: the ranger profile and
//! its battle history, stored per save slot. Battle sessions and enemies are
//! never persisted.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;
pub use types::{SaveFile, SaveSlotInfo};
