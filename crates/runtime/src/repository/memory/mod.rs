//! In-memory repository implementations for testing and ephemeral sessions.

mod save;

pub use save::InMemorySaveRepository;
