//! Runtime orchestration for the ranger simulation.
//!
//! This crate wires the deterministic rules in `ranger-core` to the outside
//! world: it sources ranger decisions through action providers, persists the
//! profile in save slots, and drives whole encounters from spawn to rewards.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error type and the provider contract
//! - [`providers`] ships the built-in action providers
//! - [`repository`] persists ranger profiles
//! - [`config`] loads runtime settings from the environment
pub mod api;
pub mod config;
pub mod providers;
pub mod repository;
pub mod runtime;

pub use api::{ActionProvider, AttackOnlyProvider, Result, RuntimeError};
pub use config::RuntimeConfig;
pub use providers::{AutoPilotProvider, ScriptedProvider};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveFile, SaveRepository,
    SaveSlotInfo,
};
pub use runtime::{EncounterReport, EncounterRewards, Runtime, RuntimeBuilder};
