//! Enemy templates and the factory that scales them to an encounter.
//!
//! Enemy kinds are a lookup table ([`EnemyKind::template`]) rather than a type
//! hierarchy. [`EnemyFactory`] applies the mission difficulty and the player's
//! level to a template and produces an [`Enemy`] owned by one battle.
mod factory;
mod kind;

pub use factory::{Difficulty, Enemy, EnemyFactory};
pub use kind::{EnemyKind, EnemyTemplate};
