//! Deterministic battle and progression rules for the ranger simulation.
//!
//! `ranger-core` defines the canonical rules (profile construction, enemy
//! scaling, turn resolution, rewards) and exposes pure APIs that the runtime
//! and offline tools reuse. Randomness is injected through [`RngOracle`] and
//! nothing in this crate performs I/O.
//!
//! A typical encounter:
//! 1. build a [`RangerProfile`] with [`create_ranger`]
//! 2. spawn an [`Enemy`] through [`EnemyFactory`]
//! 3. drive a [`BattleSession`] with [`RangerAction`]s until it is terminal
//! 4. hand the [`BattleReport`] to [`apply_victory`] or [`apply_defeat`]
pub mod battle;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod profile;
pub mod progression;

pub use battle::{
    BattleError, BattleEvent, BattlePhase, BattleReport, BattleResult, BattleSession,
    RangerAction, Skill, SkillEffect, TurnOutcome,
};
pub use config::GameConfig;
pub use enemy::{Difficulty, Enemy, EnemyFactory, EnemyKind, EnemyTemplate};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use profile::{
    BattleRecord, ColorBonus, PowerType, ProfileError, RangerColor, RangerProfile, RangerStats,
    SelectionField, create_ranger, create_ranger_with,
};
pub use progression::{
    DefeatSummary, HealthBonus, LevelUp, RewardSummary, apply_defeat, apply_experience,
    apply_victory, experience_threshold,
};
