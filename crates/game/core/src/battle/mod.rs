//! Turn-based battle resolution.
//!
//! A [`BattleSession`] pairs a borrowed [`RangerProfile`](crate::RangerProfile)
//! with an owned [`Enemy`](crate::Enemy) for one encounter. Each call to
//! [`BattleSession::resolve_turn`] runs a full cycle:
//!
//! ```text
//! RangerTurn ──ranger acts──▶ EnemyTurn ──enemy counterattacks──▶ RangerTurn
//!      │                          │
//!      └─ enemy at 0 HP ─▶ Won    └─ ranger at 0 HP ─▶ Lost
//!      └─ Flee ─────────▶ Lost
//! ```
//!
//! Actions are validated before anything is applied, so a rejected action
//! leaves both combatants untouched.
mod action;
mod error;
mod outcome;
mod session;

pub use action::{RangerAction, Skill, SkillEffect};
pub use error::BattleError;
pub use outcome::{BattleEvent, BattlePhase, BattleReport, BattleResult, TurnOutcome};
pub use session::BattleSession;
