//! Post-battle progression: experience, gold and level-ups.
//!
//! Functions here mutate the [`RangerProfile`](crate::RangerProfile) directly
//! and return summaries that are purely informational.
mod level;
mod rewards;

pub use level::{LevelUp, apply_experience, experience_threshold};
pub use rewards::{DefeatSummary, HealthBonus, RewardSummary, apply_defeat, apply_victory};
