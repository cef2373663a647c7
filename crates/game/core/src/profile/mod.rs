//! Ranger profile: the player's persistent character record.
//!
//! Construction goes through [`create_ranger`], which parses the selection
//! text and derives the starting stats from the color table. Battle code
//! mutates health and mega energy through the methods on [`RangerProfile`] so
//! the invariants below always hold:
//!
//! - `current_health <= max_health`
//! - `mega_energy <= GameConfig::MAX_MEGA_ENERGY`
//! - `level >= 1`
mod color;
mod error;
mod ranger;
mod record;
mod stats;

pub use color::{ColorBonus, PowerType, RangerColor};
pub use error::{ProfileError, SelectionField};
pub use ranger::{RangerProfile, create_ranger, create_ranger_with};
pub use record::BattleRecord;
pub use stats::RangerStats;
