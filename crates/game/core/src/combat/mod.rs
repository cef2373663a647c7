//! Combat arithmetic.
//!
//! Pure functions shared by the battle session for both sides of a fight.
//! Nothing here reads or writes a profile; callers pass plain numbers.
//!
//! - `calculate_damage`: attack against defense with the minimum-damage floor
//! - `scale_attack`: apply a rational multiplier to an attack stat
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `percent_of`: integer percentage used for heals and penalties

pub mod damage;

pub use damage::{apply_damage, calculate_damage, percent_of, scale_attack};
