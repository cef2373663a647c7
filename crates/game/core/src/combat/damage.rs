//! Damage calculation and application.

use crate::config::GameConfig;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// final_damage = max(attack - defense, MIN_DAMAGE)
/// ```
///
/// An attack always lands for at least [`GameConfig::MIN_DAMAGE`], even when
/// the defender's defense meets or exceeds the attack value.
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(GameConfig::MIN_DAMAGE)
}

/// Scale an attack stat by `numerator / denominator`, truncating.
///
/// Used for skill multipliers (3/2 for Power Strike, 2/1 for Mega Blast) and
/// enemy power attacks. A zero denominator leaves the attack unchanged.
pub fn scale_attack(attack: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return attack;
    }
    let scaled = (attack as u64 * numerator as u64) / denominator as u64;
    scaled.min(u32::MAX as u64) as u32
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Integer percentage of a value, truncating.
pub fn percent_of(value: u32, percent: u32) -> u32 {
    ((value as u64 * percent as u64) / 100).min(u32::MAX as u64) as u32
}
