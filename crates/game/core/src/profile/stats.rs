//! Level-derived stats.
//!
//! Formulas:
//! - max_health = BASE_HEALTH + color.health + HEALTH_PER_LEVEL × (level − 1)
//! - attack = BASE_ATTACK + color.attack + ATTACK_PER_LEVEL × (level − 1)
//! - defense = BASE_DEFENSE + color.defense + DEFENSE_PER_LEVEL × (level − 1)
//!
//! Every term is non-decreasing in level, so recomputing after a level-up
//! never lowers a stat.

use super::color::RangerColor;
use crate::config::GameConfig;

/// Stats fully determined by color and level.
///
/// These are NOT the source of truth for current health, which is game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangerStats {
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl RangerStats {
    pub fn at_level(color: RangerColor, level: u32) -> Self {
        let bonus = color.bonus();
        let gained = level.saturating_sub(1);

        Self {
            max_health: GameConfig::BASE_HEALTH
                .saturating_add(bonus.health)
                .saturating_add(GameConfig::HEALTH_PER_LEVEL.saturating_mul(gained)),
            attack: GameConfig::BASE_ATTACK
                .saturating_add(bonus.attack)
                .saturating_add(GameConfig::ATTACK_PER_LEVEL.saturating_mul(gained)),
            defense: GameConfig::BASE_DEFENSE
                .saturating_add(bonus.defense)
                .saturating_add(GameConfig::DEFENSE_PER_LEVEL.saturating_mul(gained)),
        }
    }
}
