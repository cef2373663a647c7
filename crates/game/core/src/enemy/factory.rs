use super::kind::EnemyKind;
use crate::combat::{apply_damage, percent_of};
use crate::env::RngOracle;

/// Mission difficulty; scales every enemy stat and reward.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Multiplier applied to template values, in percent.
    pub const fn percent(self) -> u32 {
        match self {
            Self::Easy => 80,
            Self::Medium => 100,
            Self::Hard => 130,
            Self::Extreme => 160,
        }
    }
}

/// An opposing combatant, owned by a single battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    /// Player level the enemy was scaled to.
    pub level: u32,
    pub current_health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Base gold before the reward roll.
    pub gold_reward: u32,
    /// Base experience before the level multiplier.
    pub experience: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Subtract damage from current health, clamped at 0. Returns the
    /// remaining health.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.current_health = apply_damage(self.current_health, damage);
        self.current_health
    }
}

/// Produces enemies scaled to difficulty and player level.
///
/// Scaling:
/// - health, attack, defense: template × difficulty% × (100 + 10 × (level − 1))%
/// - gold and experience base: template × difficulty%
#[derive(Clone, Copy, Debug, Default)]
pub struct EnemyFactory;

impl EnemyFactory {
    /// Extra percent of template stats per player level above 1.
    pub const LEVEL_SCALING_PERCENT: u32 = 10;

    pub fn level_percent(player_level: u32) -> u32 {
        Self::LEVEL_SCALING_PERCENT
            .saturating_mul(player_level.saturating_sub(1))
            .saturating_add(100)
    }

    pub fn spawn(kind: EnemyKind, difficulty: Difficulty, player_level: u32) -> Enemy {
        let template = kind.template();
        let level = player_level.max(1);
        let level_percent = Self::level_percent(level);
        let difficulty_percent = difficulty.percent();

        let scale_stat =
            |value: u32| percent_of(percent_of(value, difficulty_percent), level_percent);

        let max_health = scale_stat(template.health).max(1);

        Enemy {
            name: kind.to_string(),
            kind,
            level,
            current_health: max_health,
            max_health,
            attack: scale_stat(template.attack).max(1),
            defense: scale_stat(template.defense),
            gold_reward: percent_of(template.gold_reward, difficulty_percent),
            experience: percent_of(template.experience, difficulty_percent),
        }
    }

    /// Spawn one of the regular kinds chosen by the injected RNG.
    pub fn spawn_random(
        difficulty: Difficulty,
        player_level: u32,
        rng: &(impl RngOracle + ?Sized),
        seed: u64,
    ) -> Enemy {
        let kind = EnemyKind::REGULAR[rng.pick(seed, EnemyKind::REGULAR.len())];
        Self::spawn(kind, difficulty, player_level)
    }
}
