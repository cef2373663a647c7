use super::level::{LevelUp, apply_experience};
use crate::combat::{percent_of, scale_attack};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::env::RngOracle;
use crate::profile::RangerProfile;

/// Reward multiplier earned by finishing a battle in good shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HealthBonus {
    #[default]
    None,
    /// At least 80% health: +20%.
    Good,
    /// Untouched: +50%.
    Perfect,
}

impl HealthBonus {
    pub const GOOD_HEALTH_PERCENT: u32 = 80;

    pub fn for_ranger(ranger: &RangerProfile) -> Self {
        if ranger.current_health >= ranger.max_health {
            Self::Perfect
        } else if ranger.health_percent() >= Self::GOOD_HEALTH_PERCENT {
            Self::Good
        } else {
            Self::None
        }
    }

    /// Multiplier as `(numerator, denominator)`.
    pub const fn ratio(self) -> (u32, u32) {
        match self {
            Self::None => (1, 1),
            Self::Good => (6, 5),
            Self::Perfect => (3, 2),
        }
    }

    pub fn apply(self, value: u32) -> u32 {
        let (numerator, denominator) = self.ratio();
        scale_attack(value, numerator, denominator)
    }
}

/// What a victory paid out. The profile has already been updated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardSummary {
    pub experience: u32,
    pub gold: u32,
    pub bonus: HealthBonus,
    pub level_ups: Vec<LevelUp>,
}

impl RewardSummary {
    pub fn leveled_up(&self) -> bool {
        !self.level_ups.is_empty()
    }
}

/// What a defeat cost. The profile has already been updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefeatSummary {
    pub gold_lost: u32,
    pub restored_health: u32,
}

/// Grant experience and gold for beating `enemy`.
///
/// - experience: `enemy.experience × enemy.level`
/// - gold: uniform in `[gold_reward, gold_reward × 3/2]`, drawn from `rng`
/// - both scaled by the [`HealthBonus`] for the ranger's remaining health
///
/// Level-ups are applied in sequence through [`apply_experience`].
pub fn apply_victory(
    ranger: &mut RangerProfile,
    enemy: &Enemy,
    config: &GameConfig,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> RewardSummary {
    let bonus = HealthBonus::for_ranger(ranger);

    let base_experience = enemy.experience.saturating_mul(enemy.level);
    let base_gold = rng.range(
        seed,
        enemy.gold_reward,
        scale_attack(enemy.gold_reward, 3, 2),
    );

    let experience = bonus.apply(base_experience);
    let gold = bonus.apply(base_gold);

    ranger.gold = ranger.gold.saturating_add(gold);
    let level_ups = apply_experience(ranger, experience, config);

    RewardSummary {
        experience,
        gold,
        bonus,
        level_ups,
    }
}

/// Apply the cost of losing a battle.
///
/// The ranger drops 10% of their gold (at most 50) and is patched up to 30%
/// of max health, never less than 1 HP.
pub fn apply_defeat(ranger: &mut RangerProfile) -> DefeatSummary {
    let gold_lost = percent_of(ranger.gold, GameConfig::DEFEAT_GOLD_PERCENT)
        .min(GameConfig::DEFEAT_GOLD_CAP);
    ranger.gold -= gold_lost;

    let recovered = percent_of(ranger.max_health, GameConfig::DEFEAT_RECOVERY_PERCENT).max(1);
    ranger.current_health = ranger.current_health.max(recovered).min(ranger.max_health);

    DefeatSummary {
        gold_lost,
        restored_health: ranger.current_health,
    }
}
