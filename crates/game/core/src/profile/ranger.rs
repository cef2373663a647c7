use core::str::FromStr;

use super::color::{PowerType, RangerColor};
use super::error::{ProfileError, SelectionField};
use super::record::BattleRecord;
use super::stats::RangerStats;
use crate::combat::apply_damage;
use crate::config::GameConfig;

/// The player's character record.
///
/// Fields are public for persistence and display. Battle and progression
/// code mutate health, mega energy and level through the methods below, which
/// keep the profile invariants intact.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangerProfile {
    pub name: String,
    pub color: RangerColor,
    pub power_type: PowerType,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub current_health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub mega_energy: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_points: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub battle_history: Vec<BattleRecord>,
}

/// Build a level 1 ranger from raw selection text with the default
/// [`GameConfig`].
///
/// Color and power type are matched case-insensitively. Fails with
/// [`ProfileError::InvalidSelection`] on an empty name or an unknown color
/// or power type; nothing is constructed in that case.
pub fn create_ranger(
    name: &str,
    color: &str,
    power_type: &str,
) -> Result<RangerProfile, ProfileError> {
    create_ranger_with(name, color, power_type, &GameConfig::default())
}

/// Like [`create_ranger`], with starting values taken from `config`.
pub fn create_ranger_with(
    name: &str,
    color: &str,
    power_type: &str,
    config: &GameConfig,
) -> Result<RangerProfile, ProfileError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProfileError::invalid(SelectionField::Name, name));
    }
    let color = RangerColor::from_str(color.trim())
        .map_err(|_| ProfileError::invalid(SelectionField::Color, color))?;
    let power_type = PowerType::from_str(power_type.trim())
        .map_err(|_| ProfileError::invalid(SelectionField::PowerType, power_type))?;

    Ok(RangerProfile::new(name, color, power_type, config))
}

impl RangerProfile {
    /// Create a level 1 ranger at full health and full mega energy.
    pub fn new(
        name: impl Into<String>,
        color: RangerColor,
        power_type: PowerType,
        config: &GameConfig,
    ) -> Self {
        let stats = RangerStats::at_level(color, 1);
        Self {
            name: name.into(),
            color,
            power_type,
            level: 1,
            experience: 0,
            gold: config.starting_gold,
            current_health: stats.max_health,
            max_health: stats.max_health,
            attack: stats.attack,
            defense: stats.defense,
            mega_energy: GameConfig::MAX_MEGA_ENERGY,
            skill_points: 0,
            battle_history: Vec::new(),
        }
    }

    /// Builder-style level override; stats are recomputed and health refilled.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self.recalculate_stats();
        self.current_health = self.max_health;
        self
    }

    /// Builder-style mega energy override, clamped to the meter size.
    #[must_use]
    pub fn with_mega_energy(mut self, energy: u8) -> Self {
        self.mega_energy = energy.min(GameConfig::MAX_MEGA_ENERGY);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Stats derived from color and the current level.
    pub fn stats(&self) -> RangerStats {
        RangerStats::at_level(self.color, self.level)
    }

    /// Recompute max health, attack and defense from the color formula.
    ///
    /// Current health is clamped to the new maximum; it is never raised here.
    pub fn recalculate_stats(&mut self) {
        let stats = self.stats();
        self.max_health = stats.max_health;
        self.attack = stats.attack;
        self.defense = stats.defense;
        self.current_health = self.current_health.min(self.max_health);
    }

    /// Subtract damage from current health, clamped at 0.
    pub fn take_damage(&mut self, damage: u32) {
        self.current_health = apply_damage(self.current_health, damage);
    }

    /// Restore health up to the maximum. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
        self.current_health - before
    }

    /// Add mega energy, capped at [`GameConfig::MAX_MEGA_ENERGY`].
    pub fn gain_mega_energy(&mut self, amount: u8) {
        self.mega_energy = self
            .mega_energy
            .saturating_add(amount)
            .min(GameConfig::MAX_MEGA_ENERGY);
    }

    /// Spend mega energy. Returns false and leaves the meter unchanged if
    /// there is not enough.
    pub fn spend_mega_energy(&mut self, amount: u8) -> bool {
        if self.mega_energy < amount {
            return false;
        }
        self.mega_energy -= amount;
        true
    }

    pub fn reset_mega_energy(&mut self) {
        self.mega_energy = 0;
    }

    /// Level 3 or higher with a full mega energy meter.
    pub fn can_use_fusion_power(&self) -> bool {
        self.level >= GameConfig::FUSION_MIN_LEVEL
            && self.mega_energy == GameConfig::MAX_MEGA_ENERGY
    }

    /// Current health as a whole percentage of max health.
    pub fn health_percent(&self) -> u32 {
        if self.max_health == 0 {
            return 0;
        }
        ((self.current_health as u64 * 100) / self.max_health as u64) as u32
    }

    pub fn victories(&self) -> usize {
        self.battle_history
            .iter()
            .filter(|record| record.is_victory())
            .count()
    }

    pub fn record_battle(&mut self, record: BattleRecord) {
        self.battle_history.push(record);
    }

    /// Check the profile invariants. Used when restoring saved data.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::InvariantViolated("name is empty"));
        }
        if self.level == 0 {
            return Err(ProfileError::InvariantViolated("level must be at least 1"));
        }
        if self.level > GameConfig::LEVEL_CEILING {
            return Err(ProfileError::InvariantViolated("level exceeds the level ceiling"));
        }
        if self.max_health == 0 {
            return Err(ProfileError::InvariantViolated(
                "max health must be positive",
            ));
        }
        if self.current_health > self.max_health {
            return Err(ProfileError::InvariantViolated(
                "current health exceeds max health",
            ));
        }
        if self.mega_energy > GameConfig::MAX_MEGA_ENERGY {
            return Err(ProfileError::InvariantViolated(
                "mega energy exceeds the meter",
            ));
        }
        if self.attack == 0 || self.defense == 0 {
            return Err(ProfileError::InvariantViolated(
                "attack and defense must be positive",
            ));
        }
        let stored = RangerStats {
            max_health: self.max_health,
            attack: self.attack,
            defense: self.defense,
        };
        if stored != self.stats() {
            return Err(ProfileError::InvariantViolated(
                "stats do not match color and level",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleResult;

    #[test]
    fn create_ranger_applies_color_table() {
        let ranger = create_ranger("Jason", "Red", "Tech").unwrap();

        assert_eq!(ranger.name, "Jason");
        assert_eq!(ranger.color, RangerColor::Red);
        assert_eq!(ranger.power_type, PowerType::Tech);
        assert_eq!(ranger.level, 1);
        assert_eq!(ranger.experience, 0);
        assert_eq!(ranger.gold, GameConfig::DEFAULT_STARTING_GOLD);
        assert_eq!(ranger.max_health, 110);
        assert_eq!(ranger.current_health, 110);
        assert_eq!(ranger.attack, 25);
        assert_eq!(ranger.defense, 10);
        assert_eq!(ranger.mega_energy, GameConfig::MAX_MEGA_ENERGY);
        assert!(ranger.validate().is_ok());
    }

    #[test]
    fn power_type_has_no_numeric_effect() {
        let tech = create_ranger("A", "blue", "tech").unwrap();
        let nature = create_ranger("A", "blue", "nature").unwrap();

        assert_eq!(tech.stats(), nature.stats());
    }

    #[test]
    fn create_ranger_rejects_unknown_color() {
        let err = create_ranger("Kim", "Purple", "Magic").unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidSelection {
                field: SelectionField::Color,
                value: "Purple".into(),
            }
        );
    }

    #[test]
    fn create_ranger_rejects_unknown_power_type() {
        let err = create_ranger("Kim", "Pink", "Steam").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidSelection {
                field: SelectionField::PowerType,
                ..
            }
        ));
    }

    #[test]
    fn create_ranger_rejects_blank_name() {
        let err = create_ranger("   ", "Pink", "Magic").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidSelection {
                field: SelectionField::Name,
                ..
            }
        ));
    }

    #[test]
    fn health_stays_in_bounds() {
        let mut ranger = create_ranger("Trini", "Yellow", "Nature").unwrap();

        ranger.take_damage(1_000);
        assert_eq!(ranger.current_health, 0);
        assert!(!ranger.is_alive());

        let healed = ranger.heal(10_000);
        assert_eq!(healed, ranger.max_health);
        assert_eq!(ranger.current_health, ranger.max_health);
    }

    #[test]
    fn mega_energy_is_capped_and_spend_is_atomic() {
        let mut ranger = create_ranger("Zack", "Black", "Tech")
            .unwrap()
            .with_mega_energy(1);

        ranger.gain_mega_energy(5);
        assert_eq!(ranger.mega_energy, GameConfig::MAX_MEGA_ENERGY);

        ranger.reset_mega_energy();
        assert!(!ranger.spend_mega_energy(1));
        assert_eq!(ranger.mega_energy, 0);
    }

    #[test]
    fn fusion_requires_level_and_full_meter() {
        let base = create_ranger("Tommy", "Green", "Nature").unwrap();

        assert!(!base.clone().with_level(2).can_use_fusion_power());
        assert!(!base.clone().with_level(3).with_mega_energy(2).can_use_fusion_power());
        assert!(base.with_level(3).can_use_fusion_power());
    }

    #[test]
    fn validate_rejects_overfull_health() {
        let mut ranger = create_ranger("Billy", "Blue", "Tech").unwrap();
        ranger.current_health = ranger.max_health + 1;

        assert_eq!(
            ranger.validate(),
            Err(ProfileError::InvariantViolated(
                "current health exceeds max health"
            ))
        );
    }

    #[test]
    fn validate_rejects_levels_past_the_ceiling() {
        let mut ranger = create_ranger("Billy", "Blue", "Tech").unwrap();
        ranger.level = 500_000_000;

        assert_eq!(
            ranger.validate(),
            Err(ProfileError::InvariantViolated(
                "level exceeds the level ceiling"
            ))
        );
        assert!(ranger.with_level(GameConfig::LEVEL_CEILING).validate().is_ok());
    }

    #[test]
    fn validate_rejects_stats_that_disagree_with_level() {
        let mut ranger = create_ranger("Jason", "Red", "Tech").unwrap();
        ranger.attack = 500;
        ranger.max_health = 900;

        assert_eq!(
            ranger.validate(),
            Err(ProfileError::InvariantViolated(
                "stats do not match color and level"
            ))
        );
    }

    #[test]
    fn create_ranger_with_uses_configured_starting_gold() {
        let config = GameConfig::default().with_starting_gold(250);
        let ranger = create_ranger_with("Aisha", "Yellow", "Nature", &config).unwrap();

        assert_eq!(ranger.gold, 250);
        assert!(ranger.validate().is_ok());
    }

    #[test]
    fn victories_counts_only_wins() {
        let mut ranger = create_ranger("Kimberly", "Pink", "Magic").unwrap();
        ranger.record_battle(BattleRecord::new("Loogies", BattleResult::Victory, 2));
        ranger.record_battle(BattleRecord::new("Bruisers", BattleResult::Defeat, 9));
        ranger.record_battle(BattleRecord::new("Zombats", BattleResult::Fled, 1));

        assert_eq!(ranger.victories(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_survives_json() {
        let mut ranger = create_ranger("Adam", "Black", "Magic").unwrap().with_level(4);
        ranger.record_battle(
            BattleRecord::new("X-Borgs", BattleResult::Victory, 3).with_rewards(30, 80),
        );

        let json = serde_json::to_string(&ranger).unwrap();
        let restored: RangerProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, ranger);
    }
}
