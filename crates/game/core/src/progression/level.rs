use crate::battle::Skill;
use crate::config::GameConfig;
use crate::profile::RangerProfile;

/// One applied level-up, with the stats the ranger ended up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Skill that becomes available at exactly this level.
    pub unlocked_skill: Option<Skill>,
}

/// Total experience needed to advance past `level`.
///
/// Experience is cumulative, so reaching level 3 from scratch takes 200.
pub fn experience_threshold(level: u32) -> u32 {
    GameConfig::XP_PER_LEVEL.saturating_mul(level)
}

/// Add experience and apply every level-up it pays for, in order.
///
/// Each level grants a skill point and recomputes stats from the color table.
/// Current health rises by the max-health gain. Levels stop at
/// `config.max_level`; experience keeps accumulating past it.
pub fn apply_experience(
    ranger: &mut RangerProfile,
    amount: u32,
    config: &GameConfig,
) -> Vec<LevelUp> {
    ranger.experience = ranger.experience.saturating_add(amount);

    let mut level_ups = Vec::new();
    while ranger.level < config.max_level
        && ranger.experience >= experience_threshold(ranger.level)
    {
        let previous_max = ranger.max_health;

        ranger.level += 1;
        ranger.skill_points += 1;
        ranger.recalculate_stats();
        ranger.heal(ranger.max_health.saturating_sub(previous_max));

        level_ups.push(LevelUp {
            level: ranger.level,
            max_health: ranger.max_health,
            attack: ranger.attack,
            defense: ranger.defense,
            unlocked_skill: Skill::ALL
                .into_iter()
                .find(|skill| skill.unlock_level() == ranger.level),
        });
    }

    level_ups
}
