/// Special skills unlocked by level and paid for with mega energy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Skill {
    #[strum(serialize = "Power Strike")]
    PowerStrike,
    #[strum(serialize = "Mega Blast")]
    MegaBlast,
    #[strum(serialize = "Healing Light")]
    HealingLight,
}

/// What a skill does once its cost is paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillEffect {
    /// Attack with `attack × numerator / denominator`, reduced by defense.
    Strike { numerator: u32, denominator: u32 },
    /// Heal a percentage of max health.
    Heal { percent: u32 },
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::PowerStrike, Skill::MegaBlast, Skill::HealingLight];

    pub const fn unlock_level(self) -> u32 {
        match self {
            Self::PowerStrike => 3,
            Self::MegaBlast => 5,
            Self::HealingLight => 7,
        }
    }

    pub const fn energy_cost(self) -> u8 {
        match self {
            Self::PowerStrike => 1,
            Self::MegaBlast => 2,
            Self::HealingLight => 1,
        }
    }

    pub const fn effect(self) -> SkillEffect {
        match self {
            Self::PowerStrike => SkillEffect::Strike {
                numerator: 3,
                denominator: 2,
            },
            Self::MegaBlast => SkillEffect::Strike {
                numerator: 2,
                denominator: 1,
            },
            Self::HealingLight => SkillEffect::Heal { percent: 30 },
        }
    }

    pub const fn is_unlocked_at(self, level: u32) -> bool {
        level >= self.unlock_level()
    }

    /// Skills available at the given level, in unlock order.
    pub fn unlocked_at(level: u32) -> impl Iterator<Item = Skill> {
        Self::ALL
            .into_iter()
            .filter(move |skill| skill.is_unlocked_at(level))
    }
}

/// Action chosen by the ranger for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangerAction {
    /// Basic attack; builds one point of mega energy.
    Attack,
    Skill(Skill),
    /// Requires level 3 and a full meter; empties the meter.
    FusionPower,
    /// Brace for the counterattack this turn.
    Defend,
    /// Leave the battle. Counts as a loss with no rewards.
    Flee,
}

impl RangerAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Skill(skill) => (*skill).into(),
            Self::FusionPower => "fusion power",
            Self::Defend => "defend",
            Self::Flee => "flee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_unlock_in_order() {
        assert_eq!(Skill::unlocked_at(2).count(), 0);
        assert_eq!(Skill::unlocked_at(3).collect::<Vec<_>>(), vec![Skill::PowerStrike]);
        assert_eq!(
            Skill::unlocked_at(7).collect::<Vec<_>>(),
            vec![Skill::PowerStrike, Skill::MegaBlast, Skill::HealingLight]
        );
    }

    #[test]
    fn skill_names_round_trip() {
        use core::str::FromStr;
        assert_eq!(Skill::PowerStrike.to_string(), "Power Strike");
        assert_eq!(Skill::from_str("mega blast"), Ok(Skill::MegaBlast));
    }
}
