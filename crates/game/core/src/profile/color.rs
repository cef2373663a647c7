//! Color and power type selections.
//!
//! Each color maps to a fixed bonus triple through [`RangerColor::bonus`];
//! there is no per-color behavior beyond that lookup.

/// Ranger suit color chosen at character creation.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RangerColor {
    Red,
    Blue,
    Yellow,
    Pink,
    Black,
    Green,
}

/// Flat stat bonus granted by a color on top of the base stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorBonus {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl ColorBonus {
    pub const fn new(health: u32, attack: u32, defense: u32) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }
}

impl RangerColor {
    /// Bonus triple for this color.
    ///
    /// | Color  | Health | Attack | Defense |
    /// |--------|--------|--------|---------|
    /// | Red    | 10     | 5      | 0       |
    /// | Blue   | 5      | 0      | 5       |
    /// | Yellow | 8      | 0      | 0       |
    /// | Pink   | 6      | 3      | 0       |
    /// | Black  | 7      | 0      | 3       |
    /// | Green  | 9      | 4      | 0       |
    pub const fn bonus(self) -> ColorBonus {
        match self {
            Self::Red => ColorBonus::new(10, 5, 0),
            Self::Blue => ColorBonus::new(5, 0, 5),
            Self::Yellow => ColorBonus::new(8, 0, 0),
            Self::Pink => ColorBonus::new(6, 3, 0),
            Self::Black => ColorBonus::new(7, 0, 3),
            Self::Green => ColorBonus::new(9, 4, 0),
        }
    }
}

/// Source of a ranger's powers. Recorded on the profile only; it carries no
/// numeric effect on stats or damage.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PowerType {
    Tech,
    Magic,
    Nature,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_color_has_a_distinct_bonus() {
        let bonuses: HashSet<(u32, u32, u32)> = RangerColor::iter()
            .map(|color| {
                let bonus = color.bonus();
                (bonus.health, bonus.attack, bonus.defense)
            })
            .collect();
        assert_eq!(bonuses.len(), RangerColor::iter().count());
    }

    #[test]
    fn selections_parse_case_insensitively() {
        assert_eq!(RangerColor::from_str("red"), Ok(RangerColor::Red));
        assert_eq!(RangerColor::from_str("GREEN"), Ok(RangerColor::Green));
        assert_eq!(PowerType::from_str("magic"), Ok(PowerType::Magic));
        assert!(RangerColor::from_str("purple").is_err());
        assert!(PowerType::from_str("steam").is_err());
    }
}
