use super::action::Skill;
use crate::enemy::Enemy;

/// Battle state machine position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    RangerTurn,
    EnemyTurn,
    Won,
    Lost,
}

impl BattlePhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// How a finished battle ended, from the ranger's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BattleResult {
    Victory,
    Defeat,
    Fled,
}

/// Something that happened during a turn, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    RangerAttack {
        damage: u32,
        enemy_health: u32,
    },
    SkillUsed {
        skill: Skill,
        energy_spent: u8,
        damage: Option<u32>,
        healed: u32,
    },
    FusionPower {
        damage: u32,
        healed: u32,
    },
    Defended {
        defense: u32,
    },
    Fled,
    EnemyAttack {
        damage: u32,
        power_attack: bool,
        ranger_health: u32,
    },
    EnemyDefeated,
    RangerDefeated,
}

/// Result of one [`resolve_turn`](super::BattleSession::resolve_turn) call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// 1-based turn number.
    pub turn: u32,
    pub events: Vec<BattleEvent>,
    /// Phase after the turn; `RangerTurn` unless the battle ended.
    pub phase: BattlePhase,
    pub ranger_health: u32,
    pub enemy_health: u32,
    pub mega_energy: u8,
}

impl TurnOutcome {
    /// Damage the ranger dealt this turn.
    pub fn damage_dealt(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                BattleEvent::RangerAttack { damage, .. }
                | BattleEvent::FusionPower { damage, .. } => *damage,
                BattleEvent::SkillUsed { damage, .. } => damage.unwrap_or(0),
                _ => 0,
            })
            .sum()
    }

    /// Damage the ranger took this turn.
    pub fn damage_taken(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                BattleEvent::EnemyAttack { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }
}

/// Summary handed to progression once a session is concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub enemy: Enemy,
    pub result: BattleResult,
    pub turns: u32,
    pub log: Vec<BattleEvent>,
}
