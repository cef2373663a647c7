use crate::battle::BattleResult;

/// One finished encounter in a ranger's history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRecord {
    pub enemy: String,
    pub result: BattleResult,
    pub turns: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold_earned: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience_earned: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold_lost: u32,
}

impl BattleRecord {
    pub fn new(enemy: impl Into<String>, result: BattleResult, turns: u32) -> Self {
        Self {
            enemy: enemy.into(),
            result,
            turns,
            gold_earned: 0,
            experience_earned: 0,
            gold_lost: 0,
        }
    }

    pub fn with_rewards(mut self, gold: u32, experience: u32) -> Self {
        self.gold_earned = gold;
        self.experience_earned = experience;
        self
    }

    pub fn with_gold_lost(mut self, gold_lost: u32) -> Self {
        self.gold_lost = gold_lost;
        self
    }

    pub fn is_victory(&self) -> bool {
        self.result == BattleResult::Victory
    }
}
