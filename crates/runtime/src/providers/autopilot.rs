use ranger_core::{BattleSession, RangerAction, Skill};

use crate::api::{ActionProvider, Result};

/// Greedy auto-battle policy.
///
/// Priority each turn:
/// 1. Fusion Power whenever it is eligible
/// 2. Healing Light when health drops below the threshold
/// 3. the strongest affordable damaging skill
/// 4. a basic attack
#[derive(Clone, Debug)]
pub struct AutoPilotProvider {
    heal_below_percent: u32,
}

impl AutoPilotProvider {
    pub const DEFAULT_HEAL_BELOW_PERCENT: u32 = 40;

    pub fn new() -> Self {
        Self {
            heal_below_percent: Self::DEFAULT_HEAL_BELOW_PERCENT,
        }
    }

    /// Health percentage under which the pilot spends energy on healing.
    pub fn with_heal_threshold(mut self, percent: u32) -> Self {
        self.heal_below_percent = percent.min(100);
        self
    }

    fn choose(&self, session: &BattleSession<'_>) -> RangerAction {
        let available = session.available_actions();
        let can = |action: RangerAction| available.contains(&action);

        if can(RangerAction::FusionPower) {
            return RangerAction::FusionPower;
        }

        let healing = RangerAction::Skill(Skill::HealingLight);
        if session.ranger().health_percent() < self.heal_below_percent && can(healing) {
            return healing;
        }

        [Skill::MegaBlast, Skill::PowerStrike]
            .into_iter()
            .map(RangerAction::Skill)
            .find(|action| can(*action))
            .unwrap_or(RangerAction::Attack)
    }
}

impl Default for AutoPilotProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionProvider for AutoPilotProvider {
    fn provide_action(&mut self, session: &BattleSession<'_>) -> Result<RangerAction> {
        Ok(self.choose(session))
    }
}
