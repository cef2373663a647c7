use std::collections::VecDeque;

use ranger_core::{BattleSession, RangerAction};

use crate::api::{ActionProvider, Result};

/// Replays a fixed queue of actions, then keeps attacking.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    queue: VecDeque<RangerAction>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = RangerAction>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: RangerAction) {
        self.queue.push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, _session: &BattleSession<'_>) -> Result<RangerAction> {
        Ok(self.queue.pop_front().unwrap_or(RangerAction::Attack))
    }
}
