//! Abstraction for sourcing the ranger's decisions.
//!
//! Runtime users plug in [`ActionProvider`] implementations so encounters can
//! run with human input, scripted fixtures, or an auto-pilot policy.
use ranger_core::{BattleSession, RangerAction};

use super::errors::Result;

/// Trait for choosing the ranger's next action.
///
/// Different implementations can handle:
/// - Player input (from a terminal prompt)
/// - Auto-battle policies
/// - Scripted/replayed actions
/// - Testing fixtures
pub trait ActionProvider {
    /// Provide an action for the ranger's next turn.
    ///
    /// `session` is a read-only view of the ongoing battle. Returning an
    /// action the session rejects is allowed; the runtime falls back to a
    /// basic attack in that case.
    fn provide_action(&mut self, session: &BattleSession<'_>) -> Result<RangerAction>;
}

/// A simple action provider that always attacks.
/// Useful for testing or as a fallback.
pub struct AttackOnlyProvider;

impl ActionProvider for AttackOnlyProvider {
    fn provide_action(&mut self, _session: &BattleSession<'_>) -> Result<RangerAction> {
        Ok(RangerAction::Attack)
    }
}
