use super::outcome::BattlePhase;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while resolving a battle turn.
///
/// Every variant is raised before any state is mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{action} is not available: {reason}")]
    OutOfRangeAction {
        action: &'static str,
        reason: &'static str,
    },

    #[error("battle already ended ({phase})")]
    BattleOver { phase: BattlePhase },

    #[error("battle is still in progress ({phase})")]
    BattleInProgress { phase: BattlePhase },
}

impl BattleError {
    pub(crate) fn out_of_range(action: &'static str, reason: &'static str) -> Self {
        Self::OutOfRangeAction { action, reason }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfRangeAction { .. } => ErrorSeverity::Recoverable,
            Self::BattleOver { .. } | Self::BattleInProgress { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRangeAction { .. } => "BATTLE_OUT_OF_RANGE_ACTION",
            Self::BattleOver { .. } => "BATTLE_OVER",
            Self::BattleInProgress { .. } => "BATTLE_IN_PROGRESS",
        }
    }
}
