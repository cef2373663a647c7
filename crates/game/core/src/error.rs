//! Common error infrastructure for ranger-core.
//!
//! Domain-specific errors (`ProfileError`, `BattleError`) live next to the
//! operations they validate. This module provides the shared classification
//! so callers can pick a recovery strategy without matching every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can retry with an alternative action
/// - **Validation**: invalid input that should be re-prompted, not retried
/// - **Fatal**: state is inconsistent and must not be used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - fall back to another action.
    ///
    /// Examples: Fusion Power while not eligible, skill without enough energy
    Recoverable,

    /// Validation error - reject the input and ask again.
    ///
    /// Examples: unknown color, acting after the battle ended
    Validation,

    /// Fatal error - the data violates an invariant.
    ///
    /// Examples: loaded profile with health above its maximum
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all ranger-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
