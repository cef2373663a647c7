use crate::error::{ErrorSeverity, GameError};

/// Which part of a character selection was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SelectionField {
    Name,
    Color,
    PowerType,
}

/// Errors raised while building or validating a ranger profile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid {field} selection: {value:?}")]
    InvalidSelection { field: SelectionField, value: String },

    #[error("profile invariant violated: {0}")]
    InvariantViolated(&'static str),
}

impl ProfileError {
    pub(crate) fn invalid(field: SelectionField, value: impl Into<String>) -> Self {
        Self::InvalidSelection {
            field,
            value: value.into(),
        }
    }
}

impl GameError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSelection { .. } => ErrorSeverity::Validation,
            Self::InvariantViolated(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSelection { .. } => "PROFILE_INVALID_SELECTION",
            Self::InvariantViolated(_) => "PROFILE_INVARIANT_VIOLATED",
        }
    }
}
