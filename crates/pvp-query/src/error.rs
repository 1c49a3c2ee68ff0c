//! Error types for cascading selection.

use std::fmt;

use thiserror::Error;

/// A step of the cascading selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ingredient,
    Dose,
    Form,
}

impl Stage {
    /// Spanish label shown next to the selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ingredient => "Principio activo",
            Self::Dose => "Dosis",
            Self::Form => "Forma",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised by [`Cascade`](crate::Cascade).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The value is not among the options of its stage.
    #[error("'{value}' is not a valid {stage} option")]
    InvalidChoice { stage: Stage, value: String },

    /// A stage was chosen before the stage above it.
    #[error("choose a {required} before choosing a {stage}")]
    StageLocked { stage: Stage, required: Stage },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
