//! Error types for graph construction and coloring.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for timetabling operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors raised by the builder, the graph model, and adjacency import.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimetableError {
    /// Arguments were rejected before any construction began.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A vertex name was added twice.
    #[error("duplicate vertex: {name}")]
    DuplicateVertex {
        /// The repeated name.
        name: String,
    },

    /// An edge referenced a vertex that is not in the graph.
    #[error("unknown vertex: {name}")]
    UnknownVertex {
        /// The missing name.
        name: String,
    },

    /// An edge connected a vertex to itself.
    #[error("self-loop on vertex '{name}' is not a valid conflict")]
    SelfLoop {
        /// The vertex carrying the loop.
        name: String,
    },

    /// Internal guarantee broken (e.g. a builder produced a disconnected graph).
    #[error("invariant violated: {reason}")]
    InvariantViolation {
        /// What went wrong.
        reason: String,
    },
}

impl TimetableError {
    /// Creates an invariant violation error.
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Whether this error is a rejected argument (as opposed to a logic defect).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_display_joins_messages() {
        let err = TimetableError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyEntities, "no entities given"),
            ValidationError::new(ValidationErrorKind::DuplicateEntity, "duplicate entity: A"),
        ]);
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid input: no entities given; duplicate entity: A"
        );
    }

    #[test]
    fn test_invariant_display() {
        let err = TimetableError::invariant("graph is not connected");
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "invariant violated: graph is not connected");
    }
}
