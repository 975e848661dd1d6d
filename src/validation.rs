//! Input validation for graph construction.
//!
//! Checks the builder's arguments before any vertex or edge is created.
//! Detects:
//! - Empty entity sequences
//! - Duplicate entity names
//! - Inverted edge-count ranges
//! - Link probabilities outside `[0, 1]`
//!
//! All problems are reported together rather than stopping at the first.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::builder::{EdgeCountRange, EdgeModel};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending argument.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No entities were supplied.
    EmptyEntities,
    /// Two entities share the same name.
    DuplicateEntity,
    /// The edge-count range has `min > max`.
    InvertedRange,
    /// A link probability is NaN or outside `[0, 1]`.
    InvalidProbability,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates builder input.
///
/// Checks:
/// 1. At least one entity
/// 2. No duplicate entity names
/// 3. The edge model's parameters are well-formed
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input<S: AsRef<str>>(entities: &[S], model: &EdgeModel) -> ValidationResult {
    let mut errors = Vec::new();

    if entities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyEntities,
            "entities: at least one entity is required",
        ));
    }

    let mut seen = HashSet::new();
    for name in entities {
        let name = name.as_ref();
        if !seen.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntity,
                format!("entities: duplicate entity name '{name}'"),
            ));
        }
    }

    match model {
        EdgeModel::RandomEdgeCount(Some(range)) => {
            if let Err(e) = validate_range(range) {
                errors.push(e);
            }
        }
        EdgeModel::RandomEdgeCount(None) => {}
        EdgeModel::PairwiseProbability(p) => {
            if !(0.0..=1.0).contains(p) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidProbability,
                    format!("edge_model: link probability {p} is outside [0, 1]"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_range(range: &EdgeCountRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new(
            ValidationErrorKind::InvertedRange,
            format!(
                "edge_count_range: min {} is greater than max {}",
                range.min, range.max
            ),
        ));
    }
    Ok(())
}
