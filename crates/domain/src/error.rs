//! Unified error types for the domain layer
//!
//! Provides a common error type used across all domain operations, enabling consistent
//! error handling without forcing callers to match on strings.
//!
//! Two families of failure exist in this model:
//! - argument rejections: a caller-supplied value violates a precondition at the
//!   boundary of a constructor or mutator (`Validation`, `NegativePosition`,
//!   `PositionOccupied`);
//! - state rejections: a collaborator is queried for data it cannot supply
//!   (`MissingResource`).
//!
//! Every failure is synchronous and leaves prior state unchanged.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty name, empty component list)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A roster position index below zero was supplied
    #[error("Invalid roster position {position}: positions must be non-negative")]
    NegativePosition { position: i32 },

    /// A unit was placed at a slot that already holds one
    #[error("Roster position {position} is already occupied")]
    PositionOccupied { position: u32 },

    /// A team was asked to price a resource count it never declared
    #[error("Team cannot report its {resource} count")]
    MissingResource { resource: &'static str },
}

impl DomainError {
    /// Creates a validation error for precondition violations.
    ///
    /// Use this when caller-supplied values break a constructor contract:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors caused by a bad caller-supplied argument.
    pub fn is_argument_rejection(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NegativePosition { .. } | Self::PositionOccupied { .. }
        )
    }

    /// True for errors caused by querying an incomplete collaborator.
    pub fn is_state_rejection(&self) -> bool {
        matches!(self, Self::MissingResource { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
        assert!(err.is_argument_rejection());
        assert!(!err.is_state_rejection());
    }

    #[test]
    fn test_negative_position_error() {
        let err = DomainError::NegativePosition { position: -3 };
        assert!(err.to_string().contains("-3"));
        assert!(err.is_argument_rejection());
    }

    #[test]
    fn test_position_occupied_error() {
        let err = DomainError::PositionOccupied { position: 7 };
        assert_eq!(err.to_string(), "Roster position 7 is already occupied");
        assert!(err.is_argument_rejection());
    }

    #[test]
    fn test_missing_resource_error() {
        let err = DomainError::MissingResource {
            resource: "coaching dice",
        };
        assert_eq!(err.to_string(), "Team cannot report its coaching dice count");
        assert!(err.is_state_rejection());
        assert!(!err.is_argument_rejection());
    }
}
