//! Error types for profile construction.

use hs_core::numeric::Real;
use hs_eos::EosError;
use thiserror::Error;

/// Errors that abort a profile build. None of them leave a partial profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Capacity exceeded: requested {requested} points, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("EOS failure at point {index}: {source}")]
    EosFailure { index: usize, source: EosError },

    #[error("Unphysical {quantity} at point {index} (from {} and {})", .inputs.0, .inputs.1)]
    UnphysicalProfile {
        index: usize,
        quantity: &'static str,
        inputs: (Real, Real),
    },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    /// Point index the failure refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ModelError::EosFailure { index, .. } | ModelError::UnphysicalProfile { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unphysical_message_names_point_and_inputs() {
        let err = ModelError::UnphysicalProfile {
            index: 42,
            quantity: "pressure",
            inputs: (1.5, -2.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("pressure"));
        assert!(msg.contains("42"));
        assert!(msg.contains("-2"));
        assert_eq!(err.index(), Some(42));
    }

    #[test]
    fn eos_failure_keeps_source() {
        use std::error::Error as _;
        let err = ModelError::EosFailure {
            index: 3,
            source: EosError::ConvergenceFailed {
                what: "temperature",
                iterations: 10,
            },
        };
        assert!(err.source().is_some());
        assert_eq!(err.index(), Some(3));
    }
}
