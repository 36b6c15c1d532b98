//! Equation-of-state errors.

use hs_core::HsError;
use thiserror::Error;

/// Result type for EOS operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while solving for a thermodynamic state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Temperature iteration did not converge.
    #[error("Convergence failed for {what} after {iterations} iterations")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },
}

impl From<HsError> for EosError {
    fn from(err: HsError) -> Self {
        match err {
            HsError::NonFinite { what, .. } | HsError::NonPositive { what, .. } => {
                EosError::NonPhysical { what }
            }
            HsError::InvalidArg { what } => EosError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = EosError::ConvergenceFailed {
            what: "temperature from (rho, p)",
            iterations: 100,
        };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn core_error_maps_to_non_physical() {
        let err: EosError = HsError::NonPositive {
            what: "density",
            value: -1.0,
        }
        .into();
        assert_eq!(err, EosError::NonPhysical { what: "density" });
    }
}
