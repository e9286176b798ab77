//! Error types for structured error handling.
//!
//! This module provides:
//! - `NumericError`: Errors from finite-difference and grid operations

use thiserror::Error;

/// Numerical failure raised by the foundation operators.
///
/// Higher layers wrap this error (via `From<NumericError>`) so that a single
/// `?` propagates both model-specific and numeric failures.
///
/// # Variants
/// - `NonFinite`: An intermediate or final value was NaN or infinite
/// - `InvalidStep`: The differentiation step is not a finite positive number
///
/// # Examples
/// ```
/// use pricer_core::types::NumericError;
///
/// let err = NumericError::InvalidStep { step: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid difference step: h = 0");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericError {
    /// A computed value was NaN or infinite.
    #[error("Non-finite value: {value}")]
    NonFinite {
        /// The offending value
        value: f64,
    },

    /// Differentiation step is zero, negative or non-finite.
    #[error("Invalid difference step: h = {step}")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let err = NumericError::NonFinite { value: f64::NAN };
        assert_eq!(format!("{}", err), "Non-finite value: NaN");

        let err = NumericError::NonFinite {
            value: f64::INFINITY,
        };
        assert_eq!(format!("{}", err), "Non-finite value: inf");
    }

    #[test]
    fn test_invalid_step_display() {
        let err = NumericError::InvalidStep { step: -1e-5 };
        assert_eq!(format!("{}", err), "Invalid difference step: h = -0.00001");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = NumericError::InvalidStep { step: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
