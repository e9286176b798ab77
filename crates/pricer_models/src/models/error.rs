//! Model error types.
//!
//! This module provides:
//! - `ModelError`: Failures while evaluating a price function
//! - `ParameterError`: Failures while reading or writing parameter sets

use pricer_core::types::NumericError;
use thiserror::Error;

use super::params::{ModelKind, ParamId};

/// Price-function evaluation errors.
///
/// These never escape the engine: it converts them into fallback values
/// plus a [`Degradation`](crate::engine::Degradation) reason.
///
/// # Variants
/// - `ZeroReferencePopulation`: `N0` or `N1` is zero and would be used as a divisor
/// - `Numeric`: Overflow, invalid power or another non-finite intermediate
///
/// # Examples
/// ```
/// use pricer_models::models::{ModelError, ParamId};
///
/// let err = ModelError::ZeroReferencePopulation { parameter: ParamId::N0 };
/// assert_eq!(format!("{}", err), "Reference population N0 is zero");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// A reference population is exactly zero.
    #[error("Reference population {parameter} is zero")]
    ZeroReferencePopulation {
        /// The offending parameter (`N0` or `N1`)
        parameter: ParamId,
    },

    /// Numerical failure in the formula or its finite differences.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl ModelError {
    /// Check that `value` is finite.
    #[inline]
    pub(crate) fn ensure_finite(value: f64) -> Result<f64, ModelError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumericError::NonFinite { value }.into())
        }
    }
}

/// Parameter-set access errors.
///
/// # Variants
/// - `UnknownParameter`: Identifier does not name any parameter
/// - `NotInModel`: Identifier exists but is not part of this model variant
/// - `NonFiniteValue`: Assigned value is NaN or infinite
/// - `MalformedAssignment`: Text is not of the form `NAME=VALUE`
/// - `UnknownModel`: Model name does not name a variant
///
/// # Examples
/// ```
/// use pricer_models::models::{ModelKind, ParamId, ParameterError};
///
/// let err = ParameterError::NotInModel { parameter: ParamId::C, model: ModelKind::Hyperbolic };
/// assert_eq!(format!("{}", err), "Parameter C is not part of the hyperbolic model");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Identifier does not name any parameter.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Identifier is not part of the model variant.
    #[error("Parameter {parameter} is not part of the {model} model")]
    NotInModel {
        /// The parameter
        parameter: ParamId,
        /// The model variant
        model: ModelKind,
    },

    /// Assigned value is not finite.
    #[error("Parameter {parameter} must be finite, got {value}")]
    NonFiniteValue {
        /// The parameter
        parameter: ParamId,
        /// The rejected value
        value: f64,
    },

    /// Assignment text is not `NAME=VALUE`.
    #[error("Malformed assignment '{0}': expected NAME=VALUE")]
    MalformedAssignment(String),

    /// Model name does not name a variant.
    #[error("Unknown model: {0} (expected hyperbolic or hybrid)")]
    UnknownModel(String),
}
