//! Price function trait.
//!
//! A price function maps a participant count `N` to a per-participant price.
//! Revenue is always derived as `price(N) * N`, so every model only has to
//! provide the closed-form price and its degenerate-parameter guards; the
//! engine supplies derivatives, condition checks and sampling generically.

use super::error::ModelError;
use super::params::{ModelKind, ParamId};

/// Closed-form price function with guarded parameters.
///
/// Implementors must never divide by a zero reference population: `price`
/// returns [`ModelError::ZeroReferencePopulation`] instead, and any
/// non-finite intermediate is reported as [`ModelError::Numeric`].
pub trait PriceFunction {
    /// Model variant of this parameter set.
    fn kind(&self) -> ModelKind;

    /// Per-participant price at `n`.
    fn price(&self, n: f64) -> Result<f64, ModelError>;

    /// Total revenue at `n`, exactly `price(n) * n`.
    fn revenue(&self, n: f64) -> Result<f64, ModelError> {
        let price = self.price(n)?;
        ModelError::ensure_finite(price * n)
    }

    /// Price with every decay term at its maximum.
    ///
    /// Used as the fallback value whenever the formula cannot be evaluated.
    fn saturated_price(&self) -> f64;

    /// First reference population that is exactly zero, if any.
    fn zero_reference(&self) -> Option<ParamId>;

    /// Replace every zero reference population by
    /// [`REFERENCE_POPULATION_RESET`] and report which were replaced.
    fn reset_zero_references(&mut self) -> Vec<ParamId>;
}

/// Value written over a zero reference population.
pub const REFERENCE_POPULATION_RESET: f64 = 1.0;
