//! Exponential-hyperbolic hybrid price model.
//!
//! ```text
//! P(N) = P_min + K * exp(-q * N/N0) + C / (1 + (N/N1)^r)
//! ```
//!
//! The exponential term drives a fast early discount, the hyperbolic tail
//! keeps the price from collapsing to the floor, so revenue keeps growing
//! while its growth rate slows.

use super::error::ModelError;
use super::params::{ModelKind, ParamId};
use super::price_function::{PriceFunction, REFERENCE_POPULATION_RESET};

/// Hybrid model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridParams {
    /// Price floor
    #[cfg_attr(feature = "serde", serde(rename = "P_min"))]
    pub p_min: f64,
    /// Amplitude of the exponential term
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    pub k: f64,
    /// Exponential decay rate
    pub q: f64,
    /// Reference population of the exponential term
    #[cfg_attr(feature = "serde", serde(rename = "N0"))]
    pub n0: f64,
    /// Amplitude of the hyperbolic tail
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    pub c: f64,
    /// Tail exponent
    pub r: f64,
    /// Reference population of the hyperbolic tail
    #[cfg_attr(feature = "serde", serde(rename = "N1"))]
    pub n1: f64,
}

impl HybridParams {
    /// Create hybrid parameters.
    ///
    /// No validation is performed: degenerate values are handled at
    /// evaluation time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(p_min: f64, k: f64, q: f64, n0: f64, c: f64, r: f64, n1: f64) -> Self {
        Self {
            p_min,
            k,
            q,
            n0,
            c,
            r,
            n1,
        }
    }

    fn exponential_term(&self, n: f64) -> Result<f64, ModelError> {
        ModelError::ensure_finite(self.k * (-self.q * n / self.n0).exp())
    }

    fn tail_term(&self, n: f64) -> Result<f64, ModelError> {
        let ratio = ModelError::ensure_finite((n / self.n1).powf(self.r))?;
        ModelError::ensure_finite(self.c / (1.0 + ratio))
    }
}

impl Default for HybridParams {
    fn default() -> Self {
        Self {
            p_min: 20.0,
            k: 100.0,
            q: 0.2,
            n0: 15.0,
            c: 50.0,
            r: 1.5,
            n1: 100.0,
        }
    }
}

impl PriceFunction for HybridParams {
    fn kind(&self) -> ModelKind {
        ModelKind::Hybrid
    }

    fn price(&self, n: f64) -> Result<f64, ModelError> {
        if let Some(parameter) = self.zero_reference() {
            return Err(ModelError::ZeroReferencePopulation { parameter });
        }
        let exponential = self.exponential_term(n)?;
        let tail = self.tail_term(n)?;
        ModelError::ensure_finite(self.p_min + exponential + tail)
    }

    fn saturated_price(&self) -> f64 {
        self.p_min + self.k + self.c
    }

    fn zero_reference(&self) -> Option<ParamId> {
        if self.n0 == 0.0 {
            Some(ParamId::N0)
        } else if self.n1 == 0.0 {
            Some(ParamId::N1)
        } else {
            None
        }
    }

    fn reset_zero_references(&mut self) -> Vec<ParamId> {
        let mut reset = Vec::new();
        if self.n0 == 0.0 {
            self.n0 = REFERENCE_POPULATION_RESET;
            reset.push(ParamId::N0);
        }
        if self.n1 == 0.0 {
            self.n1 = REFERENCE_POPULATION_RESET;
            reset.push(ParamId::N1);
        }
        reset
    }
}
