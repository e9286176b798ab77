//! Hyperbolic price model.
//!
//! ```text
//! P(N) = P_min + K / (1 + N/N0)^q
//! ```
//! where:
//! - P_min = price floor approached as N grows
//! - K = price range above the floor (P(0) = P_min + K)
//! - N0 = reference population at which the decay term halves for q = 1
//! - q = decay exponent

use super::error::ModelError;
use super::params::{ModelKind, ParamId};
use super::price_function::{PriceFunction, REFERENCE_POPULATION_RESET};

/// Hyperbolic model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyperbolicParams {
    /// Price floor
    #[cfg_attr(feature = "serde", serde(rename = "P_min"))]
    pub p_min: f64,
    /// Price range
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    pub k: f64,
    /// Reference population
    #[cfg_attr(feature = "serde", serde(rename = "N0"))]
    pub n0: f64,
    /// Decay exponent
    pub q: f64,
}

impl HyperbolicParams {
    /// Create hyperbolic parameters.
    ///
    /// No validation is performed: degenerate values are handled at
    /// evaluation time.
    pub fn new(p_min: f64, k: f64, n0: f64, q: f64) -> Self {
        Self { p_min, k, n0, q }
    }
}

impl Default for HyperbolicParams {
    fn default() -> Self {
        Self {
            p_min: 50.0,
            k: 80.0,
            n0: 20.0,
            q: 2.0,
        }
    }
}

impl PriceFunction for HyperbolicParams {
    fn kind(&self) -> ModelKind {
        ModelKind::Hyperbolic
    }

    fn price(&self, n: f64) -> Result<f64, ModelError> {
        if self.n0 == 0.0 {
            return Err(ModelError::ZeroReferencePopulation {
                parameter: ParamId::N0,
            });
        }
        // A negative base with fractional q yields NaN and is caught here.
        let decay = ModelError::ensure_finite((1.0 + n / self.n0).powf(self.q))?;
        ModelError::ensure_finite(self.p_min + self.k / decay)
    }

    fn saturated_price(&self) -> f64 {
        self.p_min + self.k
    }

    fn zero_reference(&self) -> Option<ParamId> {
        (self.n0 == 0.0).then_some(ParamId::N0)
    }

    fn reset_zero_references(&mut self) -> Vec<ParamId> {
        if self.n0 == 0.0 {
            self.n0 = REFERENCE_POPULATION_RESET;
            vec![ParamId::N0]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = HyperbolicParams::default();
        assert_eq!(params, HyperbolicParams::new(50.0, 80.0, 20.0, 2.0));
    }

    #[test]
    fn test_price_at_default_point() {
        let params = HyperbolicParams::default();
        let price = params.price(50.0).unwrap();
        assert_relative_eq!(price, 50.0 + 80.0 / 3.5_f64.powi(2), epsilon = 1e-12);
        assert_relative_eq!(price, 56.5306, epsilon = 1e-4);
    }

    #[test]
    fn test_price_at_zero_population_is_saturated() {
        let params = HyperbolicParams::default();
        assert_eq!(params.price(0.0).unwrap(), params.saturated_price());
    }

    #[test]
    fn test_price_approaches_floor() {
        let params = HyperbolicParams::default();
        let far = params.price(1e9).unwrap();
        assert!(far > params.p_min);
        assert!(far - params.p_min < 1e-12);
    }

    #[test]
    fn test_revenue_is_price_times_n() {
        let params = HyperbolicParams::default();
        for n in [1.0, 13.0, 50.0, 199.5] {
            assert_eq!(params.revenue(n).unwrap(), params.price(n).unwrap() * n);
        }
    }

    #[test]
    fn test_zero_reference_population_guard() {
        let params = HyperbolicParams::new(50.0, 80.0, 0.0, 2.0);
        assert_eq!(
            params.price(10.0),
            Err(ModelError::ZeroReferencePopulation {
                parameter: ParamId::N0
            })
        );
        assert_eq!(params.zero_reference(), Some(ParamId::N0));
    }

    #[test]
    fn test_negative_zero_is_guarded() {
        let params = HyperbolicParams::new(50.0, 80.0, -0.0, 2.0);
        assert!(params.price(10.0).is_err());
        assert_eq!(params.zero_reference(), Some(ParamId::N0));
    }

    #[test]
    fn test_reset_zero_reference() {
        let mut params = HyperbolicParams::new(50.0, 80.0, 0.0, 2.0);
        assert_eq!(params.reset_zero_references(), vec![ParamId::N0]);
        assert_eq!(params.n0, 1.0);
        assert!(params.reset_zero_references().is_empty());
        assert_eq!(params.zero_reference(), None);
    }

    #[test]
    fn test_invalid_power_is_numeric_error() {
        // 1 + N/N0 < 0 with fractional exponent
        let params = HyperbolicParams::new(50.0, 80.0, 20.0, 1.5);
        assert!(matches!(params.price(-40.0), Err(ModelError::Numeric(_))));
    }

    #[test]
    fn test_overflowing_exponent_is_numeric_error() {
        let params = HyperbolicParams::new(50.0, 80.0, 1.0, 1e6);
        assert!(matches!(params.price(200.0), Err(ModelError::Numeric(_))));
    }

    #[test]
    fn test_kind() {
        assert_eq!(HyperbolicParams::default().kind(), ModelKind::Hyperbolic);
    }
}
