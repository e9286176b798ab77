//! Point evaluation.
//!
//! `PricingEngine` combines a closed-form [`PriceFunction`] with a central
//! [`DifferenceScheme`] to produce price, revenue, their derivatives and the
//! condition flags at one population. Degenerate parameters and non-finite
//! intermediates never escape as errors: they are replaced by fallback values
//! and reported through [`EvaluationResult::degradation`].

use pricer_core::math::finite_difference::DifferenceScheme;
use tracing::{debug, warn};

use super::config::{EngineConfig, EngineConfigError};
use super::result::{ConditionFlags, CurvePoint, Degradation, EvaluationResult};
use crate::models::{ModelError, PriceFunction};

/// Evaluation and sampling engine.
///
/// Holds only immutable configuration; every call works on the parameter set
/// passed in by the caller.
///
/// # Examples
///
/// ```
/// use pricer_models::engine::PricingEngine;
/// use pricer_models::models::ModelParams;
///
/// let engine = PricingEngine::default();
/// let mut params = ModelParams::default();
/// let result = engine.evaluate(&mut params, 50.0);
/// assert!((result.price - 56.53).abs() < 0.01);
/// assert!(result.conditions.price_decreasing);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PricingEngine {
    config: EngineConfig,
    scheme: DifferenceScheme<f64>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            scheme: DifferenceScheme::default(),
        }
    }
}

impl PricingEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    /// Returns `EngineConfigError` if the configuration fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, EngineConfigError> {
        config.validate()?;
        let scheme = DifferenceScheme::new(config.step)
            .map_err(|_| EngineConfigError::InvalidStep(config.step))?;
        Ok(Self { config, scheme })
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Finite-difference step in use.
    #[inline]
    pub fn step(&self) -> f64 {
        self.scheme.step()
    }

    /// Evaluate the model at population `n`.
    ///
    /// A zero reference population is replaced by `1.0` on the caller's
    /// parameter set before anything else happens; that call then reports the
    /// saturated price with zero derivatives. Any other numeric failure is
    /// recovered per quantity.
    pub fn evaluate<M: PriceFunction>(&self, model: &mut M, n: f64) -> EvaluationResult {
        let reset = model.reset_zero_references();
        if let Some(&parameter) = reset.first() {
            warn!(
                model = %model.kind(),
                parameter = %parameter,
                n,
                "zero reference population reset to 1; returning saturated price"
            );
            let point = CurvePoint::flat(n, fallback_price(&*model));
            return self.finish(
                &*model,
                point,
                Some(Degradation::ZeroReferencePopulation { parameter }),
            );
        }

        match self.point(&*model, n) {
            Ok(point) => self.finish(&*model, point, None),
            Err(err) => {
                warn!(model = %model.kind(), n, error = %err, "numerical instability during evaluation");
                let point = self.recover(&*model, n);
                self.finish(&*model, point, Some(Degradation::from(err)))
            }
        }
    }

    /// Price, revenue and derivatives at `n`, failing on the first
    /// unusable intermediate.
    pub(crate) fn point<M: PriceFunction>(&self, model: &M, n: f64) -> Result<CurvePoint, ModelError> {
        let price = model.price(n)?;
        let revenue = ModelError::ensure_finite(price * n)?;
        let price_slope = self.scheme.first(|x| model.price(x), n)?;
        let revenue_slope = self.scheme.first(|x| model.revenue(x), n)?;
        let revenue_curvature = self.scheme.second(|x| model.revenue(x), n)?;
        Ok(CurvePoint {
            n,
            price,
            revenue,
            price_slope,
            revenue_slope,
            revenue_curvature,
        })
    }

    /// Per-quantity fallback: non-finite price becomes the saturated price,
    /// a failed derivative becomes zero.
    fn recover<M: PriceFunction>(&self, model: &M, n: f64) -> CurvePoint {
        let price = model.price(n).unwrap_or_else(|_| fallback_price(model));
        let revenue = finite_or_zero(price * n);
        CurvePoint {
            n,
            price,
            revenue,
            price_slope: self.scheme.first(|x| model.price(x), n).unwrap_or(0.0),
            revenue_slope: self.scheme.first(|x| model.revenue(x), n).unwrap_or(0.0),
            revenue_curvature: self.scheme.second(|x| model.revenue(x), n).unwrap_or(0.0),
        }
    }

    fn finish<M: PriceFunction>(
        &self,
        model: &M,
        point: CurvePoint,
        degradation: Option<Degradation>,
    ) -> EvaluationResult {
        let kind = model.kind();
        let conditions = ConditionFlags::from_derivatives(
            kind.convexity_policy(),
            point.price_slope,
            point.revenue_slope,
            point.revenue_curvature,
        );
        debug!(
            model = %kind,
            n = point.n,
            price = point.price,
            revenue = point.revenue,
            all_conditions = conditions.all(),
            degraded = degradation.is_some(),
            "evaluated"
        );
        EvaluationResult {
            model: kind,
            n: point.n,
            price: point.price,
            revenue: point.revenue,
            price_slope: point.price_slope,
            revenue_slope: point.revenue_slope,
            revenue_curvature: point.revenue_curvature,
            conditions,
            degradation,
        }
    }
}

/// Saturated price, or zero if even that is not finite.
pub(crate) fn fallback_price<M: PriceFunction + ?Sized>(model: &M) -> f64 {
    finite_or_zero(model.saturated_price())
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HybridParams, HyperbolicParams, ModelParams, ParamId};
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_invalid_step() {
        let config = EngineConfig::new().with_step(0.0);
        assert_eq!(
            PricingEngine::new(config).unwrap_err(),
            EngineConfigError::InvalidStep(0.0)
        );
    }

    #[test]
    fn test_new_uses_configured_step() {
        let engine = PricingEngine::new(EngineConfig::new().with_step(1e-4)).unwrap();
        assert_eq!(engine.step(), 1e-4);
        assert_eq!(engine.config().step, 1e-4);
    }

    #[test]
    fn test_hyperbolic_defaults_at_fifty() {
        let engine = PricingEngine::default();
        let mut params = ModelParams::default();
        let result = engine.evaluate(&mut params, 50.0);

        assert_relative_eq!(result.price, 56.530612244897959, epsilon = 1e-9);
        assert_eq!(result.revenue, result.price * 50.0);
        assert!(!result.is_degraded());
        assert!(result.conditions.price_decreasing);
        assert!(result.conditions.revenue_increasing);
    }

    #[test]
    fn test_hyperbolic_price_slope_matches_closed_form() {
        let engine = PricingEngine::default();
        let mut params = HyperbolicParams::default();
        let n = 30.0;
        let result = engine.evaluate(&mut params, n);

        // d/dN [P_min + K (1 + N/N0)^-q] = -K q / N0 (1 + N/N0)^(-q-1)
        let expected = -params.k * params.q / params.n0 * (1.0 + n / params.n0).powf(-params.q - 1.0);
        assert_relative_eq!(result.price_slope, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_hyperbolic_convexity_condition_at_ten() {
        let engine = PricingEngine::default();
        let mut params = ModelParams::default();
        let result = engine.evaluate(&mut params, 10.0);
        assert!(result.revenue_curvature < -1.0);
        assert!(!result.conditions.revenue_convexity);
    }

    #[test]
    fn test_zero_n0_resets_and_falls_back() {
        let engine = PricingEngine::default();
        let mut params = ModelParams::Hyperbolic(HyperbolicParams::new(50.0, 80.0, 0.0, 2.0));
        let result = engine.evaluate(&mut params, 40.0);

        assert_eq!(result.price, 130.0);
        assert_eq!(result.revenue, 130.0 * 40.0);
        assert_eq!(result.price_slope, 0.0);
        assert_eq!(result.revenue_slope, 0.0);
        assert_eq!(result.revenue_curvature, 0.0);
        assert_eq!(
            result.degradation,
            Some(Degradation::ZeroReferencePopulation {
                parameter: ParamId::N0
            })
        );
        assert_eq!(params.get(ParamId::N0), Some(1.0));

        let again = engine.evaluate(&mut params, 40.0);
        assert!(!again.is_degraded());
        assert!(again.price < 130.0);
    }

    #[test]
    fn test_zero_n1_resets_hybrid() {
        let engine = PricingEngine::default();
        let mut params = HybridParams {
            n1: 0.0,
            ..HybridParams::default()
        };
        let result = engine.evaluate(&mut params, 10.0);

        assert_eq!(result.price, 170.0);
        assert_eq!(
            result.degradation,
            Some(Degradation::ZeroReferencePopulation {
                parameter: ParamId::N1
            })
        );
        assert_eq!(params.n1, 1.0);
        assert!(!result.conditions.price_decreasing);
    }

    #[test]
    fn test_overflow_recovers_per_quantity() {
        let engine = PricingEngine::default();
        // (1 + N/N0)^q overflows
        let mut params = HyperbolicParams::new(50.0, 80.0, 1e-300, 5.0);
        let result = engine.evaluate(&mut params, 100.0);

        assert_eq!(result.degradation, Some(Degradation::NumericalInstability));
        assert_eq!(result.price, 130.0);
        assert_eq!(result.revenue, 13000.0);
        assert_eq!(result.price_slope, 0.0);
        assert_eq!(result.revenue_curvature, 0.0);
    }

    #[test]
    fn test_non_finite_population_is_degraded() {
        let engine = PricingEngine::default();
        let mut params = ModelParams::default();
        let result = engine.evaluate(&mut params, f64::NAN);

        assert!(result.is_degraded());
        assert_eq!(result.price, 130.0);
        assert_eq!(result.revenue, 0.0);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let engine = PricingEngine::default();
        let mut params = ModelParams::defaults(crate::models::ModelKind::Hybrid);
        let first = engine.evaluate(&mut params, 73.0);
        let second = engine.evaluate(&mut params, 73.0);
        assert_eq!(first, second);
    }
}
