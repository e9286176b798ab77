//! Curve sampling over a population domain.
//!
//! Sampling is all-or-nothing: if any point of the curve cannot be evaluated,
//! the whole sample is replaced by the degenerate curve (constant saturated
//! price, revenue linear in `N`, zero derivatives) and carries the reason.

use pricer_core::math::grid::linspace;
use tracing::{debug, warn};

use super::config::CurveDomain;
use super::evaluator::{fallback_price, PricingEngine};
use super::result::{CurvePoint, CurveSample, Degradation};
use crate::models::{ModelError, PriceFunction};

impl PricingEngine {
    /// Sample the model over `domain`.
    ///
    /// The parameter set is never modified; a zero reference population
    /// yields the degenerate curve instead of being reset.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::engine::{CurveDomain, PricingEngine};
    /// use pricer_models::models::ModelParams;
    ///
    /// let engine = PricingEngine::default();
    /// let sample = engine.sample_curve(&ModelParams::default(), CurveDomain::new(1.0, 200.0, 5));
    /// assert_eq!(sample.populations(), vec![1.0, 50.75, 100.5, 150.25, 200.0]);
    /// ```
    pub fn sample_curve<M: PriceFunction>(&self, model: &M, domain: CurveDomain) -> CurveSample {
        let kind = model.kind();
        if !domain.low.is_finite() || !domain.high.is_finite() {
            warn!(model = %kind, low = domain.low, high = domain.high, "non-finite sampling domain");
            return CurveSample {
                model: kind,
                points: Vec::new(),
                degradation: Some(Degradation::NumericalInstability),
            };
        }

        let grid = linspace(domain.low, domain.high, domain.count);
        let sampled: Result<Vec<CurvePoint>, ModelError> = match model.zero_reference() {
            Some(parameter) => Err(ModelError::ZeroReferencePopulation { parameter }),
            None => grid.iter().map(|&n| self.point(model, n)).collect(),
        };

        match sampled {
            Ok(points) => {
                debug!(model = %kind, count = points.len(), "sampled curve");
                CurveSample {
                    model: kind,
                    points,
                    degradation: None,
                }
            }
            Err(err) => {
                warn!(model = %kind, error = %err, "curve replaced by degenerate fallback");
                let price = fallback_price(model);
                CurveSample {
                    model: kind,
                    points: grid.into_iter().map(|n| CurvePoint::flat(n, price)).collect(),
                    degradation: Some(Degradation::from(err)),
                }
            }
        }
    }

    /// Sample the model over the configured default domain.
    pub fn sample_default<M: PriceFunction>(&self, model: &M) -> CurveSample {
        self.sample_curve(model, self.config().domain)
    }
}
