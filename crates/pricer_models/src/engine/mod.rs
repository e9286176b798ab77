//! Evaluation and sampling engine.
//!
//! This module provides:
//! - `PricingEngine`: Point evaluation (price, revenue, derivatives, condition flags)
//!   and curve sampling over a population domain
//! - `EngineConfig`, `CurveDomain`: Differentiation step and default sampling domain
//! - `EvaluationResult`, `CurveSample`, `CurvePoint`: Value snapshots returned to callers
//! - `ConditionFlags`, `Degradation`: Model-health flags and fallback reasons
//! - [`evaluate`], [`sample_curve`], [`sample_curve_default`]: Entry points using the
//!   default engine
//!
//! ## Failure semantics
//!
//! No entry point panics or returns an error for numeric reasons. A zero
//! reference population or a non-finite intermediate yields fallback values
//! and sets the `degradation` field of the returned result.
//!
//! ## Example
//!
//! ```
//! use pricer_models::engine::{evaluate, sample_curve};
//! use pricer_models::models::{ModelKind, ModelParams};
//!
//! let mut params = ModelParams::defaults(ModelKind::Hybrid);
//! let result = evaluate(&mut params, 50.0);
//! assert!(result.conditions.revenue_increasing);
//!
//! let curve = sample_curve(&params, 1.0, 200.0, 400);
//! assert_eq!(curve.len(), 400);
//! ```

pub mod config;
pub mod evaluator;
pub mod result;
pub mod sampler;

pub use config::{
    CurveDomain, EngineConfig, EngineConfigError, DEFAULT_DOMAIN_HIGH, DEFAULT_DOMAIN_LOW,
    DEFAULT_SAMPLE_COUNT,
};
pub use evaluator::PricingEngine;
pub use result::{ConditionFlags, CurvePoint, CurveSample, Degradation, EvaluationResult};

use crate::models::PriceFunction;

/// Evaluate `params` at `n` with the default engine.
///
/// A zero `N0`/`N1` on `params` is reset to `1.0`.
pub fn evaluate<M: PriceFunction>(params: &mut M, n: f64) -> EvaluationResult {
    PricingEngine::default().evaluate(params, n)
}

/// Sample `params` at `count` evenly spaced populations over `[n_low, n_high]`
/// with the default engine.
pub fn sample_curve<M: PriceFunction>(
    params: &M,
    n_low: f64,
    n_high: f64,
    count: usize,
) -> CurveSample {
    PricingEngine::default().sample_curve(params, CurveDomain::new(n_low, n_high, count))
}

/// Sample `params` over the default domain: `[1, 200]`, 400 points.
pub fn sample_curve_default<M: PriceFunction>(params: &M) -> CurveSample {
    PricingEngine::default().sample_default(params)
}
