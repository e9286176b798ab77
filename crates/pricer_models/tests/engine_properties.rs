//! Behavioural tests for the evaluation and sampling engine.
//!
//! # Test Categories
//!
//! 1. **Reference values**: Default parameter sets against closed forms
//! 2. **Degenerate parameters**: Zero reference populations and overflow
//! 3. **Properties**: Monotonicity, revenue identity, sampling shape, idempotence

use approx::assert_relative_eq;
use pricer_models::engine::{
    evaluate, sample_curve, sample_curve_default, CurveDomain, Degradation, PricingEngine,
};
use pricer_models::models::{
    HybridParams, HyperbolicParams, ModelKind, ModelParams, ParamId, PriceFunction,
};
use proptest::prelude::*;

fn hybrid_closed_form(p: &HybridParams, n: f64) -> f64 {
    p.p_min + p.k * (-p.q * n / p.n0).exp() + p.c / (1.0 + (n / p.n1).powf(p.r))
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_hyperbolic_defaults_reference_values() {
    let mut params = ModelParams::defaults(ModelKind::Hyperbolic);
    let result = evaluate(&mut params, 50.0);

    assert_relative_eq!(result.price, 56.53, epsilon = 0.01);
    assert_relative_eq!(result.revenue, 2826.5, epsilon = 0.1);
    assert!(!result.is_degraded());
}

#[test]
fn test_hybrid_defaults_match_closed_form() {
    let defaults = HybridParams::default();
    let mut params = ModelParams::from(defaults);
    let result = evaluate(&mut params, 50.0);

    assert_relative_eq!(
        result.price,
        hybrid_closed_form(&defaults, 50.0),
        epsilon = 1e-6
    );
    assert_eq!(result.revenue, result.price * 50.0);
}

#[test]
fn test_hybrid_revenue_increasing_on_default_domain() {
    let params = ModelParams::defaults(ModelKind::Hybrid);
    let sample = sample_curve(&params, 1.0, 200.0, 200);

    assert!(!sample.is_degraded());
    for point in &sample.points {
        assert!(
            point.revenue_slope > 0.0,
            "revenue' = {} at N = {}",
            point.revenue_slope,
            point.n
        );
    }
}

#[test]
fn test_hybrid_conditions_at_default_point() {
    let mut params = ModelParams::defaults(ModelKind::Hybrid);
    let result = evaluate(&mut params, 50.0);

    assert!(result.conditions.price_decreasing);
    assert!(result.conditions.revenue_increasing);
    assert!(result.conditions.revenue_convexity);
    assert!(result.conditions.all());
}

// ============================================================================
// Degenerate parameters
// ============================================================================

#[test]
fn test_zero_n0_falls_back_and_resets() {
    let mut params = ModelParams::defaults(ModelKind::Hyperbolic);
    params.set(ParamId::N0, 0.0).unwrap();

    let result = evaluate(&mut params, 50.0);

    assert_eq!(result.price, 130.0);
    assert_eq!(result.revenue, 6500.0);
    assert_eq!(result.price_slope, 0.0);
    assert_eq!(result.revenue_slope, 0.0);
    assert_eq!(result.revenue_curvature, 0.0);
    assert!(result.is_degraded());
    assert_eq!(params.get(ParamId::N0), Some(1.0));
}

#[test]
fn test_zero_reference_both_populations_hybrid() {
    let mut params = ModelParams::from(HybridParams {
        n0: 0.0,
        n1: 0.0,
        ..HybridParams::default()
    });

    let result = evaluate(&mut params, 10.0);

    assert_eq!(
        result.degradation,
        Some(Degradation::ZeroReferencePopulation {
            parameter: ParamId::N0
        })
    );
    assert_eq!(params.get(ParamId::N0), Some(1.0));
    assert_eq!(params.get(ParamId::N1), Some(1.0));
}

#[test]
fn test_degraded_sampling_does_not_mutate() {
    let params = ModelParams::from(HybridParams {
        n1: 0.0,
        ..HybridParams::default()
    });
    let before = params;

    let sample = sample_curve_default(&params);

    assert_eq!(params, before);
    assert_eq!(sample.len(), 400);
    assert_eq!(
        sample.degradation,
        Some(Degradation::ZeroReferencePopulation {
            parameter: ParamId::N1
        })
    );
    let saturated = params.saturated_price();
    assert!(sample.points.iter().all(|p| p.price == saturated));
    assert!(sample
        .points
        .iter()
        .all(|p| p.revenue == saturated * p.n && p.revenue_curvature == 0.0));
}

#[test]
fn test_engine_with_coarser_step() {
    let config = pricer_models::engine::EngineConfig::new().with_step(1e-3);
    let engine = PricingEngine::new(config).unwrap();
    let mut coarse = ModelParams::default();
    let mut fine = ModelParams::default();

    let a = engine.evaluate(&mut coarse, 40.0);
    let b = evaluate(&mut fine, 40.0);

    assert_eq!(a.price, b.price);
    assert_relative_eq!(a.price_slope, b.price_slope, epsilon = 1e-5);
}

#[test]
fn test_curve_domain_count_edge_cases() {
    let params = HyperbolicParams::default();
    let engine = PricingEngine::default();

    assert!(engine
        .sample_curve(&params, CurveDomain::new(1.0, 200.0, 0))
        .is_empty());
    assert_eq!(
        engine
            .sample_curve(&params, CurveDomain::new(3.0, 200.0, 1))
            .populations(),
        vec![3.0]
    );
}

// ============================================================================
// Properties
// ============================================================================

fn hyperbolic_strategy() -> impl Strategy<Value = HyperbolicParams> {
    (10.0..500.0, 50.0..500.0, 5.0..200.0, 0.5..3.0)
        .prop_map(|(p_min, k, n0, q)| HyperbolicParams::new(p_min, k, n0, q))
}

fn hybrid_strategy() -> impl Strategy<Value = HybridParams> {
    (
        0.0..500.0,
        0.0..500.0,
        0.01..2.0,
        1.0..200.0,
        0.0..500.0,
        0.1..5.0,
        1.0..500.0,
    )
        .prop_map(|(p_min, k, q, n0, c, r, n1)| HybridParams::new(p_min, k, q, n0, c, r, n1))
}

fn any_model() -> impl Strategy<Value = ModelParams> {
    prop_oneof![
        hyperbolic_strategy().prop_map(ModelParams::from),
        hybrid_strategy().prop_map(ModelParams::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_price_decreasing_for_positive_k_and_q(
        params in hyperbolic_strategy(),
        n in 0.5..200.0_f64,
    ) {
        let mut model = ModelParams::from(params);
        let result = evaluate(&mut model, n);
        prop_assert!(!result.is_degraded());
        prop_assert!(
            result.price_slope < 0.0,
            "price' = {} for {:?} at N = {}",
            result.price_slope,
            params,
            n
        );
    }

    #[test]
    fn test_revenue_identity(mut model in any_model(), n in 1.0..200.0_f64) {
        let result = evaluate(&mut model, n);
        prop_assert_eq!(result.revenue, result.price * n);
        prop_assert_eq!(model.revenue(n).unwrap(), model.price(n).unwrap() * n);
    }

    #[test]
    fn test_evaluate_idempotent(mut model in any_model(), n in 1.0..200.0_f64) {
        let first = evaluate(&mut model, n);
        let second = evaluate(&mut model, n);
        prop_assert_eq!(first.price.to_bits(), second.price.to_bits());
        prop_assert_eq!(first.revenue_curvature.to_bits(), second.revenue_curvature.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_sample_shape(
        model in any_model(),
        low in 0.5..100.0_f64,
        span in 1.0..100.0_f64,
        count in 2usize..500,
    ) {
        let high = low + span;
        let sample = sample_curve(&model, low, high, count);
        prop_assert_eq!(sample.len(), count);
        prop_assert_eq!(sample.points[0].n, low);
        prop_assert_eq!(sample.points[count - 1].n, high);
        prop_assert!(sample.points.windows(2).all(|w| w[0].n < w[1].n));
    }
}
