//! Result types returned by the engine.
//!
//! Every result is a plain value snapshot: the engine builds it fresh on each
//! call and never mutates it afterwards. Whether a value was computed from
//! the formula or substituted by a fallback is carried as data
//! (`degradation`), never as an error.

use std::fmt;

use crate::models::{ConvexityPolicy, ModelError, ModelKind, ParamId};

/// Why a result was produced by a fallback path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "reason", rename_all = "snake_case"))]
pub enum Degradation {
    /// A reference population was zero.
    ZeroReferencePopulation {
        /// The offending parameter (`N0` or `N1`)
        parameter: ParamId,
    },
    /// Overflow, invalid power or another non-finite intermediate.
    NumericalInstability,
}

impl From<ModelError> for Degradation {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ZeroReferencePopulation { parameter } => {
                Degradation::ZeroReferencePopulation { parameter }
            }
            ModelError::Numeric(_) => Degradation::NumericalInstability,
        }
    }
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::ZeroReferencePopulation { parameter } => write!(
                f,
                "reference population {} was zero; saturated price used and {} reset to 1",
                parameter, parameter
            ),
            Degradation::NumericalInstability => {
                write!(f, "numerical instability; fallback values used")
            }
        }
    }
}

/// Model-health conditions derived from derivative signs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionFlags {
    /// `price' < 0`
    pub price_decreasing: bool,
    /// `revenue' > 0`
    pub revenue_increasing: bool,
    /// `revenue''` has the sign required by the variant's convexity policy
    pub revenue_convexity: bool,
}

impl ConditionFlags {
    /// Derive the flags from derivative values.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::engine::ConditionFlags;
    /// use pricer_models::models::ConvexityPolicy;
    ///
    /// let flags = ConditionFlags::from_derivatives(ConvexityPolicy::Decelerating, -0.3, 12.0, -0.1);
    /// assert!(flags.all());
    /// ```
    pub fn from_derivatives(
        policy: ConvexityPolicy,
        price_slope: f64,
        revenue_slope: f64,
        revenue_curvature: f64,
    ) -> Self {
        Self {
            price_decreasing: price_slope < 0.0,
            revenue_increasing: revenue_slope > 0.0,
            revenue_convexity: policy.is_satisfied(revenue_curvature),
        }
    }

    /// Whether every condition holds.
    pub fn all(&self) -> bool {
        self.price_decreasing && self.revenue_increasing && self.revenue_convexity
    }
}

/// Snapshot of one point evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    /// Model variant evaluated
    pub model: ModelKind,
    /// Evaluation point
    pub n: f64,
    /// Per-participant price `P(N)`
    pub price: f64,
    /// Revenue `I(N) = P(N) * N`
    pub revenue: f64,
    /// `dP/dN`
    pub price_slope: f64,
    /// `dI/dN`
    pub revenue_slope: f64,
    /// `d²I/dN²`
    pub revenue_curvature: f64,
    /// Model-health conditions
    pub conditions: ConditionFlags,
    /// Set when any value came from a fallback path
    pub degradation: Option<Degradation>,
}

impl EvaluationResult {
    /// Whether any value came from a fallback path.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    /// The values of this evaluation as a curve point.
    pub fn point(&self) -> CurvePoint {
        CurvePoint {
            n: self.n,
            price: self.price,
            revenue: self.revenue,
            price_slope: self.price_slope,
            revenue_slope: self.revenue_slope,
            revenue_curvature: self.revenue_curvature,
        }
    }
}

/// One sampled point of a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Population
    pub n: f64,
    /// Price
    pub price: f64,
    /// Revenue
    pub revenue: f64,
    /// `dP/dN`
    pub price_slope: f64,
    /// `dI/dN`
    pub revenue_slope: f64,
    /// `d²I/dN²`
    pub revenue_curvature: f64,
}

impl CurvePoint {
    /// Constant-price point: revenue linear in `n`, all derivatives zero.
    pub(crate) fn flat(n: f64, price: f64) -> Self {
        Self {
            n,
            price,
            revenue: price * n,
            price_slope: 0.0,
            revenue_slope: 0.0,
            revenue_curvature: 0.0,
        }
    }
}

/// Ordered curve over a population domain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSample {
    /// Model variant sampled
    pub model: ModelKind,
    /// Points in domain order
    pub points: Vec<CurvePoint>,
    /// Set when the whole curve was replaced by the degenerate fallback
    pub degradation: Option<Degradation>,
}

impl CurveSample {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the sample has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the curve is the degenerate fallback.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    /// Sampled populations.
    pub fn populations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.n).collect()
    }

    /// Sampled prices.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Sampled revenues.
    pub fn revenues(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue).collect()
    }

    /// Sampled revenue slopes.
    pub fn revenue_slopes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue_slope).collect()
    }

    /// Sampled revenue curvatures.
    pub fn revenue_curvatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue_curvature).collect()
    }
}
