//! Parameter identifiers, model kinds and validity ranges.
//!
//! Every model variant exposes a fixed set of named parameters. Each
//! parameter carries an inclusive validity range, an input step and a
//! default value, used by callers to clamp and snap user input. The engine
//! itself accepts any `f64` and guards degenerate values on its own.

use std::fmt;
use std::str::FromStr;

use super::error::ParameterError;

/// Identifier of a model parameter (or of the evaluation point `N`).
///
/// The textual form (`as_str`) is the identifier used in formulas,
/// configuration files and `NAME=VALUE` assignments.
///
/// # Examples
/// ```
/// use pricer_models::models::ParamId;
///
/// let id: ParamId = "P_min".parse().unwrap();
/// assert_eq!(id, ParamId::PMin);
/// assert_eq!(id.to_string(), "P_min");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamId {
    /// Price floor `P_min`
    #[cfg_attr(feature = "serde", serde(rename = "P_min"))]
    PMin,
    /// Amplitude of the primary decay term `K`
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    K,
    /// Reference population of the primary decay term `N0`
    #[cfg_attr(feature = "serde", serde(rename = "N0"))]
    N0,
    /// Exponent of the primary decay term `q`
    #[cfg_attr(feature = "serde", serde(rename = "q"))]
    Q,
    /// Amplitude of the secondary hyperbolic term `C`
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    C,
    /// Exponent of the secondary hyperbolic term `r`
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    R,
    /// Reference population of the secondary hyperbolic term `N1`
    #[cfg_attr(feature = "serde", serde(rename = "N1"))]
    N1,
    /// Evaluation point: participant count `N`
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    N,
}

impl ParamId {
    /// All identifiers in display order.
    pub const ALL: [ParamId; 8] = [
        ParamId::PMin,
        ParamId::K,
        ParamId::N0,
        ParamId::Q,
        ParamId::C,
        ParamId::R,
        ParamId::N1,
        ParamId::N,
    ];

    /// Identifier as written in formulas.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamId::PMin => "P_min",
            ParamId::K => "K",
            ParamId::N0 => "N0",
            ParamId::Q => "q",
            ParamId::C => "C",
            ParamId::R => "r",
            ParamId::N1 => "N1",
            ParamId::N => "N",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ParamId::PMin => "Minimum price",
            ParamId::K => "Price range",
            ParamId::N0 => "Reference population",
            ParamId::Q => "Decay exponent",
            ParamId::C => "Tail price range",
            ParamId::R => "Tail decay exponent",
            ParamId::N1 => "Tail reference population",
            ParamId::N => "Participants",
        }
    }

    /// Whether this identifier names a reference population (a divisor that
    /// must never be zero).
    pub fn is_reference_population(&self) -> bool {
        matches!(self, ParamId::N0 | ParamId::N1)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ParamId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| ParameterError::UnknownParameter(trimmed.to_string()))
    }
}

/// Sign requirement placed on the revenue curvature by a model variant.
///
/// The hyperbolic model targets accelerating revenue growth (convex from
/// below), the hybrid model targets sustained but slowing growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConvexityPolicy {
    /// Requires `revenue'' > 0`
    Accelerating,
    /// Requires `revenue'' < 0`
    Decelerating,
}

impl ConvexityPolicy {
    /// Check a revenue curvature against the policy.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::ConvexityPolicy;
    ///
    /// assert!(ConvexityPolicy::Accelerating.is_satisfied(0.5));
    /// assert!(ConvexityPolicy::Decelerating.is_satisfied(-0.5));
    /// assert!(!ConvexityPolicy::Decelerating.is_satisfied(0.0));
    /// ```
    #[inline]
    pub fn is_satisfied(&self, revenue_curvature: f64) -> bool {
        match self {
            ConvexityPolicy::Accelerating => revenue_curvature > 0.0,
            ConvexityPolicy::Decelerating => revenue_curvature < 0.0,
        }
    }

    /// Short description of the growth regime the policy asks for.
    pub fn description(&self) -> &'static str {
        match self {
            ConvexityPolicy::Accelerating => "revenue growth accelerates (convex)",
            ConvexityPolicy::Decelerating => "revenue growth slows but continues (concave)",
        }
    }
}

/// Inclusive validity range, input step and default of one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParamRange {
    /// Parameter identifier
    pub id: ParamId,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Input granularity
    pub step: f64,
    /// Default value
    pub default: f64,
}

impl ParamRange {
    /// Create a range entry.
    pub const fn new(id: ParamId, min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            id,
            min,
            max,
            step,
            default,
        }
    }

    /// Label in the form `Description (ID)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.id.description(), self.id)
    }

    /// Whether `value` lies inside the inclusive range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range. Non-finite input maps to the default.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Snap `value` to the nearest step on the grid anchored at `min`, then clamp.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::{ModelKind, ParamId};
    ///
    /// let n0 = ModelKind::Hyperbolic.range(ParamId::N0).unwrap();
    /// assert_eq!(n0.snap(20.4), 20.0);
    /// assert_eq!(n0.snap(0.0), 1.0);
    /// ```
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Values already on the grid stay bit-identical.
        if (snapped - value).abs() <= self.step * 1e-9 {
            return self.clamp(value);
        }
        self.clamp(snapped)
    }

    /// Whether the range only admits whole numbers.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.step.fract() == 0.0 && self.min.fract() == 0.0
    }
}

const HYPERBOLIC_RANGES: [ParamRange; 4] = [
    ParamRange::new(ParamId::PMin, 10.0, 500.0, 1.0, 50.0),
    ParamRange::new(ParamId::K, 50.0, 500.0, 0.1, 80.0),
    ParamRange::new(ParamId::N0, 1.0, 200.0, 1.0, 20.0),
    ParamRange::new(ParamId::Q, 0.5, 5.0, 0.1, 2.0),
];

const HYBRID_RANGES: [ParamRange; 7] = [
    ParamRange::new(ParamId::PMin, 0.0, 500.0, 1.0, 20.0),
    ParamRange::new(ParamId::K, 0.0, 500.0, 1.0, 100.0),
    ParamRange::new(ParamId::Q, 0.01, 2.0, 0.01, 0.2),
    ParamRange::new(ParamId::N0, 1.0, 200.0, 1.0, 15.0),
    ParamRange::new(ParamId::C, 0.0, 500.0, 1.0, 50.0),
    ParamRange::new(ParamId::R, 0.1, 5.0, 0.1, 1.5),
    ParamRange::new(ParamId::N1, 1.0, 500.0, 1.0, 100.0),
];

const EVALUATION_RANGE: ParamRange = ParamRange::new(ParamId::N, 1.0, 200.0, 1.0, 50.0);

/// Model variant selector.
///
/// # Examples
/// ```
/// use pricer_models::models::{ConvexityPolicy, ModelKind};
///
/// let kind: ModelKind = "hybrid".parse().unwrap();
/// assert_eq!(kind.convexity_policy(), ConvexityPolicy::Decelerating);
/// assert_eq!(kind.parameter_ranges().len(), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ModelKind {
    /// `P(N) = P_min + K / (1 + N/N0)^q`
    #[default]
    Hyperbolic,
    /// `P(N) = P_min + K·exp(-q·N/N0) + C / (1 + (N/N1)^r)`
    Hybrid,
}

impl ModelKind {
    /// All variants.
    pub const ALL: [ModelKind; 2] = [ModelKind::Hyperbolic, ModelKind::Hybrid];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Hyperbolic => "hyperbolic",
            ModelKind::Hybrid => "hybrid",
        }
    }

    /// Closed-form price formula.
    pub fn formula(&self) -> &'static str {
        match self {
            ModelKind::Hyperbolic => "P(N) = P_min + K / (1 + N/N0)^q",
            ModelKind::Hybrid => "P(N) = P_min + K*exp(-q*N/N0) + C / (1 + (N/N1)^r)",
        }
    }

    /// Ranges of the variant's parameters, in display order.
    pub fn parameter_ranges(&self) -> &'static [ParamRange] {
        match self {
            ModelKind::Hyperbolic => &HYPERBOLIC_RANGES,
            ModelKind::Hybrid => &HYBRID_RANGES,
        }
    }

    /// Range of one parameter, or `None` if it is not part of the variant.
    pub fn range(&self, id: ParamId) -> Option<&'static ParamRange> {
        self.parameter_ranges().iter().find(|range| range.id == id)
    }

    /// Range of the evaluation point `N`.
    pub fn evaluation_range(&self) -> &'static ParamRange {
        &EVALUATION_RANGE
    }

    /// Whether `id` is one of the variant's parameters.
    pub fn has_parameter(&self, id: ParamId) -> bool {
        self.range(id).is_some()
    }

    /// Revenue curvature requirement of the variant.
    pub fn convexity_policy(&self) -> ConvexityPolicy {
        match self {
            ModelKind::Hyperbolic => ConvexityPolicy::Accelerating,
            ModelKind::Hybrid => ConvexityPolicy::Decelerating,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hyperbolic" | "basic" => Ok(ModelKind::Hyperbolic),
            "hybrid" | "exp-hyperbolic" | "exponential-hyperbolic" => Ok(ModelKind::Hybrid),
            other => Err(ParameterError::UnknownModel(other.to_string())),
        }
    }
}
