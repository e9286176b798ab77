//! Configuration for the pricing model engine.

use pricer_core::math::finite_difference::DEFAULT_STEP;
use thiserror::Error;

/// Lower bound of the standard exploration domain.
pub const DEFAULT_DOMAIN_LOW: f64 = 1.0;
/// Upper bound of the standard exploration domain.
pub const DEFAULT_DOMAIN_HIGH: f64 = 200.0;
/// Sample count of the standard exploration domain.
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// Engine configuration error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineConfigError {
    /// Differentiation step is not finite and positive.
    #[error("Invalid configuration: step must be finite and positive, got {0}")]
    InvalidStep(f64),

    /// Sampling domain is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidDomain(String),
}

/// Population domain for curve sampling.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `low` | 1 | First sampled population |
/// | `high` | 200 | Last sampled population |
/// | `count` | 400 | Number of evenly spaced samples |
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveDomain {
    /// First sampled population
    pub low: f64,
    /// Last sampled population
    pub high: f64,
    /// Number of samples
    pub count: usize,
}

impl CurveDomain {
    /// Creates a domain.
    pub fn new(low: f64, high: f64, count: usize) -> Self {
        Self { low, high, count }
    }

    /// Validates the domain for use as a configured default.
    ///
    /// Sampling itself tolerates any domain; this check is for
    /// configuration sources that should be rejected early.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(EngineConfigError::InvalidDomain(format!(
                "bounds must be finite, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low >= self.high {
            return Err(EngineConfigError::InvalidDomain(format!(
                "low ({}) must be below high ({})",
                self.low, self.high
            )));
        }
        if self.count < 2 {
            return Err(EngineConfigError::InvalidDomain(format!(
                "count must be at least 2, got {}",
                self.count
            )));
        }
        Ok(())
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        Self {
            low: DEFAULT_DOMAIN_LOW,
            high: DEFAULT_DOMAIN_HIGH,
            count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Configuration for the pricing model engine.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `step` | 1e-5 | Central finite-difference step |
/// | `domain` | [1, 200] × 400 | Default sampling domain |
///
/// # Examples
///
/// ```
/// use pricer_models::engine::{CurveDomain, EngineConfig};
///
/// let config = EngineConfig::default();
/// assert!((config.step - 1e-5).abs() < 1e-20);
///
/// let custom = EngineConfig::new()
///     .with_step(1e-4)
///     .with_domain(CurveDomain::new(0.5, 50.0, 100));
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Finite-difference step (default: 1e-5).
    pub step: f64,

    /// Default sampling domain.
    pub domain: CurveDomain,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            domain: CurveDomain::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the finite-difference step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the default sampling domain.
    pub fn with_domain(mut self, domain: CurveDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(EngineConfigError::InvalidStep(self.step));
        }
        self.domain.validate()
    }
}
