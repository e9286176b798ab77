//! CLI configuration management.
//!
//! Handles loading of `pricecurve.toml` with environment variable override
//! support. A missing file is not an error: every section has defaults.
//!
//! ```toml
//! [model]
//! kind = "hybrid"
//!
//! [parameters]
//! K = 120
//! N1 = 80
//!
//! [evaluation]
//! n = 60
//!
//! [domain]
//! low = 1
//! high = 200
//! count = 400
//!
//! [engine]
//! step = 1e-5
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use pricer_models::engine::{
    CurveDomain, EngineConfig, DEFAULT_DOMAIN_HIGH, DEFAULT_DOMAIN_LOW, DEFAULT_SAMPLE_COUNT,
};
use pricer_models::models::{ModelKind, ModelParams, ParamId, ParameterError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "pricecurve.toml";

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors, all of them
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// `[model]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelSection {
    /// Model variant name (`hyperbolic` or `hybrid`, aliases accepted)
    pub kind: String,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            kind: ModelKind::default().as_str().to_string(),
        }
    }
}

/// `[evaluation]` section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvaluationSection {
    /// Population at which `evaluate` runs
    pub n: f64,
}

impl Default for EvaluationSection {
    fn default() -> Self {
        Self {
            n: ModelKind::default().evaluation_range().default,
        }
    }
}

/// `[domain]` section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct DomainSection {
    /// First sampled population
    pub low: f64,
    /// Last sampled population
    pub high: f64,
    /// Number of samples
    pub count: usize,
}

impl Default for DomainSection {
    fn default() -> Self {
        Self {
            low: DEFAULT_DOMAIN_LOW,
            high: DEFAULT_DOMAIN_HIGH,
            count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// `[engine]` section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineSection {
    /// Finite-difference step
    pub step: f64,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            step: EngineConfig::default().step,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Model selection
    pub model: ModelSection,
    /// Parameter overrides by identifier (`P_min`, `K`, ...)
    pub parameters: BTreeMap<String, f64>,
    /// Evaluation point
    pub evaluation: EvaluationSection,
    /// Sampling domain
    pub domain: DomainSection,
    /// Engine settings
    pub engine: EngineSection,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(model) = std::env::var("PRICECURVE_MODEL") {
            self.model.kind = model;
        }

        if let Ok(n) = std::env::var("PRICECURVE_N") {
            match n.parse() {
                Ok(n) => self.evaluation.n = n,
                Err(_) => warn!("Ignoring PRICECURVE_N='{}': not a number", n),
            }
        }

        if let Ok(step) = std::env::var("PRICECURVE_STEP") {
            match step.parse() {
                Ok(step) => self.engine.step = step,
                Err(_) => warn!("Ignoring PRICECURVE_STEP='{}': not a number", step),
            }
        }

        self
    }

    /// Selected model variant
    pub fn model_kind(&self) -> Result<ModelKind, ParameterError> {
        self.model.kind.parse()
    }

    /// Engine configuration from the `[engine]` and `[domain]` sections
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_step(self.engine.step)
            .with_domain(CurveDomain::new(
                self.domain.low,
                self.domain.high,
                self.domain.count,
            ))
    }

    /// Parameter set for `kind`: the variant defaults with every configured
    /// value applied. Configured values that `kind` does not have are skipped.
    pub fn params_for(&self, kind: ModelKind) -> Result<ModelParams, ParameterError> {
        let mut params = ModelParams::defaults(kind);
        for (name, &value) in &self.parameters {
            let id: ParamId = name.parse()?;
            if !kind.has_parameter(id) {
                warn!("Configured parameter {} is not part of the {} model, skipped", id, kind);
                continue;
            }
            params.set(id, value)?;
        }
        Ok(params)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let kind = match self.model_kind() {
            Ok(kind) => Some(kind),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };

        for (name, &value) in &self.parameters {
            let id = match name.parse::<ParamId>() {
                Ok(id) => id,
                Err(e) => {
                    errors.push(e.to_string());
                    continue;
                }
            };
            let Some(kind) = kind else { continue };
            match kind.range(id) {
                None => errors.push(
                    ParameterError::NotInModel {
                        parameter: id,
                        model: kind,
                    }
                    .to_string(),
                ),
                Some(range) if !range.contains(value) => errors.push(format!(
                    "{} = {} outside [{}, {}]",
                    id, value, range.min, range.max
                )),
                Some(_) => {}
            }
        }

        if let Some(kind) = kind {
            let range = kind.evaluation_range();
            if !range.contains(self.evaluation.n) {
                errors.push(format!(
                    "evaluation n = {} outside [{}, {}]",
                    self.evaluation.n, range.min, range.max
                ));
            }
        }

        if let Err(e) = self.engine_config().validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
