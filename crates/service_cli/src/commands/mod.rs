//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Parameter resolution
//! shared by `evaluate` and `sample` lives here: configuration values first,
//! then `--model`, then `--set NAME=VALUE` assignments clamped to the
//! variant's ranges.

pub mod check;
pub mod evaluate;
pub mod ranges;
pub mod sample;

use pricer_models::models::{
    ModelKind, ModelParams, ParamId, ParamRange, ParameterError, PriceFunction,
};
use tracing::warn;

use crate::config::CliConfig;
use crate::Result;

/// Parameter set and evaluation point after every override is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Model parameters
    pub params: ModelParams,
    /// Evaluation point
    pub n: f64,
}

impl Scenario {
    /// Resolve a scenario from configuration and command-line overrides.
    pub fn resolve(
        config: &CliConfig,
        model: Option<&str>,
        n: Option<f64>,
        assignments: &[String],
    ) -> Result<Self> {
        let kind = match model {
            Some(name) => name.parse::<ModelKind>()?,
            None => config.model_kind()?,
        };
        let mut scenario = Self {
            params: config.params_for(kind)?,
            n: config.evaluation.n,
        };
        if let Some(n) = n {
            scenario.n = snap_with_warning(kind.evaluation_range(), n);
        }
        for assignment in assignments {
            scenario.apply(assignment)?;
        }
        Ok(scenario)
    }

    /// Apply one `NAME=VALUE` assignment. `N` sets the evaluation point.
    pub fn apply(&mut self, assignment: &str) -> Result<()> {
        let (id, value) = parse_assignment(assignment)?;
        let kind = self.params.kind();
        if id == ParamId::N {
            self.n = snap_with_warning(kind.evaluation_range(), value);
            return Ok(());
        }
        let range = kind
            .range(id)
            .ok_or(ParameterError::NotInModel { parameter: id, model: kind })?;
        self.params.set(id, snap_with_warning(range, value))?;
        Ok(())
    }
}

fn parse_assignment(text: &str) -> std::result::Result<(ParamId, f64), ParameterError> {
    let malformed = || ParameterError::MalformedAssignment(text.to_string());
    let (name, raw) = text.split_once('=').ok_or_else(malformed)?;
    let id: ParamId = name.parse()?;
    let value: f64 = raw.trim().parse().map_err(|_| malformed())?;
    if !value.is_finite() {
        return Err(ParameterError::NonFiniteValue {
            parameter: id,
            value,
        });
    }
    Ok((id, value))
}

/// Clamp and snap `value` the way the input controls do, warning when it changes.
fn snap_with_warning(range: &ParamRange, value: f64) -> f64 {
    let snapped = range.snap(value);
    if snapped != value {
        warn!(
            "{} = {} adjusted to {} (range [{}, {}], step {})",
            range.id, value, snapped, range.min, range.max, range.step
        );
    }
    snapped
}
