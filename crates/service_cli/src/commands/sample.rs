//! Sample command implementation
//!
//! Samples the selected model over a population domain and prints the curve
//! as a table, JSON or CSV.

use std::io::{self, Write};

use pricer_models::engine::{CurveDomain, PricingEngine};
use tracing::{info, warn};

use super::Scenario;
use crate::config::CliConfig;
use crate::output::{self, OutputFormat};
use crate::Result;

/// Domain overrides from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainArgs {
    /// First sampled population
    pub low: Option<f64>,
    /// Last sampled population
    pub high: Option<f64>,
    /// Number of samples
    pub count: Option<usize>,
}

impl DomainArgs {
    fn resolve(&self, config: &CliConfig) -> CurveDomain {
        CurveDomain::new(
            self.low.unwrap_or(config.domain.low),
            self.high.unwrap_or(config.domain.high),
            self.count.unwrap_or(config.domain.count),
        )
    }
}

/// Run the sample command
pub fn run(
    config: &CliConfig,
    model: Option<&str>,
    domain: DomainArgs,
    assignments: &[String],
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(config, model, domain, assignments, format, &mut out)
}

fn execute<W: Write>(
    config: &CliConfig,
    model: Option<&str>,
    domain: DomainArgs,
    assignments: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    config.validate()?;
    let scenario = Scenario::resolve(config, model, None, assignments)?;
    let engine = PricingEngine::new(config.engine_config())?;
    let domain = domain.resolve(config);

    info!(
        "Sampling {:?} over [{}, {}] with {} points",
        scenario.params, domain.low, domain.high, domain.count
    );
    let sample = engine.sample_curve(&scenario.params, domain);
    if sample.is_degraded() {
        warn!("Sample is degenerate; see the note in the output");
    }

    output::write_sample(out, format, &scenario.params, &sample)
}
