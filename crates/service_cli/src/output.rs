//! Output rendering for CLI commands.
//!
//! Every renderer writes to a caller-supplied sink so commands print to
//! stdout while tests capture into a buffer.

use std::io::Write;
use std::str::FromStr;

use pricer_models::engine::{ConditionFlags, CurveSample, EvaluationResult};
use pricer_models::models::{ModelKind, ModelParams, ParamRange, PriceFunction};
use serde::Serialize;

use crate::{CliError, Result};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            ))),
        }
    }
}

#[derive(Serialize)]
struct EvaluationReport<'a> {
    parameters: &'a ModelParams,
    result: &'a EvaluationResult,
}

#[derive(Serialize)]
struct SampleReport<'a> {
    parameters: &'a ModelParams,
    sample: &'a CurveSample,
}

const MARK_OK: &str = "✔";
const MARK_FAIL: &str = "✘";

fn mark(ok: bool) -> &'static str {
    if ok {
        MARK_OK
    } else {
        MARK_FAIL
    }
}

fn write_header<W: Write>(out: &mut W, params: &ModelParams) -> Result<()> {
    let kind = params.kind();
    writeln!(out, "Model: {}    P(N) = {}", kind, kind.formula())?;
    for (id, value) in params.entries() {
        writeln!(out, "  {:<6} {:>10.2}", id.as_str(), value)?;
    }
    Ok(())
}

fn write_conditions<W: Write>(
    out: &mut W,
    kind: ModelKind,
    conditions: &ConditionFlags,
) -> Result<()> {
    writeln!(out, "Conditions:")?;
    writeln!(
        out,
        "  {} Price decreasing: price per participant falls as N grows",
        mark(conditions.price_decreasing)
    )?;
    writeln!(
        out,
        "  {} Revenue increasing: total revenue rises as N grows",
        mark(conditions.revenue_increasing)
    )?;
    writeln!(
        out,
        "  {} Revenue convexity: {}",
        mark(conditions.revenue_convexity),
        kind.convexity_policy().description()
    )?;
    Ok(())
}

/// Render a point evaluation.
pub fn write_evaluation<W: Write>(
    out: &mut W,
    format: OutputFormat,
    params: &ModelParams,
    result: &EvaluationResult,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &EvaluationReport { parameters: params, result })?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            write_header(out, params)?;
            writeln!(out)?;
            writeln!(out, "┌──────────────────────┬──────────────────┐")?;
            writeln!(out, "│ {:<20} │ {:>16} │", "Participants (N)", format!("{:.2}", result.n))?;
            writeln!(out, "├──────────────────────┼──────────────────┤")?;
            let rows = [
                ("Price per person", format!("{:.2}", result.price)),
                ("Total revenue", format!("{:.2}", result.revenue)),
                ("dP/dN", format!("{:.4}", result.price_slope)),
                ("dI/dN", format!("{:.4}", result.revenue_slope)),
                ("d²I/dN²", format!("{:.4}", result.revenue_curvature)),
            ];
            for (label, value) in rows {
                writeln!(out, "│ {:<20} │ {:>16} │", label, value)?;
            }
            writeln!(out, "└──────────────────────┴──────────────────┘")?;
            write_conditions(out, result.model, &result.conditions)?;
            if let Some(degradation) = result.degradation {
                writeln!(out, "Note: {}", degradation)?;
            }
        }
        OutputFormat::Csv => {
            return Err(CliError::InvalidArgument(
                "csv output is only available for sample".to_string(),
            ));
        }
    }
    Ok(())
}

/// Render a sampled curve.
pub fn write_sample<W: Write>(
    out: &mut W,
    format: OutputFormat,
    params: &ModelParams,
    sample: &CurveSample,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &SampleReport { parameters: params, sample })?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for point in &sample.points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            write_header(out, params)?;
            writeln!(out)?;
            writeln!(
                out,
                "{:>10} {:>12} {:>14} {:>12} {:>12}",
                "N", "Price", "Revenue", "dI/dN", "d²I/dN²"
            )?;
            for point in &sample.points {
                writeln!(
                    out,
                    "{:>10.2} {:>12.2} {:>14.2} {:>12.2} {:>12.2}",
                    point.n, point.price, point.revenue, point.revenue_slope, point.revenue_curvature
                )?;
            }
            writeln!(out, "{} points", sample.len())?;
            if let Some(degradation) = sample.degradation {
                writeln!(out, "Note: {}", degradation)?;
            }
        }
    }
    Ok(())
}

fn write_range_row<W: Write>(out: &mut W, range: &ParamRange) -> Result<()> {
    writeln!(
        out,
        "  {:<6} {:<40} {:>8} {:>8} {:>6} {:>8}",
        range.id.as_str(),
        range.label(),
        range.min,
        range.max,
        range.step,
        range.default
    )?;
    Ok(())
}

/// Render the parameter ranges of a model variant.
pub fn write_ranges<W: Write>(out: &mut W, kind: ModelKind) -> Result<()> {
    writeln!(out, "Model: {}    P(N) = {}", kind, kind.formula())?;
    writeln!(
        out,
        "  {:<6} {:<40} {:>8} {:>8} {:>6} {:>8}",
        "Name", "Description", "Min", "Max", "Step", "Default"
    )?;
    for range in kind.parameter_ranges() {
        write_range_row(out, range)?;
    }
    write_range_row(out, kind.evaluation_range())?;
    Ok(())
}
