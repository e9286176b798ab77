//! pricecurve - Command Line Operations for Participation Price Models
//!
//! This is the operational entry point for the price model engine.
//!
//! # Commands
//!
//! - `pricecurve evaluate` - Evaluate a model at one population
//! - `pricecurve sample` - Sample a model over a population domain
//! - `pricecurve ranges` - List parameter ranges and defaults
//! - `pricecurve check` - Validate configuration
//!
//! # Architecture
//!
//! As part of the service layer, this crate wires configuration, the
//! `pricer_models` engine and output rendering into a command-line interface.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::sample::DomainArgs;
use config::{CliConfig, DEFAULT_CONFIG_FILE};

/// Participation price model explorer
#[derive(Parser)]
#[command(name = "pricecurve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate price, revenue, derivatives and conditions at one population
    Evaluate {
        /// Model variant (hyperbolic, hybrid)
        #[arg(short, long)]
        model: Option<String>,

        /// Population to evaluate at
        #[arg(short, long)]
        n: Option<f64>,

        /// Parameter assignment, e.g. K=120 (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample the price and revenue curves over a population domain
    Sample {
        /// Model variant (hyperbolic, hybrid)
        #[arg(short, long)]
        model: Option<String>,

        /// First sampled population
        #[arg(long)]
        low: Option<f64>,

        /// Last sampled population
        #[arg(long)]
        high: Option<f64>,

        /// Number of samples
        #[arg(long)]
        count: Option<usize>,

        /// Parameter assignment, e.g. K=120 (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List parameter identifiers, ranges and defaults
    Ranges {
        /// Model variant (hyperbolic, hybrid); all when omitted
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Check configuration and engine settings
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config_path = Path::new(&cli.config);
    let load_config = || -> Result<CliConfig> {
        let config = CliConfig::load_or_default(config_path)?.with_env_override();
        debug!("Configuration: {:?}", config);
        Ok(config)
    };

    match cli.command {
        Commands::Evaluate {
            model,
            n,
            set,
            format,
        } => commands::evaluate::run(&load_config()?, model.as_deref(), n, &set, &format),
        Commands::Sample {
            model,
            low,
            high,
            count,
            set,
            format,
        } => commands::sample::run(
            &load_config()?,
            model.as_deref(),
            DomainArgs { low, high, count },
            &set,
            &format,
        ),
        Commands::Ranges { model } => commands::ranges::run(model.as_deref()),
        Commands::Check => commands::check::run(config_path),
    }
}
