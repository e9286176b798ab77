//! Error types for the pricecurve CLI.

use pricer_models::engine::EngineConfigError;
use pricer_models::models::ParameterError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine configuration rejected
    #[error("Engine error: {0}")]
    Engine(#[from] EngineConfigError),

    /// Bad parameter name, value or assignment
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Rendering or writing output failed
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
