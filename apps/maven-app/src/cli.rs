//! # CLI Module
//!
//! Command-line surface of the maven-app binary.

use clap::{Parser, ValueEnum};
use greeter_core::Greeter;
use thiserror::Error;
use tracing::Dispatch;

use crate::logging::DEFAULT_FILTER;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to render greeting: {0}")]
    Render(#[from] serde_json::Error),
}

/// How the greeting is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare greeting line.
    #[default]
    Text,
    /// `{"message": "..."}`
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "maven-app", version, about = "Print the maven-app greeting")]
pub struct Cli {
    /// Log filter directives, e.g. "info" or "warn,greeter_core=debug".
    #[arg(long, env = "MAVEN_APP_LOG", default_value = DEFAULT_FILTER)]
    pub log_filter: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Construct one greeter against `sink` and render its message.
pub fn cmd_greet(sink: &Dispatch, format: OutputFormat) -> Result<String, AppError> {
    let greeter = Greeter::new(sink);
    let rendered = match format {
        OutputFormat::Text => greeter.message().to_owned(),
        OutputFormat::Json => serde_json::to_string(&greeter)?,
    };
    Ok(rendered)
}
