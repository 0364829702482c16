//! # Logging Module
//!
//! Builds the sink handed to `Greeter::new`.
//!
//! The sink is an explicit `Dispatch` rather than the process-wide default,
//! so nothing here calls `set_global_default`.

use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Default filter directive when none is given.
pub const DEFAULT_FILTER: &str = "info";

/// Errors building the logging sink.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: ParseError,
    },
}

/// Build a stderr `fmt` sink filtered by `filter`.
pub fn build_dispatch(filter: &str) -> Result<Dispatch, LoggingError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|source| LoggingError::InvalidFilter {
        directive: filter.to_owned(),
        source,
    })?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    Ok(Dispatch::new(subscriber))
}

/// Best-effort variant of [`build_dispatch`].
///
/// A sink that cannot be built is reported on stderr and replaced by a
/// no-op dispatcher; the caller always gets something to log into.
pub fn dispatch_or_silent(filter: &str) -> Dispatch {
    match build_dispatch(filter) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("warning: {e}; logging disabled");
            Dispatch::none()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
