//! Structured logging setup
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go. Events are written to stderr so reports on stdout stay clean.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::logging::{DEFAULT_DIRECTIVE, ENV_VAR, VERBOSE_DIRECTIVE};
use crate::error::NetworkError;

/// Pick the filter directive for the given flags
///
/// An explicit level wins over `--verbose`. A bare level such as `info` is
/// scoped to this crate; anything containing `=` is used verbatim.
pub fn directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("health_network={level}"),
        (true, None) => VERBOSE_DIRECTIVE.to_string(),
        (false, None) => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` and then `HEALTH_NETWORK_LOG` override the flags when set.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), NetworkError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(ENV_VAR))
        .or_else(|_| EnvFilter::try_new(directive(verbose, log_level)))
        .map_err(|err| NetworkError::ConfigurationError {
            message: format!("invalid log filter: {err}"),
        })?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|err| NetworkError::ConfigurationError {
        message: format!("failed to install log subscriber: {err}"),
    })
}
