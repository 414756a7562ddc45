use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::graph::FacilityId;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(health_network::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum NetworkError {
    #[error("No facility with ID {id} exists")]
    #[diagnostic(
        code(health_network::not_found),
        help("List the known facilities with `health-network facility list`")
    )]
    NotFound { id: FacilityId },

    #[error("No connection from {from} to {to} exists")]
    #[diagnostic(
        code(health_network::connection_not_found),
        help("List the known connections with `health-network connection list`")
    )]
    ConnectionNotFound { from: FacilityId, to: FacilityId },

    #[error("Invalid operation: {message}")]
    #[diagnostic(
        code(health_network::invalid_operation),
        help("The network was left unchanged")
    )]
    InvalidOperation { message: String },

    #[error("No path exists from facility {from} to {to}")]
    #[diagnostic(
        code(health_network::unreachable),
        help("Connections are directed; check the ones leaving the origin facility")
    )]
    Unreachable { from: FacilityId, to: FacilityId },

    #[error("No facility with capacity >= {min_capacity} is reachable")]
    #[diagnostic(
        code(health_network::no_match),
        help("Lower the capacity threshold or add connections towards larger facilities")
    )]
    NoMatch { min_capacity: u32 },

    #[error("Invalid record: {message}")]
    #[diagnostic(
        code(health_network::invalid_record),
        help("Check the field values of the facility or connection")
    )]
    InvalidRecord { message: String },

    #[error("Failed to read dataset '{path}'")]
    #[diagnostic(
        code(health_network::dataset_read_error),
        help("Check that the file is a comma-separated dataset with a header row")
    )]
    DatasetReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("CSV error")]
    #[diagnostic(
        code(health_network::csv_error),
        help("Check file permissions and the dataset contents")
    )]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(health_network::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(health_network::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(health_network::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(health_network::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(health_network::graph_error),
        help("This is an internal error in the network store - please report it")
    )]
    GraphError { message: String },
}

impl NetworkError {
    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}
