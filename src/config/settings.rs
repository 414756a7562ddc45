//! Settings file support
//!
//! ```toml
//! [datasets]
//! facilities = "data/health_centers.csv"
//! connections = "data/connections.csv"
//!
//! [export]
//! relationships = "out/relationship_table.csv"
//! ```

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::constants::datasets::{DEFAULT_RELATIONSHIPS, SETTINGS_FILE};
use crate::dataset::DatasetPaths;
use crate::error::{NetworkError, TomlParseError};

/// Values read from `health-network.toml`, falling back to built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkSettings {
    pub datasets: DatasetPaths,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub relationships: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            relationships: PathBuf::from(DEFAULT_RELATIONSHIPS),
        }
    }
}

impl NetworkSettings {
    /// Load settings from `path`, or from the working directory's settings
    /// file when no path is given
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, NetworkError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(SETTINGS_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, NetworkError> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parse settings text; `name` labels diagnostics
    pub fn parse(content: &str, name: &str) -> Result<Self, NetworkError> {
        toml::from_str(content).map_err(|err| {
            let span = err
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            NetworkError::TomlParseError(Box::new(TomlParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: err,
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = NetworkSettings::parse("", "empty.toml").unwrap();

        assert_eq!(settings, NetworkSettings::default());
        assert_eq!(
            settings.datasets.facilities,
            PathBuf::from("health_centers.csv")
        );
        assert_eq!(
            settings.export.relationships,
            PathBuf::from("relationship_table.csv")
        );
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let settings = NetworkSettings::parse(
            "[datasets]\nconnections = \"links.csv\"\n",
            "partial.toml",
        )
        .unwrap();

        assert_eq!(settings.datasets.connections, PathBuf::from("links.csv"));
        assert_eq!(
            settings.datasets.facilities,
            PathBuf::from("health_centers.csv")
        );
    }

    #[test]
    fn test_syntax_error_carries_span() {
        let err = NetworkSettings::parse("[datasets\nfacilities = 1", "broken.toml").unwrap_err();

        match err {
            NetworkError::TomlParseError(parse) => {
                assert_eq!(parse.file, "broken.toml");
                assert!(parse.span.is_some());
            }
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = NetworkSettings::parse("[datasets]\nhospitals = \"x.csv\"\n", "typo.toml");

        assert!(err.is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = NetworkSettings::load(Some(Path::new("/nonexistent/settings.toml"))).unwrap_err();

        assert!(matches!(err, NetworkError::Io(_)));
    }
}
