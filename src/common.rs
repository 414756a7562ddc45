//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::NetworkSettings;
use crate::error::NetworkError;

/// Dataset location arguments shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Facility dataset (CSV with an ID,Name,District,Latitude,Longitude,Capacity header)
    #[arg(long, global = true, value_name = "PATH", env = "HEALTH_NETWORK_FACILITIES")]
    pub facilities: Option<PathBuf>,

    /// Connection dataset (CSV with a FromID,ToID,DistanceKM,TimeMinutes,Description header)
    #[arg(long, global = true, value_name = "PATH", env = "HEALTH_NETWORK_CONNECTIONS")]
    pub connections: Option<PathBuf>,

    /// Settings file (defaults to ./health-network.toml when present)
    #[arg(long, global = true, value_name = "PATH", env = "HEALTH_NETWORK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "HEALTH_NETWORK_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl DatasetArgs {
    /// Load the settings file and apply the command line overrides on top
    pub fn settings(&self) -> Result<NetworkSettings, NetworkError> {
        let mut settings = NetworkSettings::load(self.config.as_deref())?;

        if let Some(path) = &self.facilities {
            settings.datasets.facilities = path.clone();
        }
        if let Some(path) = &self.connections {
            settings.datasets.connections = path.clone();
        }

        Ok(settings)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::NetworkError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::NetworkError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::NetworkError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro generating a builder whose fields are all required
///
/// Each entry names the setter and the field it fills. `build()` fails with a
/// [`NetworkError::ConfigurationError`] naming the first missing field.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident: $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::NetworkError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::NetworkError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
