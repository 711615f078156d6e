//! Configuration management for the constructor plugins.
//!
//! protoc hands every plugin a single parameter string, taken from
//! `--<lang>_constructors_out=<parameter>:<out dir>`. The entries are comma
//! separated: bare entries are spec file paths, `key=value` entries are
//! options. A few settings that don't belong on the protoc command line come
//! from the environment instead.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Directory relative spec paths are resolved against.
pub const SPEC_ROOT_VAR: &str = "PROTOC_GEN_CONSTRUCTORS_SPEC_ROOT";

/// tracing filter for the plugin's stderr log.
pub const LOG_VAR: &str = "PROTOC_GEN_CONSTRUCTORS_LOG";

/// Configuration for one plugin invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Spec files to read, already resolved against the spec root
    pub spec_files: Vec<PathBuf>,

    /// Indent width override (default depends on the backend)
    pub indent: Option<usize>,
}

impl Config {
    /// Build the configuration from the plugin parameter and the environment.
    ///
    /// Optional environment variables:
    /// - `PROTOC_GEN_CONSTRUCTORS_SPEC_ROOT`: base directory for relative spec paths
    ///
    /// Recognized parameter options:
    /// - `spec=<path>`: same as a bare path
    /// - `indent=<n>`: indent width of the generated code
    pub fn from_parameter(parameter: &str) -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        // We use dotenvy::dotenv() which doesn't print to stdout
        let _ = dotenvy::dotenv();

        let spec_root = match env::var(SPEC_ROOT_VAR) {
            Ok(root) if root.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: SPEC_ROOT_VAR.to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(root) => Some(PathBuf::from(root)),
            Err(_) => None,
        };

        Self::parse_parameter(parameter, spec_root.as_deref())
    }

    /// Parse the plugin parameter without consulting the environment.
    pub fn parse_parameter(parameter: &str, spec_root: Option<&Path>) -> ConfigResult<Self> {
        let mut config = Config::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let path = match entry.split_once('=') {
                None => entry,
                Some(("spec", path)) => path,
                Some(("indent", width)) => {
                    config.indent = Some(Self::parse_indent(width)?);
                    continue;
                }
                Some((key, _)) => return Err(ConfigError::UnknownOption(key.to_string())),
            };

            config.spec_files.push(match spec_root {
                Some(root) if Path::new(path).is_relative() => root.join(path),
                _ => PathBuf::from(path),
            });
        }

        if config.spec_files.is_empty() {
            return Err(ConfigError::NoSpecFiles);
        }

        Ok(config)
    }

    /// The tracing filter to install, `warn` unless overridden.
    pub fn log_filter() -> String {
        let _ = dotenvy::dotenv();
        env::var(LOG_VAR).unwrap_or_else(|_| "warn".to_string())
    }

    fn parse_indent(width: &str) -> ConfigResult<usize> {
        match width.parse::<usize>() {
            Ok(n) if (1..=16).contains(&n) => Ok(n),
            _ => Err(ConfigError::InvalidValue {
                var: "indent".to_string(),
                reason: format!("Must be a number between 1 and 16, got: {}", width),
            }),
        }
    }
}
