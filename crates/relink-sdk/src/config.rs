//! Runner configuration
//!
//! Values are layered: defaults, then an optional config file, then
//! environment variables prefixed with `RELINK_` (for example
//! `RELINK_LOG_FILTER=relink_resolver=debug` or
//! `RELINK_SKIP_PARSERS=port_type,service_declaration`). A `.env` file in the
//! working directory is loaded first when present.

use crate::error::{Result, SdkError};
use relink_resolver::ParserKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "RELINK";

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Model snapshot to load when the runner is built from configuration
    pub snapshot_path: Option<PathBuf>,

    /// Where to write the JSON run report, if anywhere
    pub report_path: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,

    /// Parsers left out of the standard plan
    pub skip_parsers: Vec<ParserKind>,

    /// Treat a run with errors as a failed run
    pub fail_on_errors: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            report_path: None,
            log_filter: "info".to_string(),
            skip_parsers: Vec::new(),
            fail_on_errors: false,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a file and the environment
    ///
    /// The file is optional; when it does not exist only defaults and
    /// environment overrides apply. The format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("skip_parsers");

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| SdkError::ConfigError(format!("Failed to read configuration: {}", e)))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| SdkError::ConfigError(format!("Failed to deserialize config: {}", e)))?;

        tracing::debug!(path = %path.as_ref().display(), "loaded runner configuration");
        Ok(loaded)
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn skip_parser(mut self, kind: ParserKind) -> Self {
        if !self.skip_parsers.contains(&kind) {
            self.skip_parsers.push(kind);
        }
        self
    }

    pub fn fail_on_errors(mut self, enabled: bool) -> Self {
        self.fail_on_errors = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_config_default() {
        let config = RunnerConfig::default();

        assert!(config.snapshot_path.is_none());
        assert!(config.report_path.is_none());
        assert_eq!(config.log_filter, "info");
        assert!(config.skip_parsers.is_empty());
        assert!(!config.fail_on_errors);
    }

    #[test]
    fn test_builder_methods() {
        let config = RunnerConfig::default()
            .with_snapshot_path("model.json")
            .with_report_path("report.json")
            .with_log_filter("debug")
            .skip_parser(ParserKind::PortType)
            .skip_parser(ParserKind::PortType)
            .fail_on_errors(true);

        assert_eq!(config.snapshot_path, Some(PathBuf::from("model.json")));
        assert_eq!(config.report_path, Some(PathBuf::from("report.json")));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.skip_parsers, vec![ParserKind::PortType]);
        assert!(config.fail_on_errors);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunnerConfig =
            serde_json::from_str(r#"{"skip_parsers": ["bindings"], "fail_on_errors": true}"#).unwrap();

        assert_eq!(config.skip_parsers, vec![ParserKind::Bindings]);
        assert!(config.fail_on_errors);
        assert_eq!(config.log_filter, "info");
    }
}
