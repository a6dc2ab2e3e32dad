//! Configuration - CSV reader options and log level.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed `IRIS_PIPELINE_` with `__` between section
//! and key (e.g. `IRIS_PIPELINE_CSV__SEPARATOR=";"`).

use crate::data::CsvOptions;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const ENV_PREFIX: &str = "IRIS_PIPELINE_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),
    #[error("csv.separator must be a single ASCII character, got {0:?}")]
    InvalidSeparator(String),
    #[error("csv.infer_schema_length must be greater than zero")]
    ZeroInferLength,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct PipelineConfig {
    #[serde(default)]
    pub csv: CsvConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CsvConfig {
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Rows scanned for type inference. Unset scans the whole file.
    #[serde(default)]
    pub infer_schema_length: Option<usize>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            has_header: default_has_header(),
            separator: default_separator(),
            infer_schema_length: None,
        }
    }
}

fn default_has_header() -> bool {
    true
}

fn default_separator() -> String {
    ",".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PipelineConfig {
    /// Load configuration from defaults, an optional file and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(PipelineConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::from_figment(&figment)
    }

    /// Extract and validate a configuration from an already-built figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: PipelineConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.separator_byte()?;
        if self.csv.infer_schema_length == Some(0) {
            return Err(ConfigError::ZeroInferLength);
        }
        Ok(())
    }

    fn separator_byte(&self) -> Result<u8, ConfigError> {
        match self.csv.separator.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ConfigError::InvalidSeparator(self.csv.separator.clone())),
        }
    }

    /// Reader options for [`crate::data::DataLoader`].
    pub fn csv_options(&self) -> Result<CsvOptions, ConfigError> {
        Ok(CsvOptions {
            has_header: self.csv.has_header,
            separator: self.separator_byte()?,
            infer_schema_length: self.csv.infer_schema_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<PipelineConfig, ConfigError> {
        let figment =
            Figment::from(Serialized::defaults(PipelineConfig::default())).merge(Toml::string(toml));
        PipelineConfig::from_figment(&figment)
    }

    #[test]
    fn defaults_match_reader_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.csv_options().unwrap(), CsvOptions::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn toml_overrides_csv_section() {
        let config = from_toml(
            r#"
            [csv]
            separator = ";"
            has_header = false
            infer_schema_length = 100

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        let options = config.csv_options().unwrap();
        assert_eq!(options.separator, b';');
        assert!(!options.has_header);
        assert_eq!(options.infer_schema_length, Some(100));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn multi_character_separator_is_rejected() {
        let err = from_toml("[csv]\nseparator = \"::\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeparator(ref s) if s == "::"));
    }

    #[test]
    fn non_ascii_separator_is_rejected() {
        let err = from_toml("[csv]\nseparator = \"é\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeparator(_)));
    }

    #[test]
    fn zero_infer_length_is_rejected() {
        let err = from_toml("[csv]\ninfer_schema_length = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInferLength));
    }

    #[test]
    fn missing_config_file_is_a_load_error() {
        let err = PipelineConfig::load(Some(Path::new("/nonexistent/pipeline.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn env_overrides_toml_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pipeline.toml");
        std::fs::write(
            &path,
            "[csv]\nseparator = \"|\"\nhas_header = false\n\n[log]\nlevel = \"warn\"\n",
        )
        .unwrap();

        std::env::set_var("IRIS_PIPELINE_CSV__SEPARATOR", ";");
        std::env::set_var("IRIS_PIPELINE_LOG__LEVEL", "debug");
        let overridden = PipelineConfig::load(Some(path.as_path()));

        std::env::set_var("IRIS_PIPELINE_CSV__SEPARATOR", "::");
        let rejected = PipelineConfig::load(Some(path.as_path()));

        std::env::remove_var("IRIS_PIPELINE_CSV__SEPARATOR");
        std::env::remove_var("IRIS_PIPELINE_LOG__LEVEL");

        let config = overridden.unwrap();
        assert_eq!(config.csv.separator, ";");
        assert!(!config.csv.has_header);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.csv_options().unwrap().separator, b';');

        assert!(matches!(
            rejected.unwrap_err(),
            ConfigError::InvalidSeparator(ref s) if s == "::"
        ));
    }
}
