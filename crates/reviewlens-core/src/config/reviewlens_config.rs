//! Top-level reviewlens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    defaults, ModelConfig, ObservabilityConfig, ScraperConfig, ServerConfig, SpellingProvider,
    TextConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`REVIEWLENS_*`, plus `PORT`)
/// 3. Config file (explicit path, else `reviewlens.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewLensConfig {
    pub text: TextConfig,
    pub model: ModelConfig,
    pub scraper: ScraperConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub embeddings_path: Option<String>,
    pub classifier_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl ReviewLensConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `reviewlens.toml` in the
    /// working directory is used when present, otherwise compiled defaults.
    pub fn load(
        path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReviewLensConfig) -> Result<(), ConfigError> {
        if config.text.max_review_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "text.max_review_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.model.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "model.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.model.window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "model.window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(config.model.svm_lambda > 0.0 && config.model.svm_lambda.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: "model.svm_lambda".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if config.server.max_reviews == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "server.max_reviews".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scraper.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "scraper.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, selector) in [
            ("scraper.review_selector", &config.scraper.review_selector),
            ("scraper.text_selector", &config.scraper.text_selector),
            ("scraper.rating_selector", &config.scraper.rating_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `REVIEWLENS_EMBEDDINGS_PATH`, `REVIEWLENS_MAX_REVIEWS`, etc.
    /// `PORT` is honoured for hosting platforms; `REVIEWLENS_PORT` wins over it.
    fn apply_env_overrides(config: &mut ReviewLensConfig) {
        if let Ok(val) = std::env::var("REVIEWLENS_EMBEDDINGS_PATH") {
            config.model.embeddings_path = val;
        }
        if let Ok(val) = std::env::var("REVIEWLENS_CLASSIFIER_PATH") {
            config.model.classifier_path = val;
        }
        if let Ok(val) = std::env::var("REVIEWLENS_HOST") {
            config.server.host = val;
        }
        for key in ["PORT", "REVIEWLENS_PORT"] {
            if let Ok(val) = std::env::var(key) {
                if let Ok(v) = val.parse::<u16>() {
                    config.server.port = v;
                }
            }
        }
        if let Ok(val) = std::env::var("REVIEWLENS_MAX_REVIEWS") {
            if let Ok(v) = val.parse::<usize>() {
                config.server.max_reviews = v;
            }
        }
        if let Ok(val) = std::env::var("REVIEWLENS_MAX_REVIEW_CHARS") {
            if let Ok(v) = val.parse::<usize>() {
                config.text.max_review_chars = v;
            }
        }
        if let Ok(val) = std::env::var("REVIEWLENS_SPELLING_PROVIDER") {
            match val.to_ascii_lowercase().as_str() {
                "norvig" => config.text.spelling_provider = SpellingProvider::Norvig,
                "none" => config.text.spelling_provider = SpellingProvider::None,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("REVIEWLENS_DICTIONARY_PATH") {
            config.text.dictionary_path = Some(val);
        }
        if let Ok(val) = std::env::var("REVIEWLENS_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ReviewLensConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.embeddings_path {
            config.model.embeddings_path = v.clone();
        }
        if let Some(ref v) = cli.classifier_path {
            config.model.classifier_path = v.clone();
        }
        if let Some(ref v) = cli.host {
            config.server.host = v.clone();
        }
        if let Some(v) = cli.port {
            config.server.port = v;
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
