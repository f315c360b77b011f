//! Decoder configuration
//!
//! Layering, lowest first: built-in defaults, the first config file found, then
//! `WASSUP_DECODER_*` environment variables. `.env` files are read before anything else.

use std::path::Path;

use ::config::{Config, Environment, File};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecoderResult};
use crate::types::ToneLabel;

pub mod constants {
    pub const DEFAULT_MAX_TONES: usize = 4;
    pub const DEFAULT_MAX_EXPLAINED_TERMS: usize = 3;

    /// Prefix for environment overrides, e.g. `WASSUP_DECODER_MAX_TONES=2`
    pub const ENV_PREFIX: &str = "WASSUP_DECODER";

    pub const CONFIG_PATHS: &[&str] = &[
        "wassup.toml",
        ".wassup.toml",
        "~/.config/wassup/config.toml",
        "/etc/wassup/config.toml",
    ];

    pub const ENV_FILES: &[&str] = &[".env.local", ".env"];
}

/// A tone rule supplied through configuration, appended after the built-in table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Regular expression tested against the lower-cased message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub tone: ToneLabel,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Upper bound on `toneTags`
    pub max_tones: usize,
    /// Slang entries spelled out in the "Key terms used" block
    pub max_explained_terms: usize,
    /// Fill `suggestedResponses` with quick-reply guidance
    pub suggest_responses: bool,
    pub extra_tone_rules: Vec<ToneRuleConfig>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_tones: constants::DEFAULT_MAX_TONES,
            max_explained_terms: constants::DEFAULT_MAX_EXPLAINED_TERMS,
            suggest_responses: true,
            extra_tone_rules: Vec::new(),
        }
    }
}

impl DecoderConfig {
    /// Parses an inline TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> DecoderResult<Self> {
        let config: DecoderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DecoderResult<()> {
        if self.max_tones == 0 {
            return Err(DecodeError::ConfigError(
                "max_tones must be at least 1".to_string(),
            ));
        }

        for (index, rule) in self.extra_tone_rules.iter().enumerate() {
            if rule.weight == 0 {
                return Err(DecodeError::ConfigError(format!(
                    "extra_tone_rules[{}]: weight must be positive",
                    index
                )));
            }

            let has_keywords = rule
                .keywords
                .as_ref()
                .is_some_and(|keywords| keywords.iter().any(|k| !k.is_empty()));

            match (&rule.pattern, has_keywords) {
                (Some(_), true) => {
                    return Err(DecodeError::ConfigError(format!(
                        "extra_tone_rules[{}]: use either keywords or pattern, not both",
                        index
                    )))
                }
                (Some(pattern), false) => {
                    Regex::new(pattern).map_err(|e| {
                        DecodeError::from(e).with_context(format!("extra_tone_rules[{}]", index))
                    })?;
                }
                (None, true) => {}
                (None, false) => {
                    return Err(DecodeError::ConfigError(format!(
                        "extra_tone_rules[{}]: needs keywords or a pattern",
                        index
                    )))
                }
            }
        }

        Ok(())
    }
}

/// Loads [`DecoderConfig`] and remembers where it came from
pub struct ConfigManager {
    config: DecoderConfig,
    config_path: Option<String>,
}

impl ConfigManager {
    /// Searches `CONFIG_PATHS` and applies environment overrides
    pub fn load() -> DecoderResult<Self> {
        Self::load_dotenv();

        let config_path = constants::CONFIG_PATHS
            .iter()
            .map(|path| shellexpand::tilde(path).to_string())
            .find(|path| Path::new(path).exists());

        let config = Self::build(config_path.as_deref())?;
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Uses an explicit file instead of the search path; the file must exist
    pub fn from_path(path: &str) -> DecoderResult<Self> {
        Self::load_dotenv();

        let expanded = shellexpand::tilde(path).to_string();
        if !Path::new(&expanded).exists() {
            return Err(DecodeError::ConfigError(format!(
                "config file not found: {}",
                expanded
            )));
        }

        let config = Self::build(Some(&expanded))?;
        Ok(Self {
            config,
            config_path: Some(expanded),
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn into_config(self) -> DecoderConfig {
        self.config
    }

    /// File the configuration was read from, if any
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    fn build(path: Option<&str>) -> DecoderResult<DecoderConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&DecoderConfig::default())
                .map_err(|e| DecodeError::from(e).with_context("defaults"))?,
        );

        match path {
            Some(path) => {
                tracing::info!("Loading decoder config from {}", path);
                builder = builder.add_source(File::with_name(path));
            }
            None => tracing::info!("No config file found, using defaults"),
        }

        // "__" keeps single underscores inside field names
        builder = builder.add_source(
            Environment::with_prefix(constants::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: DecoderConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            "Decoder config: max_tones={} max_explained_terms={} extra_tone_rules={}",
            config.max_tones,
            config.max_explained_terms,
            config.extra_tone_rules.len()
        );

        Ok(config)
    }

    fn load_dotenv() {
        for env_file in constants::ENV_FILES {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::info!("Loaded environment file: {}", env_file);
                break;
            }
        }
    }

    /// Writes the default configuration as TOML
    pub fn generate_example_config(path: &str) -> DecoderResult<()> {
        let content = toml::to_string_pretty(&DecoderConfig::default())
            .map_err(|e| DecodeError::SerializationError(format!("TOML: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| DecodeError::ConfigError(format!("failed to write {}: {}", path, e)))
    }
}
