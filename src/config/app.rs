// src/config/app.rs
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{CipherKind, PaddingCheck};
use crate::error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_codec")]
    pub codec: CodecSection,
    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct CodecSection {
    #[serde(default)]
    pub cipher: CipherKind,
    pub key: String,
    #[serde(default)]
    pub padding: PaddingCheck,
}

// Keeps the key out of logs and panic messages
impl fmt::Debug for CodecSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecSection")
            .field("cipher", &self.cipher)
            .field("key", &"[REDACTED]")
            .field("padding", &self.padding)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            codec: default_codec(),
            logging: default_logging(),
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

/// Load config from `$CBC_CODEC_CONFIG` (or `codec-config.toml`)
///
/// Falls back to built-in defaults if the file is missing.
pub fn load() -> Result<CodecConfig> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&config_path).exists() {
        CodecConfig::from_path(&config_path)
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Ok(CodecConfig::default())
    }
}
