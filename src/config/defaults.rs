// src/config/defaults.rs
use crate::config::app::{CodecSection, LoggingConfig};
use crate::consts::DEFAULT_PASSWORD;
use crate::enums::{CipherKind, PaddingCheck};

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn default_codec() -> CodecSection {
    CodecSection {
        cipher: CipherKind::Aes,
        key: DEFAULT_PASSWORD.into(),
        padding: PaddingCheck::Lenient,
    }
}

pub fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        ansi: default_ansi(),
    }
}

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.into()
}

pub fn default_ansi() -> bool {
    true
}
