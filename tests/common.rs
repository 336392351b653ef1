// tests/common.rs
//! Shared test utilities — logging setup

#![allow(dead_code)]

#[cfg(feature = "logging")]
use cbc_codec::config::LoggingConfig;

/// Initialize test logging; respects RUST_LOG, otherwise stays quiet
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    cbc_codec::logging::init_for_tests(&LoggingConfig {
        level: "warn".into(),
        ansi: false,
    });

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Force debug-level logging so the codec's per-call events show up
pub fn setup_debug() {
    #[cfg(feature = "logging")]
    cbc_codec::logging::init_for_tests(&LoggingConfig {
        level: "cbc_codec=debug".into(),
        ansi: false,
    });

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

pub const AES128_KEY: &str = "0123456789abcdef";
pub const AES192_KEY: &str = "0123456789abcdef01234567";
pub const AES256_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const SM4_KEY: &str = "1234567890abcdef";
