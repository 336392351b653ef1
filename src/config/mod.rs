// src/config/mod.rs
//! Configuration for cbc-codec
//!
//! Caller-owned config loaded from TOML, with the file path taken from
//! the environment. Nothing is cached globally.

pub use app::{load, CodecConfig, CodecSection, LoggingConfig};

mod app;
mod defaults;
