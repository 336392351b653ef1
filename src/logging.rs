// src/logging.rs
//! tracing-subscriber bootstrap for binaries and test runs

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Install a global fmt subscriber writing to stdout.
///
/// `RUST_LOG` wins over `config.level`. Returns `false` if a subscriber
/// was already installed, so it is safe to call more than once.
pub fn init(config: &LoggingConfig) -> bool {
    try_install(fmt::layer().with_ansi(config.ansi), config)
}

/// Like [`init`], but output goes through libtest's capture
/// (only shown for failing tests or with `--nocapture`).
pub fn init_for_tests(config: &LoggingConfig) -> bool {
    try_install(fmt::layer().with_ansi(false).with_test_writer(), config)
}

fn try_install<L>(layer: L, config: &LoggingConfig) -> bool
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .is_ok()
}
