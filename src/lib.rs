// src/lib.rs
//! cbc-codec — AES-CBC / SM4-CBC string codec
//!
//! Features:
//! - AES-128/192/256 and SM4 in CBC mode with PKCS#7 padding
//! - Standard base64 framing, wire-compatible with existing producers
//! - Optional random-IV mode for new data
//! - TOML config and tracing-subscriber bootstrap

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;

// Re-export everything users need at the crate root
pub use codec::{decrypt_aes, decrypt_sm4, encrypt_aes, encrypt_sm4, BlockCipherCodec};
pub use config::{load as load_config, CodecConfig};
pub use enums::{CipherKind, PaddingCheck};
pub use error::{CodecError, ConfigError};
