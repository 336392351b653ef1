// src/consts.rs
//! Shared constants — cipher geometry and legacy compatibility values

/// Block size in bytes for both AES and SM4
pub const BLOCK_SIZE: usize = 16;

/// Accepted AES key lengths (AES-128, AES-192, AES-256)
pub const AES_KEY_SIZES: &[usize] = &[16, 24, 32];

/// SM4 only has a 128-bit key
pub const SM4_KEY_SIZES: &[usize] = &[16];

/// Fixed IV used for every SM4 message in compatibility mode.
///
/// Compatibility-mode IV derivation — not a recommended pattern for new designs.
pub const SM4_LEGACY_IV: &[u8; BLOCK_SIZE] = b"1234567887654321";

/// Built-in password shipped by the legacy producers (16 bytes, valid for AES-128 and SM4)
pub const DEFAULT_PASSWORD: &str = "default@66668888";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CBC_CODEC_CONFIG";

/// Config file looked up when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "codec-config.toml";
