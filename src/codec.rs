// src/codec.rs
//! String-level codec — the public face of cbc-codec
//!
//! The four free functions are the legacy entry points: the key is the
//! raw bytes of a string, output is standard padded base64, padding is
//! checked leniently. [`BlockCipherCodec`] bundles a cipher, key and
//! padding policy from [`CodecConfig`] for callers that want one handle.

use tracing::warn;

use crate::aliases::CipherKey;
use crate::config::CodecConfig;
use crate::consts::DEFAULT_PASSWORD;
use crate::crypto::{self, legacy};
use crate::enums::{CipherKind, PaddingCheck};
use crate::error::{CodecError, ConfigError};

pub type Result<T> = std::result::Result<T, CodecError>;

pub fn encrypt_aes(plaintext: &str, key: &str) -> Result<String> {
    legacy::encrypt(plaintext.as_bytes(), key.as_bytes(), CipherKind::Aes)
}

pub fn decrypt_aes(framed: &str, key: &str) -> Result<String> {
    let plaintext = legacy::decrypt(framed, key.as_bytes(), CipherKind::Aes)?;
    Ok(String::from_utf8(plaintext)?)
}

pub fn encrypt_sm4(plaintext: &str, key: &str) -> Result<String> {
    legacy::encrypt(plaintext.as_bytes(), key.as_bytes(), CipherKind::Sm4)
}

pub fn decrypt_sm4(framed: &str, key: &str) -> Result<String> {
    let plaintext = legacy::decrypt(framed, key.as_bytes(), CipherKind::Sm4)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Immutable codec handle: one cipher, one key, one padding policy.
///
/// Holds no per-call state and is `Send + Sync`; share it by reference or `Arc`.
pub struct BlockCipherCodec {
    cipher: CipherKind,
    key: CipherKey,
    padding: PaddingCheck,
}

impl BlockCipherCodec {
    /// Build a handle, rejecting a key the configured cipher cannot use
    pub fn new(config: &CodecConfig) -> Result<Self> {
        let section = &config.codec;
        crypto::check_key(section.cipher, section.key.as_bytes())?;

        if section.key == DEFAULT_PASSWORD {
            warn!("using the built-in default key; configure [codec].key for real data");
        }

        Ok(Self {
            cipher: section.cipher,
            key: CipherKey::new(section.key.as_bytes().to_vec()),
            padding: section.padding,
        })
    }

    /// [`load_config`](crate::config::load) followed by [`BlockCipherCodec::new`]
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let config = crate::config::load()?;
        Ok(Self::new(&config)?)
    }

    pub fn cipher(&self) -> CipherKind {
        self.cipher
    }

    pub fn padding(&self) -> PaddingCheck {
        self.padding
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        legacy::encrypt(plaintext, &self.key, self.cipher)
    }

    pub fn decrypt(&self, framed: &str) -> Result<Vec<u8>> {
        legacy::decrypt_with(framed, &self.key, self.cipher, self.padding)
    }

    pub fn encrypt_str(&self, plaintext: &str) -> Result<String> {
        self.encrypt(plaintext.as_bytes())
    }

    pub fn decrypt_str(&self, framed: &str) -> Result<String> {
        Ok(String::from_utf8(self.decrypt(framed)?)?)
    }
}

impl std::fmt::Debug for BlockCipherCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockCipherCodec")
            .field("cipher", &self.cipher)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
