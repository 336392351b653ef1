// src/error.rs
//! Public error types for the entire crate

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::enums::CipherKind;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid {cipher} key length: {len} bytes")]
    InvalidKeyLength { cipher: CipherKind, len: usize },

    #[error("ciphertext is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("IV must be one block (16 bytes), got {0}")]
    InvalidIvLength(usize),

    #[error("ciphertext length {0} is not a positive multiple of the block size")]
    InvalidCiphertextLength(usize),

    #[error("invalid padding byte {0:#04x}")]
    InvalidPadding(u8),

    #[error("decrypted data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("configured key rejected: {0}")]
    InvalidKey(#[from] CodecError),
}
