// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which block cipher
//! runs underneath CBC and how hard decryption looks at the padding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{AES_KEY_SIZES, SM4_KEY_SIZES};

/// Supported block ciphers (both have a 128-bit block)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// AES-128/192/256, picked by key length
    #[default]
    Aes,
    /// SM4-128 (GB/T 32907-2016)
    Sm4,
}

impl CipherKind {
    /// Key lengths in bytes this cipher accepts
    pub fn key_sizes(self) -> &'static [usize] {
        match self {
            CipherKind::Aes => AES_KEY_SIZES,
            CipherKind::Sm4 => SM4_KEY_SIZES,
        }
    }

    pub fn accepts_key_len(self, len: usize) -> bool {
        self.key_sizes().contains(&len)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Aes => f.write_str("AES"),
            CipherKind::Sm4 => f.write_str("SM4"),
        }
    }
}

/// How much of the PKCS#7 trailer is checked on decrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddingCheck {
    /// Only the final pad-length byte is range-checked; the other pad
    /// bytes are stripped unread. Matches existing ciphertext producers.
    #[default]
    Lenient,
    /// Every stripped byte must equal the pad length.
    Strict,
}
