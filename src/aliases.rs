// src/aliases.rs
//! Secret-holding buffer types
//!
//! Both wrap `zeroize::Zeroizing`, so the bytes are overwritten when the
//! value is dropped, including on early `?` returns.

use zeroize::Zeroizing;

/// AES-128/192/256 or SM4 key bytes held by a codec handle
pub type CipherKey = Zeroizing<Vec<u8>>;

/// Padded plaintext before or after CBC, never returned to callers as-is
pub type PlainText = Zeroizing<Vec<u8>>;
