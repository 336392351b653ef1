// src/crypto/random_iv.rs
//! Fresh-IV CBC mode: `base64(iv || ciphertext)`
//!
//! Not wire-compatible with [`super::legacy`]. Still unauthenticated.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::{rng, RngCore};
use tracing::debug;

use crate::aliases::PlainText;
use crate::consts::BLOCK_SIZE;
use crate::enums::{CipherKind, PaddingCheck};
use crate::error::CodecError;

use super::block::{cbc_decrypt, cbc_encrypt, check_ciphertext_len, check_key};
use super::padding::{pad, unpadded_len};

pub type Result<T> = std::result::Result<T, CodecError>;

/// Encrypt under a random IV, which is prepended to the ciphertext
pub fn encrypt(plaintext: &[u8], key: &[u8], kind: CipherKind) -> Result<String> {
    check_key(kind, key)?;

    let mut iv = [0u8; BLOCK_SIZE];
    rng().fill_bytes(&mut iv);

    let padded = PlainText::new(pad(plaintext));
    let ciphertext = cbc_encrypt(kind, key, &iv, &padded)?;
    let mut framed = Vec::with_capacity(BLOCK_SIZE + ciphertext.len());
    framed.extend_from_slice(&iv);
    framed.extend_from_slice(&ciphertext);

    debug!(cipher = %kind, plaintext_len = plaintext.len(), "encrypted with random IV");
    Ok(STANDARD.encode(framed))
}

/// Inverse of [`encrypt`]; padding is always checked strictly
pub fn decrypt(framed: &str, key: &[u8], kind: CipherKind) -> Result<Vec<u8>> {
    check_key(kind, key)?;

    let raw = STANDARD.decode(framed)?;
    check_ciphertext_len(raw.len())?;
    if raw.len() < 2 * BLOCK_SIZE {
        return Err(CodecError::InvalidCiphertextLength(raw.len()));
    }

    let (iv, ciphertext) = raw.split_at(BLOCK_SIZE);
    let mut padded = PlainText::new(cbc_decrypt(kind, key, iv, ciphertext)?);
    let keep = unpadded_len(&padded, PaddingCheck::Strict)?;
    padded.truncate(keep);
    Ok(std::mem::take(&mut *padded))
}
