// src/crypto/legacy.rs
//! Compatibility-mode CBC: the wire format existing producers emit
//!
//! Compatibility-mode IV derivation — not a recommended pattern for new designs.
//! AES uses the first 16 key bytes as IV and SM4 uses [`SM4_LEGACY_IV`] for
//! every message, so equal plaintexts under one key give equal ciphertexts.
//! There is no integrity tag. See [`super::random_iv`] for the fresh-IV mode.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::aliases::PlainText;
use crate::consts::{BLOCK_SIZE, SM4_LEGACY_IV};
use crate::enums::{CipherKind, PaddingCheck};
use crate::error::CodecError;

use super::block::{cbc_decrypt, cbc_encrypt, check_key};
use super::padding::{pad, unpadded_len};

pub type Result<T> = std::result::Result<T, CodecError>;

/// IV the legacy scheme pairs with `key`. The key length must already be valid.
fn legacy_iv(kind: CipherKind, key: &[u8]) -> &[u8] {
    match kind {
        CipherKind::Aes => &key[..BLOCK_SIZE],
        CipherKind::Sm4 => SM4_LEGACY_IV,
    }
}

/// Pad and CBC-encrypt, without base64 framing
pub fn encrypt_raw(plaintext: &[u8], key: &[u8], kind: CipherKind) -> Result<Vec<u8>> {
    check_key(kind, key)?;
    let padded = PlainText::new(pad(plaintext));
    cbc_encrypt(kind, key, legacy_iv(kind, key), &padded)
}

/// CBC-decrypt raw ciphertext and strip the PKCS#7 trailer
pub fn decrypt_raw(
    ciphertext: &[u8],
    key: &[u8],
    kind: CipherKind,
    check: PaddingCheck,
) -> Result<Vec<u8>> {
    check_key(kind, key)?;
    let mut padded = PlainText::new(cbc_decrypt(kind, key, legacy_iv(kind, key), ciphertext)?);
    let keep = unpadded_len(&padded, check)?;
    padded.truncate(keep);
    Ok(std::mem::take(&mut *padded))
}

/// Encrypt → standard padded base64
pub fn encrypt(plaintext: &[u8], key: &[u8], kind: CipherKind) -> Result<String> {
    let raw = encrypt_raw(plaintext, key, kind)?;
    debug!(
        cipher = %kind,
        plaintext_len = plaintext.len(),
        ciphertext_len = raw.len(),
        "encrypted"
    );
    Ok(STANDARD.encode(raw))
}

/// Base64 → plaintext, checking only the pad-length byte
pub fn decrypt(framed: &str, key: &[u8], kind: CipherKind) -> Result<Vec<u8>> {
    decrypt_with(framed, key, kind, PaddingCheck::Lenient)
}

/// Base64 → plaintext with an explicit padding policy
pub fn decrypt_with(
    framed: &str,
    key: &[u8],
    kind: CipherKind,
    check: PaddingCheck,
) -> Result<Vec<u8>> {
    let raw = STANDARD.decode(framed)?;
    let plaintext = decrypt_raw(&raw, key, kind, check)?;
    debug!(
        cipher = %kind,
        ciphertext_len = raw.len(),
        plaintext_len = plaintext.len(),
        "decrypted"
    );
    Ok(plaintext)
}
