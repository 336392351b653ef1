// src/crypto/block.rs
//! Raw CBC over the concrete RustCrypto block ciphers
//!
//! Input to [`cbc_encrypt`] must already be padded; [`cbc_decrypt`] leaves
//! the padding in place. Both take an explicit IV, so the legacy and
//! random-IV modes share this code.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use sm4::Sm4;

use crate::consts::BLOCK_SIZE;
use crate::enums::CipherKind;
use crate::error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Reject keys the selected cipher cannot take
pub fn check_key(kind: CipherKind, key: &[u8]) -> Result<()> {
    if kind.accepts_key_len(key.len()) {
        Ok(())
    } else {
        Err(CodecError::InvalidKeyLength {
            cipher: kind,
            len: key.len(),
        })
    }
}

/// CBC needs exactly one block of IV
pub fn check_iv(iv: &[u8]) -> Result<()> {
    if iv.len() != BLOCK_SIZE {
        return Err(CodecError::InvalidIvLength(iv.len()));
    }
    Ok(())
}

/// Reject raw ciphertext that is empty or not block-aligned
pub fn check_ciphertext_len(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(CodecError::InvalidCiphertextLength(len));
    }
    Ok(())
}

/// CBC-encrypt block-aligned `padded` under `key` / `iv`
pub fn cbc_encrypt(kind: CipherKind, key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>> {
    check_key(kind, key)?;
    check_iv(iv)?;
    check_ciphertext_len(padded.len())?;

    match (kind, key.len()) {
        (CipherKind::Aes, 16) => encrypt_with::<Aes128>(kind, key, iv, padded),
        (CipherKind::Aes, 24) => encrypt_with::<Aes192>(kind, key, iv, padded),
        (CipherKind::Aes, _) => encrypt_with::<Aes256>(kind, key, iv, padded),
        (CipherKind::Sm4, _) => encrypt_with::<Sm4>(kind, key, iv, padded),
    }
}

/// CBC-decrypt block-aligned `ciphertext`; the PKCS#7 trailer is returned intact
pub fn cbc_decrypt(kind: CipherKind, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_key(kind, key)?;
    check_iv(iv)?;
    check_ciphertext_len(ciphertext.len())?;

    match (kind, key.len()) {
        (CipherKind::Aes, 16) => decrypt_with::<Aes128>(kind, key, iv, ciphertext),
        (CipherKind::Aes, 24) => decrypt_with::<Aes192>(kind, key, iv, ciphertext),
        (CipherKind::Aes, _) => decrypt_with::<Aes256>(kind, key, iv, ciphertext),
        (CipherKind::Sm4, _) => decrypt_with::<Sm4>(kind, key, iv, ciphertext),
    }
}

fn encrypt_with<C>(kind: CipherKind, key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| {
        CodecError::InvalidKeyLength {
            cipher: kind,
            len: key.len(),
        }
    })?;
    Ok(encryptor.encrypt_padded_vec_mut::<NoPadding>(padded))
}

fn decrypt_with<C>(kind: CipherKind, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv).map_err(|_| {
        CodecError::InvalidKeyLength {
            cipher: kind,
            len: key.len(),
        }
    })?;
    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| CodecError::InvalidCiphertextLength(ciphertext.len()))
}
