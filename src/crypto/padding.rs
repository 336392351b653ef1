// src/crypto/padding.rs
//! PKCS#7 padding over 16-byte blocks

use crate::consts::BLOCK_SIZE;
use crate::enums::PaddingCheck;
use crate::error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Append `n` copies of byte `n`, where `n` fills up to the next block boundary.
///
/// `n` is always in `1..=BLOCK_SIZE`: block-aligned input gains a whole block.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip the PKCS#7 trailer, returning the payload length.
///
/// The last byte must lie in `1..=BLOCK_SIZE` and fit inside `data`.
/// With [`PaddingCheck::Strict`] every stripped byte must match it too.
pub fn unpadded_len(data: &[u8], check: PaddingCheck) -> Result<usize> {
    let Some(&last) = data.last() else {
        return Err(CodecError::InvalidCiphertextLength(0));
    };

    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(CodecError::InvalidPadding(last));
    }

    let keep = data.len() - pad_len;
    if check == PaddingCheck::Strict && data[keep..].iter().any(|&b| b != last) {
        return Err(CodecError::InvalidPadding(last));
    }

    Ok(keep)
}
