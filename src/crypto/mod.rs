// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no configuration
//!
//! All functions work exclusively on in-memory buffers and build their
//! cipher context per call.
mod block;
pub mod legacy;
mod padding;
pub mod random_iv;

pub use block::{cbc_decrypt, cbc_encrypt, check_key};
pub use legacy::{decrypt, decrypt_raw, decrypt_with, encrypt, encrypt_raw};
pub use padding::{pad, unpadded_len};
