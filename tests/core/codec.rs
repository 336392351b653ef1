use std::sync::Arc;
use std::thread;

use cbc_codec::config::{CodecSection, LoggingConfig};
use cbc_codec::error::CodecError;
use cbc_codec::{decrypt_sm4, encrypt_aes, BlockCipherCodec, CipherKind, CodecConfig, PaddingCheck};

use crate::common::{self, AES256_KEY, SM4_KEY};

fn config(cipher: CipherKind, key: &str, padding: PaddingCheck) -> CodecConfig {
    CodecConfig {
        codec: CodecSection {
            cipher,
            key: key.into(),
            padding,
        },
        logging: LoggingConfig {
            level: "info".into(),
            ansi: false,
        },
    }
}

#[test]
fn test_handle_matches_free_functions() {
    common::setup();
    let codec = BlockCipherCodec::new(&config(CipherKind::Aes, AES256_KEY, PaddingCheck::Lenient))
        .unwrap();

    let framed = codec.encrypt_str("hello").unwrap();
    assert_eq!(framed, encrypt_aes("hello", AES256_KEY).unwrap());
    assert_eq!(codec.decrypt_str(&framed).unwrap(), "hello");
    assert_eq!(codec.cipher(), CipherKind::Aes);
}

#[test]
fn test_handle_decrypts_legacy_sm4_output() {
    let codec =
        BlockCipherCodec::new(&config(CipherKind::Sm4, SM4_KEY, PaddingCheck::Strict)).unwrap();
    let framed = codec.encrypt(b"bytes in, bytes out").unwrap();
    assert_eq!(decrypt_sm4(&framed, SM4_KEY).unwrap(), "bytes in, bytes out");
    assert_eq!(codec.decrypt(&framed).unwrap(), b"bytes in, bytes out");
    assert_eq!(codec.padding(), PaddingCheck::Strict);
}

#[test]
fn test_handle_rejects_bad_key_up_front() {
    let err = BlockCipherCodec::new(&config(CipherKind::Sm4, AES256_KEY, PaddingCheck::Lenient))
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidKeyLength {
            cipher: CipherKind::Sm4,
            len: 32
        }
    ));
}

#[test]
fn test_default_config_builds_a_working_codec() {
    let codec = BlockCipherCodec::new(&CodecConfig::default()).unwrap();
    let framed = codec.encrypt_str("defaults").unwrap();
    assert_eq!(codec.decrypt_str(&framed).unwrap(), "defaults");
}

#[test]
fn test_handle_debug_hides_key() {
    let codec = BlockCipherCodec::new(&config(CipherKind::Aes, AES256_KEY, PaddingCheck::Lenient))
        .unwrap();
    assert!(!format!("{codec:?}").contains(AES256_KEY));
}

#[test]
fn test_handle_shared_across_threads() {
    let codec = Arc::new(
        BlockCipherCodec::new(&config(CipherKind::Sm4, SM4_KEY, PaddingCheck::Lenient)).unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                let msg = format!("worker {i}");
                let framed = codec.encrypt_str(&msg).unwrap();
                assert_eq!(codec.decrypt_str(&framed).unwrap(), msg);
                framed
            })
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs[3], codec.encrypt_str("worker 3").unwrap());
}
