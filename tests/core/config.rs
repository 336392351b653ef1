use std::fs;

use cbc_codec::consts::{CONFIG_ENV_VAR, DEFAULT_PASSWORD};
use cbc_codec::error::ConfigError;
use cbc_codec::{BlockCipherCodec, CipherKind, CodecConfig, PaddingCheck};
use tempfile::tempdir;

#[test]
fn test_from_path_reads_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codec.toml");
    fs::write(
        &path,
        "[codec]\ncipher = \"sm4\"\nkey = \"1234567890abcdef\"\npadding = \"strict\"\n",
    )
    .unwrap();

    let conf = CodecConfig::from_path(&path).unwrap();
    assert_eq!(conf.codec.cipher, CipherKind::Sm4);
    assert_eq!(conf.codec.key, "1234567890abcdef");
    assert_eq!(conf.codec.padding, PaddingCheck::Strict);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = CodecConfig::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// Only test in this binary that touches the env var.
#[test]
fn test_load_and_from_env_follow_env_var() {
    let dir = tempdir().unwrap();

    std::env::set_var(CONFIG_ENV_VAR, dir.path().join("missing.toml"));
    let conf = cbc_codec::load_config().unwrap();
    assert_eq!(conf.codec.key, DEFAULT_PASSWORD);
    assert_eq!(conf.codec.cipher, CipherKind::Aes);

    let bad = dir.path().join("bad-key.toml");
    fs::write(&bad, "[codec]\ncipher = \"sm4\"\nkey = \"too short\"\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &bad);
    assert!(matches!(
        BlockCipherCodec::from_env(),
        Err(ConfigError::InvalidKey(_))
    ));

    let good = dir.path().join("good.toml");
    fs::write(&good, "[codec]\ncipher = \"sm4\"\nkey = \"1234567890abcdef\"\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &good);
    let codec = BlockCipherCodec::from_env().unwrap();
    assert_eq!(codec.cipher(), CipherKind::Sm4);

    std::env::remove_var(CONFIG_ENV_VAR);
}
