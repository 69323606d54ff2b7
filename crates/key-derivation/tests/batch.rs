//! Batch derivation driven by a config file on disk.

use std::io::Write;

use ledger_key_derivation::{
    derive_batch, derive_master_key_from_mnemonic, BatchConfig, BatchError, MnemonicError,
};
use ledger_keygen_common::logging::{self, LoggerConfig};
use tempfile::NamedTempFile;

const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
const ABANDON_ABOUT_KEY: &str = "402b03cd9c8bed9ba9f9bd6cd9c315ce9fcc59c7c25d37c85a36096617e69d418e35cb4a3b737afd007f0688618f21a8831643c0e6c77fc33c06026d2a0fc93832596435e70647d7d98ef102a32ea40319ca8fb6c851d7346d3bd8f9d1492658";

fn setup_logging() {
    let _ = logging::try_init(LoggerConfig::with_base_name("batch-test"));
}

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write config");
    file
}

#[test]
fn derives_keys_from_file() {
    setup_logging();

    let file = write_config(&format!(
        r#"
        num_threads = 2

        [[keys]]
        label = "plain"
        mnemonic = "{ABANDON_ABOUT}"

        [[keys]]
        label = "salted"
        mnemonic = "{ABANDON_ABOUT}"
        passphrase = "foo"

        [[keys]]
        label = "typo"
        mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon"
        "#
    ));

    let config = BatchConfig::load(file.path()).unwrap();
    let outputs = derive_batch(&config).unwrap();

    let labels: Vec<_> = outputs.iter().map(|out| out.label.as_str()).collect();
    assert_eq!(labels, ["plain", "salted", "typo"]);

    assert_eq!(
        outputs[0].result.as_ref().unwrap().to_hex().as_str(),
        ABANDON_ABOUT_KEY
    );
    assert_eq!(
        outputs[1].result.as_ref().unwrap(),
        &derive_master_key_from_mnemonic(ABANDON_ABOUT, b"foo").unwrap()
    );
    assert_eq!(
        outputs[2].result.as_ref().unwrap_err(),
        &MnemonicError::InvalidChecksumOrWordlist
    );
}

#[test]
fn identical_requests_give_identical_keys() {
    setup_logging();

    let mut text = String::from("num_threads = 4\n");
    for i in 0..6 {
        text.push_str(&format!(
            "[[keys]]\nlabel = \"copy-{i}\"\nmnemonic = \"{ABANDON_ABOUT}\"\n"
        ));
    }
    let file = write_config(&text);

    let outputs = derive_batch(&BatchConfig::load(file.path()).unwrap()).unwrap();
    assert_eq!(outputs.len(), 6);
    for output in &outputs {
        assert_eq!(
            output.result.as_ref().unwrap().to_hex().as_str(),
            ABANDON_ABOUT_KEY
        );
    }
}

#[test]
fn malformed_file_is_a_config_error() {
    let file = write_config("[[keys]]\nlabel = 3\n");
    assert!(matches!(
        BatchConfig::load(file.path()),
        Err(BatchError::Config(_))
    ));
}
