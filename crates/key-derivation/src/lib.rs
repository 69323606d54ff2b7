//! Derives the root extended ed25519 signing key that Ledger hardware wallets compute from a BIP39
//! mnemonic.
//!
//! The scheme is SLIP-10-like but not SLIP-10: the BIP39 seed is hashed repeatedly with
//! HMAC-SHA512 until the scalar half has its third highest bit clear, the result is clamped, and a
//! chain code is computed separately with HMAC-SHA256. The 96-byte [`MasterKey`] is the input
//! expected by BIP32-Ed25519 tooling (e.g. as a bech32 `root_xsk`).

pub mod batch;
pub mod chain_code;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hasher;
pub mod hex;
pub mod master_key;
pub mod mnemonic;
pub mod seed;
pub mod tweak;

pub use batch::{derive_batch, BatchOutput};
pub use chain_code::{derive_chain_code, ChainCode};
pub use config::{BatchConfig, KeyRequest};
pub use errors::{BatchError, HexError, MnemonicError};
pub use hex::{from_hex_string, to_hex_string};
pub use master_key::{derive_master_key, derive_master_key_from_mnemonic, MasterKey};
pub use mnemonic::{validate_mnemonic, ValidatedMnemonic, WordCount};
pub use seed::MasterSeed;
