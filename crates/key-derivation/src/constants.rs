//! Fixed parameters of the derivation.
//!
//! Every value here is dictated by the hardware wallet firmware; changing any of them produces keys
//! the device will never reproduce.

/// Key used for every HMAC in the derivation, for both the scalar and the chain code.
pub const ED25519_SEED_KEY: &[u8] = b"ed25519 seed";

/// Prefix of the PBKDF2 salt, followed by the passphrase.
pub const SALT_PREFIX: &[u8] = b"mnemonic";

/// Number of PBKDF2-HMAC-SHA512 iterations used to stretch the mnemonic sentence.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Domain separation tag prepended to the master seed when computing the chain code.
pub const CHAIN_CODE_TAG: u8 = 0x01;

/// Size of the stretched master seed in bytes.
pub const MASTER_SEED_LEN: usize = 64;

/// Size of the extended signing key (clamped scalar followed by the nonce extension).
pub const EXTENDED_KEY_LEN: usize = 64;

/// Size of the chain code.
pub const CHAIN_CODE_LEN: usize = 32;

/// Size of the complete master key.
pub const MASTER_KEY_LEN: usize = EXTENDED_KEY_LEN + CHAIN_CODE_LEN;

/// Index of the last byte of the 32-byte scalar half of the extended key.
///
/// Both the acceptance predicate and the high-bit clamping operate on this byte.
pub const SCALAR_LAST_BYTE: usize = 31;

/// Entropy lengths in bytes that a BIP39 mnemonic can encode.
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];
