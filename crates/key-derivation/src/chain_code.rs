//! Chain code of the master key.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    constants::{CHAIN_CODE_LEN, CHAIN_CODE_TAG, ED25519_SEED_KEY},
    seed::MasterSeed,
};

/// The 32-byte chain code used for child key derivation.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ChainCode([u8; CHAIN_CODE_LEN]);

impl ChainCode {
    /// Returns the raw chain code bytes.
    pub const fn as_bytes(&self) -> &[u8; CHAIN_CODE_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for ChainCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChainCode(..)")
    }
}

/// Computes `HMAC-SHA256("ed25519 seed", 0x01 || seed)`.
///
/// The chain code depends only on the master seed, not on how many rejection rounds the scalar
/// needed.
pub fn derive_chain_code(seed: &MasterSeed) -> ChainCode {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(ED25519_SEED_KEY).expect("HMAC accepts keys of any length");
    mac.update(&[CHAIN_CODE_TAG]);
    mac.update(seed.as_bytes());

    let mut chain_code = ChainCode([0; CHAIN_CODE_LEN]);
    chain_code.0.copy_from_slice(&mac.finalize().into_bytes());
    chain_code
}
