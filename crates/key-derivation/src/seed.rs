//! PBKDF2 stretching of the mnemonic sentence into the master seed.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{MASTER_SEED_LEN, PBKDF2_ROUNDS, SALT_PREFIX};

/// The 64-byte BIP39 seed that every other value of the master key is computed from.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterSeed([u8; MASTER_SEED_LEN]);

impl MasterSeed {
    /// Stretches a mnemonic sentence with PBKDF2-HMAC-SHA512.
    ///
    /// The salt is `"mnemonic"` followed by the raw passphrase bytes. No Unicode normalization is
    /// applied to either input, callers holding non-ASCII passphrases must NFKD-normalize them
    /// first to match other BIP39 implementations.
    pub fn stretch(sentence: &str, passphrase: &[u8]) -> Self {
        let mut salt = Zeroizing::new(Vec::with_capacity(SALT_PREFIX.len() + passphrase.len()));
        salt.extend_from_slice(SALT_PREFIX);
        salt.extend_from_slice(passphrase);

        let mut seed = Self([0; MASTER_SEED_LEN]);
        pbkdf2_hmac::<Sha512>(sentence.as_bytes(), &salt, PBKDF2_ROUNDS, &mut seed.0);
        seed
    }

    /// Wraps an already stretched seed.
    pub const fn from_bytes(bytes: [u8; MASTER_SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    pub const fn as_bytes(&self) -> &[u8; MASTER_SEED_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for MasterSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterSeed(..)")
    }
}
