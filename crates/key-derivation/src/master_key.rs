//! Assembly of the 96-byte master key.

use bip39::Mnemonic;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    chain_code::derive_chain_code,
    constants::{ENTROPY_LENGTHS, EXTENDED_KEY_LEN, MASTER_KEY_LEN},
    errors::MnemonicError,
    hasher,
    hex::to_hex_string,
    mnemonic::validate_mnemonic,
    seed::MasterSeed,
    tweak::tweak_bits,
};

/// The root extended private key: a clamped scalar, its nonce extension and the chain code.
///
/// Layout is `kL (32) || kR (32) || chain code (32)`, the layout BIP32-Ed25519 tooling reads as an
/// extended private key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; MASTER_KEY_LEN]);

impl MasterKey {
    /// Derives the master key from an already stretched seed.
    pub fn from_seed(seed: &MasterSeed) -> Self {
        let chain_code = derive_chain_code(seed);
        let accepted = hasher::accept(seed.as_bytes());

        let mut key = Self([0; MASTER_KEY_LEN]);
        let mut extended = *accepted.as_bytes();
        tweak_bits(&mut extended);
        key.0[..EXTENDED_KEY_LEN].copy_from_slice(&extended);
        key.0[EXTENDED_KEY_LEN..].copy_from_slice(chain_code.as_bytes());
        extended.zeroize();

        debug!(rounds = accepted.rounds(), "derived master key");

        key
    }

    /// All 96 bytes.
    pub const fn as_bytes(&self) -> &[u8; MASTER_KEY_LEN] {
        &self.0
    }

    /// The 64-byte extended signing key, clamped scalar first.
    pub fn extended_secret_key(&self) -> &[u8] {
        &self.0[..EXTENDED_KEY_LEN]
    }

    /// The trailing 32-byte chain code.
    pub fn chain_code(&self) -> &[u8] {
        &self.0[EXTENDED_KEY_LEN..]
    }

    /// Lowercase hex of all 96 bytes, for handing to external tooling.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(to_hex_string(&self.0))
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

/// Derives the master key from BIP39 entropy and a passphrase.
///
/// The entropy is re-encoded to its English mnemonic sentence, which is what PBKDF2 stretches.
///
/// # Panics
///
/// If `entropy` is not 16, 20, 24, 28 or 32 bytes long. Such entropy cannot come out of a
/// validated mnemonic, so this is a bug in the caller.
pub fn derive_master_key(entropy: &[u8], passphrase: &[u8]) -> MasterKey {
    assert!(
        ENTROPY_LENGTHS.contains(&entropy.len()),
        "entropy must be 16, 20, 24, 28 or 32 bytes, got {}",
        entropy.len()
    );

    let mnemonic = Mnemonic::from_entropy(entropy).expect("entropy length checked above");
    let sentence = Zeroizing::new(mnemonic.to_string());
    let seed = MasterSeed::stretch(&sentence, passphrase);

    MasterKey::from_seed(&seed)
}

/// Validates `text` as a mnemonic and derives its master key.
pub fn derive_master_key_from_mnemonic(
    text: &str,
    passphrase: &[u8],
) -> Result<MasterKey, MnemonicError> {
    let mnemonic = validate_mnemonic(text)?;
    Ok(mnemonic.derive_master_key(passphrase))
}
