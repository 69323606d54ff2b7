//! Validation of BIP39 mnemonic phrases.

use bip39::{Language, Mnemonic};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::{errors::MnemonicError, master_key::MasterKey};

/// Number of words in a BIP39 mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCount {
    /// 128 bits of entropy.
    Words12,
    /// 160 bits of entropy.
    Words15,
    /// 192 bits of entropy.
    Words18,
    /// 224 bits of entropy.
    Words21,
    /// 256 bits of entropy.
    Words24,
}

impl WordCount {
    /// Every supported word count, shortest first.
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    /// Number of words.
    pub const fn count(&self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    /// Number of entropy bits encoded by this many words.
    pub const fn entropy_bits(&self) -> usize {
        self.count() / 3 * 32
    }

    /// Number of entropy bytes encoded by this many words.
    pub const fn entropy_len(&self) -> usize {
        self.entropy_bits() / 8
    }
}

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        WordCount::ALL
            .into_iter()
            .find(|wc| wc.count() == count)
            .ok_or(MnemonicError::WrongWordCount(count))
    }
}

/// A mnemonic whose word count, words and checksum have all been checked.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedMnemonic {
    inner: Mnemonic,
    word_count: WordCount,
}

impl ValidatedMnemonic {
    /// Number of words in the phrase.
    pub const fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// The entropy encoded by the phrase, without its checksum.
    pub fn entropy(&self) -> Zeroizing<Vec<u8>> {
        let (mut buf, len) = self.inner.to_entropy_array();
        let entropy = Zeroizing::new(buf[..len].to_vec());
        buf.zeroize();
        entropy
    }

    /// The normalized phrase, words separated by single spaces.
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.inner.to_string())
    }

    /// Derives the master key for this phrase and `passphrase`.
    pub fn derive_master_key(&self, passphrase: &[u8]) -> MasterKey {
        crate::master_key::derive_master_key(&self.entropy(), passphrase)
    }
}

impl std::fmt::Debug for ValidatedMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedMnemonic")
            .field("word_count", &self.word_count)
            .finish_non_exhaustive()
    }
}

/// Validates an English BIP39 mnemonic.
///
/// Leading and trailing whitespace is trimmed. Inside the phrase, words must be separated by
/// exactly one space: doubled spaces or other separators are rejected, never repaired. Words are
/// case sensitive.
pub fn validate_mnemonic(text: &str) -> Result<ValidatedMnemonic, MnemonicError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MnemonicError::Empty);
    }

    let words: Vec<&str> = trimmed.split(' ').collect();
    let word_count = WordCount::try_from(words.len())?;

    if words.iter().any(|word| word.is_empty()) {
        return Err(MnemonicError::InvalidChecksumOrWordlist);
    }

    let inner = Mnemonic::parse_in_normalized(Language::English, trimmed).map_err(|err| {
        match err {
            bip39::Error::BadWordCount(count) => MnemonicError::WrongWordCount(count),
            _ => MnemonicError::InvalidChecksumOrWordlist,
        }
    })?;

    debug!(words = word_count.count(), "validated mnemonic");

    Ok(ValidatedMnemonic { inner, word_count })
}
