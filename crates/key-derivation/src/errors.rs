//! Errors for mnemonic validation, hex decoding and batch derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Error while validating a mnemonic phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MnemonicError {
    /// The phrase is empty or consists only of whitespace.
    #[error("mnemonic is empty")]
    Empty,

    /// The phrase does not have 12, 15, 18, 21 or 24 words.
    #[error("mnemonic must have 12, 15, 18, 21 or 24 words, got {0}")]
    WrongWordCount(usize),

    /// A word is not in the English wordlist, or the embedded checksum does not match.
    #[error("mnemonic contains an unknown word or has an invalid checksum")]
    InvalidChecksumOrWordlist,
}

/// Error while decoding a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// The string has an odd number of characters and cannot be split into byte pairs.
    #[error("hex string must have an even length, got {0} characters")]
    OddLength(usize),

    /// The string contains a character that is not a hex digit.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its position in the input.
        index: usize,
    },
}

/// Error while loading or running a batch of derivations.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The batch file could not be read.
    #[error("failed to read batch config at {path}: {source}")]
    Io {
        /// Path of the batch file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The batch file is not valid TOML or does not match the expected layout.
    #[error("invalid batch config: {0}")]
    Config(#[from] toml::de::Error),

    /// The batch asks for zero worker threads.
    #[error("batch config must allow at least one worker")]
    NoWorkers,
}
