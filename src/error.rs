/*
    Error types for the library.

    Malformed seed text is not an error, it produces an invalid Seed.
    The enums here are for the hard failures.
*/

use thiserror::Error;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed is not valid")]
    Invalid,

    #[error("passphrase must be a string")]
    PassphraseNotText,

    #[error("could not read system entropy: {0}")]
    Entropy(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("cannot generate keys from invalid seed")]
    InvalidSeed,

    #[error("too many loops looking for KeyPair yielding {target} from {seed} ({attempts} attempts)")]
    AttemptsExhausted {
        target: String,
        seed: String,
        attempts: u32
    },

    #[error("max attempts {requested} exceeds the configured cap of {cap}")]
    AttemptsOverCap {
        requested: u32,
        cap: u32
    },

    #[error("no scalar below the curve order after {limit} hashes")]
    ResampleExhausted {
        limit: u32
    },

    #[error("curve error: {0}")]
    Curve(#[from] secp256k1::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58Error {
    #[error("invalid base58 character {0:?} at index {1}")]
    InvalidChar(char, usize),

    #[error("non ascii character at index {0}")]
    NonAsciiChar(usize),

    #[error("bad checksum")]
    BadChecksum,

    #[error("data too short to hold a version byte and checksum")]
    TooShort,

    #[error("expected version prefix {expected:#04x}, found {found:#04x}")]
    WrongVersion {
        expected: u8,
        found: u8
    },

    #[error("expected a payload of {expected} bytes, found {found}")]
    WrongLength {
        expected: usize,
        found: usize
    },

    #[error("{0}")]
    Unknown(String),
}

impl From<bs58::decode::Error> for Base58Error {
    fn from(e: bs58::decode::Error) -> Self {
        match e {
            bs58::decode::Error::InvalidCharacter { character, index } => Base58Error::InvalidChar(character, index),
            bs58::decode::Error::NonAsciiCharacter { index } => Base58Error::NonAsciiChar(index),
            x => Base58Error::Unknown(x.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid account id encoding: {0}")]
    Encoding(#[from] Base58Error),
}
