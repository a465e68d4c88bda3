/*
    Family seeds.

    A seed is 16 bytes of entropy. It can be written as a
    Base58Check string ("s..."), as 32 hex characters, or
    derived from a passphrase. Text that cannot be understood
    as a seed gives Seed::Invalid rather than an error.

    Todo:
        - Parse RFC1751 word lists.
*/

use crate::{
    encoding::{ Base58, VersionPrefix },
    entropy,
    error::{ KeyResult, SeedError },
    hash,
    key::KeyPair,
    keygen::{ Account, KeyGenerator },
    util::{ decode_02x, encode_02x, is_hex_seed, try_into, Network }
};
use std::{
    convert::TryFrom,
    str::{ self, FromStr }
};

/// Character every family seed string starts with.
pub const FAMILY_SEED_CHAR: char = 's';

pub const SEED_LEN: usize = 16;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed {
    Valid([u8; SEED_LEN]),
    Invalid
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Invalid
    }
}

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Seed::Valid(bytes)
    }

    /**
        Invalid unless the slice is exactly 16 bytes long.
    */
    pub fn from_slice(bytes: &[u8]) -> Self {
        match <[u8; SEED_LEN]>::try_from(bytes) {
            Ok(b) => Seed::Valid(b),
            Err(_) => Seed::Invalid
        }
    }

    /**
        New seed from system entropy.
    */
    pub fn random() -> Result<Self, SeedError> {
        let bytes = entropy::random_bytes::<SEED_LEN>()
            .map_err(|e| SeedError::Entropy(e.to_string()))?;
        Ok(Seed::Valid(bytes))
    }

    /**
        Parses seed text using the Jingtum alphabet for "s..." strings.
    */
    pub fn parse(input: &str) -> Self {
        Self::parse_for(input, Network::default())
    }

    /**
        Parses seed text:
            - empty -> invalid
            - starts with 's' -> Base58Check family seed, invalid if it does not decode
            - 32 hex characters -> raw seed bytes
            - anything else -> passphrase
    */
    pub fn parse_for(input: &str, network: Network) -> Self {
        if input.is_empty() {
            Seed::Invalid
        } else if input.starts_with(FAMILY_SEED_CHAR) {
            match Base58::check_decode_versioned(input, VersionPrefix::FamilySeed, network) {
                Ok(payload) => Seed::Valid(try_into(payload)),
                Err(_) => Seed::Invalid
            }
        } else if is_hex_seed(input) {
            match decode_02x(input) {
                Ok(bytes) => Seed::from_slice(&bytes),
                Err(_) => Seed::Invalid
            }
        } else {
            Self::parse_passphrase(input)
        }
    }

    /**
        Parses raw input. Input that is not utf8 text is an invalid seed.
    */
    pub fn parse_bytes(input: &[u8]) -> Self {
        match str::from_utf8(input) {
            Ok(s) => Self::parse(s),
            Err(_) => Seed::Invalid
        }
    }

    /**
        Sha512 of the utf8 passphrase, truncated to the first 128 bits.
    */
    pub fn parse_passphrase(passphrase: &str) -> Self {
        Seed::Valid(try_into(hash::sha512(passphrase.as_bytes())[0..SEED_LEN].to_vec()))
    }

    /**
        Same as parse_passphrase() but for raw input, which must be utf8 text.
    */
    pub fn parse_passphrase_bytes(passphrase: &[u8]) -> Result<Self, SeedError> {
        let text = str::from_utf8(passphrase).map_err(|_| SeedError::PassphraseNotText)?;
        Ok(Self::parse_passphrase(text))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Seed::Valid(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8; SEED_LEN]> {
        match self {
            Seed::Valid(b) => Some(b),
            Seed::Invalid => None
        }
    }

    pub fn to_hex(&self) -> Option<String> {
        self.as_bytes().map(|b| encode_02x(b).to_uppercase())
    }

    /**
        Base58Check encoding with the family seed prefix (Jingtum alphabet).
        None if the seed is invalid.
    */
    pub fn serialize(&self) -> Option<String> {
        self.serialize_for(Network::default())
    }

    pub fn serialize_for(&self, network: Network) -> Option<String> {
        self.as_bytes()
            .map(|b| Base58::new(Some(VersionPrefix::FamilySeed), b, network).check_encode())
    }

    /**
        Derives the key pair for an account with the default key generator.
        See KeyGenerator::derive_account_key().
    */
    pub fn get_key(&self, account: Account, max_attempts: Option<u32>) -> KeyResult<KeyPair> {
        Ok(KeyGenerator::default().derive_account_key(self, account, max_attempts)?.key_pair)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// Strict parse, an invalid seed is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Seed::parse(s) {
            Seed::Invalid => Err(SeedError::Invalid),
            seed => Ok(seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER_SEED_HEX: &str = "DEDCE9CE67B451D852FD4E846FCDE31C";
    const MASTER_SEED: &str = "snoPBjXtMeMyMHUVTgbuqAfg1SUTb";

    #[test]
    fn passphrase_seed() {
        let seed = Seed::parse_passphrase("masterpassphrase");
        assert_eq!(seed.to_hex().unwrap(), MASTER_SEED_HEX);
        assert_eq!(seed.serialize().unwrap(), MASTER_SEED);
        assert_eq!(seed.serialize_for(Network::Ripple).unwrap(), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
    }

    #[test]
    fn parse_all_forms() {
        let expected = Seed::parse_passphrase("masterpassphrase");

        assert_eq!(Seed::parse("masterpassphrase"), expected);
        assert_eq!(Seed::parse(MASTER_SEED), expected);
        assert_eq!(Seed::parse(MASTER_SEED_HEX), expected);
        assert_eq!(Seed::parse(&MASTER_SEED_HEX.to_lowercase()), expected);
        assert_eq!(Seed::parse_for("snoPBrXtMeMyMHUVTgbuqAfg1SUTb", Network::Ripple), expected);
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(Seed::parse(""), Seed::Invalid);
        //Starts with 's' but is not a valid family seed
        assert_eq!(Seed::parse("snoPBjXtMeMyMHUVTgbuqAfg1SUTc"), Seed::Invalid);
        assert_eq!(Seed::parse("sailing"), Seed::Invalid);
        assert_eq!(Seed::parse_bytes(&[0xff, 0xfe, 0x00]), Seed::Invalid);
        assert!(!Seed::default().is_valid());
        assert_eq!(Seed::from_slice(&[0u8; 15]), Seed::Invalid);
    }

    #[test]
    fn hex_with_wrong_length_is_a_passphrase() {
        let short = &MASTER_SEED_HEX[..31];
        assert_eq!(Seed::parse(short), Seed::parse_passphrase(short));
    }

    #[test]
    fn passphrase_must_be_text() {
        assert_eq!(Seed::parse_passphrase_bytes(&[0xc3, 0x28]), Err(SeedError::PassphraseNotText));
        assert_eq!(
            Seed::parse_passphrase_bytes(b"masterpassphrase"),
            Ok(Seed::parse_passphrase("masterpassphrase"))
        );
    }

    #[test]
    fn invalid_seed_does_not_serialize() {
        assert_eq!(Seed::Invalid.serialize(), None);
        assert_eq!(Seed::Invalid.to_hex(), None);
        assert_eq!(Seed::Invalid.to_string(), "<invalid seed>");
    }

    #[test]
    fn strict_parse() {
        assert_eq!("".parse::<Seed>(), Err(SeedError::Invalid));
        assert!(MASTER_SEED.parse::<Seed>().unwrap().is_valid());
    }

    #[test]
    fn random_seeds_differ() {
        let a = Seed::random().unwrap();
        let b = Seed::random().unwrap();
        assert!(a.is_valid());
        assert_ne!(a, b);
        assert_eq!(Seed::parse(&a.serialize().unwrap()), a);
    }
}
