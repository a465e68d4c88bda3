use crate::{
    encoding::version_prefix::VersionPrefix,
    error::Base58Error,
    hash,
    util::Network
};
use bs58::Alphabet;

/// Jingtum alphabet. Same as Ripple with 'j' and 'r' swapped.
pub static JINGTUM_ALPHABET: Alphabet = Alphabet::new_unwrap(b"jpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65rkm8oFqi1tuvAxyz");

/// Ripple alphabet.
pub static RIPPLE_ALPHABET: Alphabet = Alphabet::new_unwrap(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

fn alphabet(network: Network) -> &'static Alphabet {
    match network {
        Network::Jingtum => &JINGTUM_ALPHABET,
        Network::Ripple => &RIPPLE_ALPHABET
    }
}

#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>,
    network: Network
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8], network: Network) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec(),
            network
        }
    }

    //prefix | payload
    fn versioned_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = match self.prefix {
            Some(x) => vec![x.to_byte()],
            None => Vec::new()
        };
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        let mut bytes = self.versioned_bytes();
        let checksum = hash::sha256d(&bytes);
        bytes.extend_from_slice(&checksum[0..4]);

        bs58::encode(bytes).with_alphabet(alphabet(self.network)).into_string()
    }

    /// Encode data in base58 format, with the version prefix but no checksum.
    pub fn encode(self) -> String {
        bs58::encode(self.versioned_bytes()).with_alphabet(alphabet(self.network)).into_string()
    }

    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    pub fn decode(encoded: &str, network: Network) -> Result<Vec<u8>, Base58Error> {
        Ok(bs58::decode(encoded).with_alphabet(alphabet(network)).into_vec()?)
    }

    /// Returns the decoded bytes with the checksum removed.
    /// The version byte is kept.
    pub fn check_decode(encoded: &str, network: Network) -> Result<Vec<u8>, Base58Error> {
        let bytes = Base58::decode(encoded, network)?;
        if bytes.len() < 5 { return Err(Base58Error::TooShort) }

        let (data, checksum) = bytes.split_at(bytes.len() - 4);
        if hash::sha256d(data)[0..4] != *checksum { return Err(Base58Error::BadChecksum) }

        Ok(data.to_vec())
    }

    /// Check decodes and verifies the version prefix and payload length.
    /// Returns only the payload.
    pub fn check_decode_versioned(encoded: &str, prefix: VersionPrefix, network: Network) -> Result<Vec<u8>, Base58Error> {
        let bytes = Base58::check_decode(encoded, network)?;
        if bytes[0] != prefix.to_byte() {
            return Err(Base58Error::WrongVersion { expected: prefix.to_byte(), found: bytes[0] })
        }

        let payload = &bytes[1..];
        if payload.len() != prefix.payload_len() {
            return Err(Base58Error::WrongLength { expected: prefix.payload_len(), found: payload.len() })
        }

        Ok(payload.to_vec())
    }
}
