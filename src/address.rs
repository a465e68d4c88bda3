use crate::{
    key::PubKey,
    hash,
    encoding::{ Base58, VersionPrefix },
    error::AddressError,
    util::{ try_into, Network }
};
use std::str::FromStr;

/**
    160 bit account id.
    Ripemd160( Sha256( compressed public key ) )
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 20]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /**
        Creates the account id of a public key.
    */
    pub fn from_pub_key(pk: &PubKey) -> Self {
        Self(hash::hash160(pk.compressed()))
    }

    /**
        Parses a Base58Check encoded account id ("j..." on Jingtum, "r..." on Ripple).
    */
    pub fn parse(encoded: &str, network: Network) -> Result<Self, AddressError> {
        let payload = Base58::check_decode_versioned(encoded, VersionPrefix::AccountId, network)?;
        Ok(Self(try_into(payload)))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /**
        Base58Check encoding with the account id prefix.
    */
    pub fn encode(&self, network: Network) -> String {
        Base58::new(Some(VersionPrefix::AccountId), &self.0, network).check_encode()
    }

    /**
        Verifies that an address is valid by checking the payload and checksum
    */
    pub fn is_valid(address: &str, network: Network) -> bool {
        Self::parse(address, network).is_ok()
    }
}

impl FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Network::default())
    }
}
