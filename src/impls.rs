/**
    This module combines all the boilerplate
    implementations of fmt::Display and fmt::Debug.
*/

use crate::{
    key::{ Key, KeyPair, PrivKey, PubKey },
    address::AccountId,
    seed::Seed,
    util::Network
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PubKey")
         .field(&self.as_hex())
         .finish()
    }
}

//Secret keys are never printed
impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivKey(..)")
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
         .field("public", self.public())
         .field("address", &self.address().to_string())
         .finish()
    }
}

/*
    address module impls
*/
impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode(Network::default()))
    }
}

/*
    seed module impls
*/
impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.serialize() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "<invalid seed>")
        }
    }
}

//Seed bytes are as secret as a private key
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Valid(_) => f.write_str("Seed::Valid(..)"),
            Seed::Invalid => f.write_str("Seed::Invalid")
        }
    }
}
