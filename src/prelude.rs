/*
    This module contains the default imports for the library.

    Import the library using:
        use jingtum_keyaddress::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    seed::Seed,

    key::{
        PubKey,
        PrivKey,
        KeyPair,
        Key
    },

    address::AccountId,

    keygen::{
        Account,
        AccountKey,
        KeyGenerator,
        RootGenerator
    },

    config::KeyGenConfig,

    error::{
        KeyError,
        KeyResult,
        SeedError,
        AddressError,
        Base58Error
    },

    encoding::{
        Base58,
        VersionPrefix
    },

    util::{
        encode_02x,
        decode_02x,
        Network
    }

};
