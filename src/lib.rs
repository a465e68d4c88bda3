/*
    Library to create deterministic keys and addresses
    for Jingtum (and other Ripple family) accounts.

    A 128 bit family seed is turned into a root generator key pair,
    which in turn produces one secp256k1 key pair per account index.

    References:
        - The rippled key derivation (https://xrpl.org/cryptographic-keys.html)
            for the generator / account derivation scheme

        - The jingtum-lib base58 codec (https://github.com/swtcpro/jingtum-lib)
            for the Jingtum alphabet and the family seed / account id version bytes

    Todo:
        - Support ed25519 seeds (prefix "sEd") once the Jingtum network accepts them.
*/

//Outward facing modules
pub mod seed;
pub mod key;
pub mod address;
pub mod keygen;
pub mod encoding;
pub mod config;
pub mod error;
pub mod prelude;

//Modules for internal use
mod hash;
mod entropy;
mod impls;
pub mod util;

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Sha256, Sha512, Digest};
use ripemd160::Ripemd160;
