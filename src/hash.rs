/*
    Hash module include hash functions necessary to derive
    seeds and keys, and to hash a public key into an account id.
*/

use crate::{
    Ripemd160, Sha256, Sha512, Digest,
    util::try_into
};

/*
    Takes in an byte array and returns the ripemd160 hash of it as a Vec u8
*/
pub fn ripemd160<T>(input: T) -> Vec<u8>
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input);
    r.finalize().to_vec()
}

/*
    Takes in a byte array and returns the sha256 hash of it as a Vec u8
*/
pub fn sha256<T>(input: T) -> Vec<u8>
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().to_vec()
}

/*
    Double sha256, used for base58 check sums
*/
pub fn sha256d<T>(input: T) -> Vec<u8>
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    Takes in a byte array and returns the sha512 hash of it as a byte array
*/
pub fn sha512<T>(input: T) -> [u8; 64]
where T: AsRef<[u8]>
{
    let mut r = Sha512::new();
    r.update(input);
    try_into(r.finalize().to_vec())
}

/**
    The first half of the sha512 hash of the input.
    This is the "SHA512Half" used everywhere in the Ripple family key derivation.
*/
pub fn sha512_half<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    try_into(sha512(input)[0..32].to_vec())
}

/*
    Ripemd160( Sha256( input ) )
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    try_into(ripemd160(sha256(input)))
}
