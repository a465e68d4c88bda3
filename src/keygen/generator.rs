/*
    The root generator of a family seed, and the accounts derived from it.

    private_gen = first sha512 half of (seed || i) below the curve order
    public_gen  = private_gen * G

    Account n:
        secret = (first sha512 half of (public_gen || n || i) below the order) + private_gen  (mod order)
*/

use crate::{
    address::AccountId,
    error::{ KeyError, KeyResult },
    hash::sha512_half,
    key::{ KeyPair, PrivKey, PubKey },
    seed::Seed,
    util::Network
};
use secp256k1::constants::CURVE_ORDER;
use std::ops::Range;
use tracing::{ debug, trace, warn };

/**
    Returns true if the big endian scalar is strictly less than the secp256k1 order.
*/
pub fn below_order(scalar: &[u8; 32]) -> bool {
    scalar < &CURVE_ORDER
}

/**
    Appends a big endian u32 to the data.
*/
fn append_int(data: &[u8], i: u32) -> Vec<u8> {
    let mut out = data.to_vec();
    out.extend_from_slice(&i.to_be_bytes());
    out
}

/**
    Hashes with i = 0, 1, 2... until a candidate below the curve order is found.
    Returns the candidate and the number of hashes it took.
*/
fn resample<F>(limit: u32, mut candidate_at: F) -> KeyResult<([u8; 32], u32)>
where F: FnMut(u32) -> [u8; 32]
{
    for i in 0..limit {
        let candidate = candidate_at(i);
        if below_order(&candidate) {
            return Ok((candidate, i + 1))
        }
    }

    Err(KeyError::ResampleExhausted { limit })
}

/**
    A key pair together with the account index it was derived at.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountKey {
    pub index: u32,
    pub key_pair: KeyPair
}

#[derive(Debug, Clone, Copy)]
pub struct RootGenerator {
    seed: Seed,
    private_gen: PrivKey,
    public_gen: PubKey,
    max_resamples: u32,
    network: Network
}

impl RootGenerator {
    /**
        Derives the root generator of a seed.
        Fails for an invalid seed.
    */
    pub fn from_seed(seed: &Seed, max_resamples: u32, network: Network) -> KeyResult<Self> {
        let bytes = seed.as_bytes().ok_or(KeyError::InvalidSeed)?;

        let (scalar, hashes) = resample(max_resamples, |i| sha512_half(append_int(bytes, i)))?;
        let private_gen = PrivKey::from_slice(&scalar)?;
        let public_gen = PubKey::from_priv_key(&private_gen);
        debug!(hashes, "derived root generator");

        Ok(Self {
            seed: *seed,
            private_gen,
            public_gen,
            max_resamples,
            network
        })
    }

    pub fn private_gen(&self) -> &PrivKey {
        &self.private_gen
    }

    pub fn public_gen(&self) -> &PubKey {
        &self.public_gen
    }

    /**
        The compressed public generator: 0x02 for an even y (0x03 for odd) followed by x.
    */
    pub fn compressed(&self) -> [u8; 33] {
        self.public_gen.compressed()
    }

    /**
        Derives the key pair of one account.
    */
    pub fn account(&self, index: u32) -> KeyResult<KeyPair> {
        let public_gen = append_int(&self.compressed(), index);
        let (scalar, hashes) = resample(self.max_resamples, |i| sha512_half(append_int(&public_gen, i)))?;
        trace!(index, hashes, "derived account scalar");

        //(scalar + private_gen) mod order
        let mut secret = *self.private_gen.inner();
        secret.add_assign(&scalar)?;

        Ok(KeyPair::from(secret))
    }

    /**
        Derives the key pairs for a range of accounts.
    */
    pub fn accounts(&self, indices: Range<u32>) -> KeyResult<Vec<KeyPair>> {
        indices.map(|i| self.account(i)).collect()
    }

    /**
        Walks accounts from `start`, at most `max_attempts` of them.

        Without a target the first account is returned. With a target the
        first account whose address matches is returned, or an error once
        the attempts run out.
    */
    pub fn search(&self, start: u32, max_attempts: u32, target: Option<&AccountId>) -> KeyResult<AccountKey> {
        let target = match target {
            Some(address) => address,
            None => return Ok(AccountKey { index: start, key_pair: self.account(start)? })
        };

        let mut account_number = start;
        for _ in 0..max_attempts.max(1) {
            let index = account_number;
            let key_pair = self.account(index)?;

            if key_pair.address() == *target {
                debug!(index, address = %target.encode(self.network), "found matching account");
                return Ok(AccountKey { index, key_pair })
            }

            account_number = match account_number.checked_add(1) {
                Some(n) => n,
                None => break
            };
        }

        let target = target.encode(self.network);
        let seed = self.seed.serialize_for(self.network).unwrap_or_default();
        warn!(address = %target, max_attempts, "no account matched the target address");

        Err(KeyError::AttemptsExhausted {
            target,
            seed,
            attempts: max_attempts
        })
    }

    /**
        Searches accounts 0..max_attempts for the one with the given address.
    */
    pub fn find(&self, address: &AccountId, max_attempts: u32) -> KeyResult<AccountKey> {
        self.search(0, max_attempts, Some(address))
    }
}
