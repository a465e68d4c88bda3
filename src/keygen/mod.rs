/*
    This module derives account key pairs from family seeds,
    the way the Ripple family of ledgers does it.

    seed -> root generator -> account n key pair
*/

pub mod generator;

pub use generator::{ AccountKey, RootGenerator, below_order };

use crate::{
    address::AccountId,
    config::KeyGenConfig,
    error::{ KeyError, KeyResult },
    seed::Seed
};
use tracing::warn;

/**
    Selects the account to derive.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Account {
    /// Account 0
    Default,
    /// A specific account number
    Index(u32),
    /// Search for the account with this address
    Address(AccountId)
}

impl Default for Account {
    fn default() -> Self {
        Account::Default
    }
}

impl From<u32> for Account {
    fn from(index: u32) -> Self {
        Account::Index(index)
    }
}

impl From<AccountId> for Account {
    fn from(address: AccountId) -> Self {
        Account::Address(address)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGenerator {
    config: KeyGenConfig
}

impl KeyGenerator {
    pub fn new(config: KeyGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /**
        Derives the root generator of a seed.
    */
    pub fn derive_generator(&self, seed: &Seed) -> KeyResult<RootGenerator> {
        RootGenerator::from_seed(seed, self.config.max_resamples, self.config.network)
    }

    /**
        Derives an account key pair from a seed.

        * Account::Default derives account 0.
        * Account::Index(n) derives account n. The attempt bound becomes n + 1,
          which is exactly enough to reach n, and `max_attempts` is ignored.
        * Account::Address(a) derives accounts 0, 1, 2... until one has address a,
          giving up after `max_attempts` accounts.

        `max_attempts` defaults to 1 (None and Some(0) both mean 1).
    */
    pub fn derive_account_key(&self, seed: &Seed, account: Account, max_attempts: Option<u32>) -> KeyResult<AccountKey> {
        if !seed.is_valid() {
            return Err(KeyError::InvalidSeed)
        }

        let max_attempts = match (account, max_attempts) {
            (Account::Index(n), _) => n.saturating_add(1),
            (_, Some(requested)) if requested > self.config.max_attempts_cap => {
                warn!(requested, cap = self.config.max_attempts_cap, "max attempts over the configured cap");
                return Err(KeyError::AttemptsOverCap { requested, cap: self.config.max_attempts_cap })
            },
            (_, requested) => requested.unwrap_or(1).max(1)
        };

        let generator = self.derive_generator(seed)?;
        match account {
            Account::Default => generator.search(0, max_attempts, None),
            Account::Index(n) => generator.search(n, max_attempts, None),
            Account::Address(address) => generator.search(0, max_attempts, Some(&address))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Network;

    fn master_seed() -> Seed {
        Seed::parse_passphrase("masterpassphrase")
    }

    #[test]
    fn default_account_is_index_zero() {
        let kg = KeyGenerator::default();
        let default = kg.derive_account_key(&master_seed(), Account::Default, None).unwrap();
        let zero = kg.derive_account_key(&master_seed(), Account::Index(0), None).unwrap();

        assert_eq!(default, zero);
        assert_eq!(default.index, 0);
    }

    #[test]
    fn index_ignores_max_attempts() {
        let kg = KeyGenerator::default();
        let key = kg.derive_account_key(&master_seed(), Account::Index(7), Some(1)).unwrap();
        let generator = kg.derive_generator(&master_seed()).unwrap();

        assert_eq!(key.index, 7);
        assert_eq!(key.key_pair, generator.account(7).unwrap());
    }

    #[test]
    fn invalid_seed_is_an_error() {
        let kg = KeyGenerator::default();
        assert_eq!(
            kg.derive_account_key(&Seed::Invalid, Account::Default, None),
            Err(KeyError::InvalidSeed)
        );
        assert_eq!(kg.derive_generator(&Seed::parse("")).err(), Some(KeyError::InvalidSeed));
    }

    #[test]
    fn attempts_over_cap() {
        let kg = KeyGenerator::new(KeyGenConfig::default().with_max_attempts_cap(10));
        let target = kg.derive_account_key(&master_seed(), Account::Index(2), None).unwrap().key_pair.address();

        assert_eq!(
            kg.derive_account_key(&master_seed(), Account::Address(target), Some(11)),
            Err(KeyError::AttemptsOverCap { requested: 11, cap: 10 })
        );
        assert_eq!(kg.derive_account_key(&master_seed(), Account::Address(target), Some(10)).unwrap().index, 2);
    }

    #[test]
    fn search_by_address() {
        let kg = KeyGenerator::default();
        let target = kg.derive_account_key(&master_seed(), Account::Index(4), None).unwrap().key_pair.address();

        let found = kg.derive_account_key(&master_seed(), target.into(), Some(5)).unwrap();
        assert_eq!(found.index, 4);
        assert_eq!(found.key_pair.address(), target);

        //Default budget is a single account
        assert!(matches!(
            kg.derive_account_key(&master_seed(), target.into(), None),
            Err(KeyError::AttemptsExhausted { attempts: 1, .. })
        ));
    }

    #[test]
    fn exhausted_error_names_target_and_seed() {
        let kg = KeyGenerator::new(KeyGenConfig::default().with_network(Network::Ripple));
        let target: AccountId = "jHb9CJAWyB4jr91VRWn96DkukG4bwdtyTh".parse().unwrap();
        let other_seed = Seed::parse_passphrase("not the master passphrase");

        let err = kg.derive_account_key(&other_seed, Account::Address(target), Some(3)).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"));
        assert!(message.contains(&other_seed.serialize_for(Network::Ripple).unwrap()));
    }
}
