/*
    Settings for the key generator.
*/

use crate::util::Network;

/// Default upper bound for the number of accounts an address search may visit.
pub const DEFAULT_MAX_ATTEMPTS_CAP: u32 = 1_000_000;

/// Default upper bound for one reject and resample loop.
/// A sha512 half lands above the curve order with probability ~2^-128.
pub const DEFAULT_MAX_RESAMPLES: u32 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Alphabet used for seed and address strings in errors and logs.
    pub network: Network,
    /// A caller asking for more search attempts than this gets an error.
    pub max_attempts_cap: u32,
    /// Hashes tried before a scalar below the curve order is given up on.
    pub max_resamples: u32
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            max_attempts_cap: DEFAULT_MAX_ATTEMPTS_CAP,
            max_resamples: DEFAULT_MAX_RESAMPLES
        }
    }
}

impl KeyGenConfig {
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_max_attempts_cap(mut self, cap: u32) -> Self {
        self.max_attempts_cap = cap;
        self
    }

    pub fn with_max_resamples(mut self, limit: u32) -> Self {
        self.max_resamples = limit;
        self
    }
}
