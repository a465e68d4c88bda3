/*
    Module that bundles together the encoding schemes used for
    seeds, keys and account ids.
*/

pub mod version_prefix;
pub mod base58;
pub use version_prefix::VersionPrefix as VersionPrefix;
pub use base58::Base58 as Base58;
