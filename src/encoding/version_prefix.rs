/*
    Version bytes prepended to base58 check encoded payloads.
    The prefix is what makes a family seed start with an 's'
    and an account id start with a 'j' (or 'r' on Ripple).
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrefix {
    AccountId = 0x00,
    FamilySeed = 0x21,
    AccountPublic = 0x23,
    AccountSecret = 0x22
}

impl VersionPrefix {
    pub fn to_byte(&self) -> u8 {
        *self as u8
    }

    /**
        Number of payload bytes expected after this prefix.
    */
    pub fn payload_len(&self) -> usize {
        match self {
            VersionPrefix::AccountId => 20,
            VersionPrefix::FamilySeed => 16,
            VersionPrefix::AccountPublic => 33,
            VersionPrefix::AccountSecret => 32
        }
    }
}
