use std::convert::TryInto;

/*
    Decodes hex strings into a byte vector
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(hex)
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Converts a vector into an array.
    Only used where the length is known ahead of time.
*/
pub fn try_into<T, const N: usize>(v: Vec<T>) -> [T; N] {
    v.try_into()
        .unwrap_or_else(|v: Vec<T>| panic!("Expected {}, found {}", N, v.len()))
}

/**
    Returns true if the string is exactly 32 hex characters (a raw 128 bit seed).
*/
pub fn is_hex_seed(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/**
    Selects the base58 alphabet used for seeds and addresses.
    Jingtum swaps the 'r' and 'j' of the Ripple alphabet, so that
    accounts start with 'j'.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    Jingtum,
    Ripple
}

impl Default for Network {
    fn default() -> Self {
        Network::Jingtum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_seed_detection() {
        assert!(is_hex_seed("DEDCE9CE67B451D852FD4E846FCDE31C"));
        assert!(is_hex_seed("dedce9ce67b451d852fd4e846fcde31c"));
        assert!(!is_hex_seed("DEDCE9CE67B451D852FD4E846FCDE31"));
        assert!(!is_hex_seed("DEDCE9CE67B451D852FD4E846FCDE31CC"));
        assert!(!is_hex_seed("GEDCE9CE67B451D852FD4E846FCDE31C"));
    }

    #[test]
    fn hex_round_trip() {
        let bytes = decode_02x("00ff10").unwrap();
        assert_eq!(bytes, vec![0x00, 0xff, 0x10]);
        assert_eq!(encode_02x(&bytes), "00ff10");
        assert!(decode_02x("0g").is_err());
    }
}
