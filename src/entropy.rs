use rand::RngCore;

use crate::{
    OsRng
};

/**
    Generates random bytes using OsRng
*/
pub fn random_bytes<const N: usize>() -> Result<[u8; N], rand::Error> {
    let mut osrng = OsRng::new()?;
    let mut bytes = [0u8; N];
    osrng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}
