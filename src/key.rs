use crate::{
    Secp256k1,
    PublicKey,
    SecretKey,
    address::AccountId,
    encoding::{ Base58, VersionPrefix },
    error::KeyError,
    util::{ encode_02x, Network }
};
use secp256k1::{ Message, Signature };

/**
    Common behaviour of the secret and public halves of a key pair.
*/
pub trait Key {
    /**
        Serializes the key into bytes.
        32 bytes for secret keys, 33 (compressed) for public keys.
    */
    fn as_bytes(&self) -> Vec<u8>;

    /**
        Returns the key as a hex string.
    */
    fn as_hex(&self) -> String {
        encode_02x(&self.as_bytes())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivKey(SecretKey);

impl PrivKey {
    /**
        Use a predefined byte array as a secret key.
        Fails if the bytes are zero or not below the curve order.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        Ok(Self(SecretKey::from_slice(byte_array)?))
    }

    /**
        Export the secret key as Base58Check with the account secret prefix.
    */
    pub fn to_base58(&self, network: Network) -> String {
        Base58::new(Some(VersionPrefix::AccountSecret), &self.as_bytes(), network).check_encode()
    }

    pub(crate) fn inner(&self) -> &SecretKey {
        &self.0
    }
}

impl From<SecretKey> for PrivKey {
    fn from(k: SecretKey) -> Self {
        Self(k)
    }
}

impl Key for PrivKey {
    fn as_bytes(&self) -> Vec<u8> {
        self.0[..].to_vec()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PubKey(PublicKey);

impl PubKey {
    /**
        The public key of a secret key, G multiplied k times where k is the secret key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&Secp256k1::signing_only(), &k.0))
    }

    /**
        Use a predefined byte array (compressed or uncompressed) as a public key.
    */
    pub fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        Ok(Self(PublicKey::from_slice(byte_array)?))
    }

    /**
        Returns the compressed public key, prefix byte (0x02 / 0x03) followed by the x coordinate.
    */
    pub fn compressed(&self) -> [u8; 33] {
        self.0.serialize()
    }

    /**
        Export the public key as Base58Check with the account public key prefix.
    */
    pub fn to_base58(&self, network: Network) -> String {
        Base58::new(Some(VersionPrefix::AccountPublic), &self.compressed(), network).check_encode()
    }

    pub(crate) fn inner(&self) -> &PublicKey {
        &self.0
    }
}

impl From<PublicKey> for PubKey {
    fn from(k: PublicKey) -> Self {
        Self(k)
    }
}

impl Key for PubKey {
    fn as_bytes(&self) -> Vec<u8> {
        self.compressed().to_vec()
    }
}

/**
    A secp256k1 signing key pair for one account.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    secret: PrivKey,
    public: PubKey
}

impl KeyPair {
    pub fn from_priv_key(secret: PrivKey) -> Self {
        let public = PubKey::from_priv_key(&secret);
        Self { secret, public }
    }

    /**
        Builds a key pair from a raw 32 byte scalar.
    */
    pub fn from_slice(secret: &[u8]) -> Result<Self, KeyError> {
        Ok(Self::from_priv_key(PrivKey::from_slice(secret)?))
    }

    pub fn secret(&self) -> &PrivKey {
        &self.secret
    }

    pub fn public(&self) -> &PubKey {
        &self.public
    }

    /**
        The account id of this key pair, Ripemd160( Sha256( compressed public key ) )
    */
    pub fn address(&self) -> AccountId {
        AccountId::from_pub_key(&self.public)
    }

    /**
        Signs a 32 byte digest and returns the DER encoded signature.
    */
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Vec<u8>, KeyError> {
        let msg = Message::from_slice(digest)?;
        let sig = Secp256k1::signing_only().sign(&msg, self.secret.inner());
        Ok(sig.serialize_der().to_vec())
    }

    /**
        Verifies a DER encoded signature over a 32 byte digest against this key pair's public key.
    */
    pub fn verify(&self, digest: &[u8; 32], der_signature: &[u8]) -> bool {
        let (msg, sig) = match (Message::from_slice(digest), Signature::from_der(der_signature)) {
            (Ok(m), Ok(s)) => (m, s),
            _ => return false
        };
        Secp256k1::verification_only().verify(&msg, &sig, self.public.inner()).is_ok()
    }
}

impl From<SecretKey> for KeyPair {
    fn from(k: SecretKey) -> Self {
        Self::from_priv_key(PrivKey::from(k))
    }
}
