//! Public key algorithm identification for `SubjectPublicKeyInfo` documents.

use const_oid::ObjectIdentifier;
use core::fmt;

/// `rsaEncryption` (RFC 8017)
pub const RSA_ENCRYPTION: ObjectIdentifier = pkcs1::ALGORITHM_OID;

/// `id-RSASSA-PSS` (RFC 4055)
pub const ID_RSASSA_PSS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");

/// `id-dsa` (RFC 3279)
pub const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// `id-ecPublicKey` (RFC 5480)
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// `id-X25519` (RFC 8410)
pub const ID_X25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.110");

/// `id-X448` (RFC 8410)
pub const ID_X448: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.111");

/// `id-Ed25519` (RFC 8410)
pub const ID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// `id-Ed448` (RFC 8410)
pub const ID_ED448: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.113");

/// Key family named by a `SubjectPublicKeyInfo` algorithm identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyType {
    /// RSA (`rsaEncryption`).
    Rsa,
    /// RSA restricted to RSASSA-PSS.
    RsaPss,
    /// DSA.
    Dsa,
    /// Elliptic curve (ECDSA/ECDH).
    Ec,
    /// Ed25519.
    Ed25519,
    /// Ed448.
    Ed448,
    /// X25519.
    X25519,
    /// X448.
    X448,
    /// Any other algorithm.
    Unknown(ObjectIdentifier),
}

impl KeyType {
    /// Resolve the key family for an algorithm OID.
    pub fn from_oid(oid: ObjectIdentifier) -> Self {
        match oid {
            RSA_ENCRYPTION => KeyType::Rsa,
            ID_RSASSA_PSS => KeyType::RsaPss,
            ID_DSA => KeyType::Dsa,
            ID_EC_PUBLIC_KEY => KeyType::Ec,
            ID_ED25519 => KeyType::Ed25519,
            ID_ED448 => KeyType::Ed448,
            ID_X25519 => KeyType::X25519,
            ID_X448 => KeyType::X448,
            other => KeyType::Unknown(other),
        }
    }

    /// Is this a key usable for `RSASSA-PKCS1-v1_5`?
    pub fn is_rsa(&self) -> bool {
        matches!(self, KeyType::Rsa)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Rsa => f.write_str("RSA"),
            KeyType::RsaPss => f.write_str("RSASSA-PSS"),
            KeyType::Dsa => f.write_str("DSA"),
            KeyType::Ec => f.write_str("ECDSA"),
            KeyType::Ed25519 => f.write_str("Ed25519"),
            KeyType::Ed448 => f.write_str("Ed448"),
            KeyType::X25519 => f.write_str("X25519"),
            KeyType::X448 => f.write_str("X448"),
            KeyType::Unknown(oid) => write!(f, "unknown ({})", oid),
        }
    }
}
