//! Error types.

use alloc::string::String;
use core::fmt;

use crate::algorithm::KeyType;

/// Alias for [`core::result::Result`] with the `rsa-signature` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed or mismatched PEM, DER or Base64 input.
    Decode(DecodeError),

    /// A well-formed key of an algorithm other than RSA.
    UnsupportedKeyType(KeyType),

    /// The RSA signing primitive failed.
    Signing(rsa::Error),

    /// The RSA verification primitive failed for a reason other than a
    /// signature mismatch.
    Verification(rsa::Error),

    /// A key could not be serialized.
    Encode(EncodeError),
}

/// Cause of an [`Error::Decode`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// PEM framing is missing or malformed.
    Pem(pem_rfc7468::Error),

    /// The PEM type label does not match the expected key kind.
    Label {
        /// Label required by the decoder.
        expected: &'static str,
        /// Label found in the document.
        found: String,
    },

    /// DER payload is not a well-formed ASN.1 structure.
    Der(der::Error),

    /// DER payload is not a valid PKCS#1 key.
    Pkcs1(pkcs1::Error),

    /// DER payload is not a valid `SubjectPublicKeyInfo`.
    Spki(spki::Error),

    /// Signature text is not valid standard Base64.
    Base64(base64ct::Error),
}

/// Cause of an [`Error::Encode`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum EncodeError {
    /// PKCS#1 serialization failed.
    Pkcs1(pkcs1::Error),

    /// `SubjectPublicKeyInfo` serialization failed.
    Spki(spki::Error),

    /// PEM armoring failed.
    Pem(pem_rfc7468::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "decode error: {}", err),
            Error::UnsupportedKeyType(key_type) => {
                write!(f, "unexpected public key type {}", key_type)
            }
            Error::Signing(err) => write!(f, "signing error: {}", err),
            Error::Verification(err) => write!(f, "verification error: {}", err),
            Error::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Pem(err) => write!(f, "PEM: {}", err),
            DecodeError::Label { expected, found } => write!(
                f,
                "PEM type label mismatch: expected \"{}\", found \"{}\"",
                expected, found
            ),
            DecodeError::Der(err) => write!(f, "DER: {}", err),
            DecodeError::Pkcs1(err) => write!(f, "PKCS#1: {}", err),
            DecodeError::Spki(err) => write!(f, "SPKI: {}", err),
            DecodeError::Base64(err) => write!(f, "Base64: {}", err),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Pkcs1(err) => write!(f, "PKCS#1: {}", err),
            EncodeError::Spki(err) => write!(f, "SPKI: {}", err),
            EncodeError::Pem(err) => write!(f, "PEM: {}", err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Error {
        Error::Decode(err)
    }
}

impl From<pem_rfc7468::Error> for DecodeError {
    fn from(err: pem_rfc7468::Error) -> DecodeError {
        DecodeError::Pem(err)
    }
}

impl From<der::Error> for DecodeError {
    fn from(err: der::Error) -> DecodeError {
        DecodeError::Der(err)
    }
}

impl From<pkcs1::Error> for DecodeError {
    fn from(err: pkcs1::Error) -> DecodeError {
        DecodeError::Pkcs1(err)
    }
}

impl From<spki::Error> for DecodeError {
    fn from(err: spki::Error) -> DecodeError {
        DecodeError::Spki(err)
    }
}

impl From<base64ct::Error> for DecodeError {
    fn from(err: base64ct::Error) -> DecodeError {
        DecodeError::Base64(err)
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Error {
        Error::Encode(err)
    }
}

impl From<pkcs1::Error> for EncodeError {
    fn from(err: pkcs1::Error) -> EncodeError {
        EncodeError::Pkcs1(err)
    }
}

impl From<spki::Error> for EncodeError {
    fn from(err: spki::Error) -> EncodeError {
        EncodeError::Spki(err)
    }
}

impl From<pem_rfc7468::Error> for EncodeError {
    fn from(err: pem_rfc7468::Error) -> EncodeError {
        EncodeError::Pem(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Encode(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}
