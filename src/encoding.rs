//! PEM encoding and decoding of RSA keys.
//!
//! Private keys use the PKCS#1 `RSAPrivateKey` structure under the
//! `RSA PRIVATE KEY` label. Public keys are supported in two encodings, see
//! [`PublicKeyEncoding`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use base64ct::{Base64, Encoding};
use der::{asn1::AnyRef, Decode, Reader, SliceReader, Tag, Tagged};
use pem_rfc7468::LineEnding;
use pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use pkcs8::EncodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use spki::SubjectPublicKeyInfoRef;
use zeroize::Zeroizing;

use crate::algorithm::KeyType;
use crate::errors::{DecodeError, Error, Result};

/// PEM type label of a PKCS#1 private key.
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// PEM type label of a PKCS#1 public key.
pub const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

/// PEM type label of a PKIX `SubjectPublicKeyInfo` public key.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// DER structure of an encoded RSA public key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PublicKeyEncoding {
    /// Bare PKCS#1 `RSAPublicKey`: `SEQUENCE { modulus, publicExponent }`.
    Pkcs1,

    /// PKIX `SubjectPublicKeyInfo` wrapping a PKCS#1 key with an
    /// `rsaEncryption` algorithm identifier.
    Pkix,
}

impl PublicKeyEncoding {
    /// PEM type label written for, and required of, this encoding.
    pub fn label(self) -> &'static str {
        match self {
            PublicKeyEncoding::Pkcs1 => RSA_PUBLIC_KEY_LABEL,
            PublicKeyEncoding::Pkix => PUBLIC_KEY_LABEL,
        }
    }
}

/// Determine which public key structure a DER document holds.
///
/// Both structures are an outer `SEQUENCE`; PKCS#1 starts with the modulus
/// `INTEGER` while `SubjectPublicKeyInfo` starts with the algorithm
/// identifier `SEQUENCE`.
pub fn public_key_encoding_of(
    der_bytes: &[u8],
) -> core::result::Result<PublicKeyEncoding, der::Error> {
    let outer = AnyRef::from_der(der_bytes)?;
    outer.tag().assert_eq(Tag::Sequence)?;

    let reader = SliceReader::new(outer.value())?;
    match reader.peek_tag()? {
        Tag::Integer => Ok(PublicKeyEncoding::Pkcs1),
        Tag::Sequence => Ok(PublicKeyEncoding::Pkix),
        actual => Err(der::ErrorKind::TagUnexpected {
            expected: Some(Tag::Sequence),
            actual,
        }
        .into()),
    }
}

/// Decode a PKCS#1 RSA private key from a PEM document labeled
/// `RSA PRIVATE KEY`.
pub fn decode_private_key_pem(pem: &[u8]) -> Result<RsaPrivateKey> {
    let der_bytes = Zeroizing::new(decode_pem(pem, &[RSA_PRIVATE_KEY_LABEL])?);
    RsaPrivateKey::from_pkcs1_der(&der_bytes).map_err(|e| DecodeError::from(e).into())
}

/// Decode an RSA public key stored with the given `encoding`.
///
/// The PEM label must be the one [`PublicKeyEncoding::label`] names.
pub fn decode_public_key_pem(pem: &[u8], encoding: PublicKeyEncoding) -> Result<RsaPublicKey> {
    let der_bytes = decode_pem(pem, &[encoding.label()])?;
    decode_public_key_der(&der_bytes, encoding)
}

/// Decode an RSA public key in either encoding.
///
/// Accepts both public key labels and picks the parser from the DER
/// structure, so documents whose label disagrees with their payload (e.g.
/// PKIX DER under `RSA PUBLIC KEY`) are still read.
pub fn decode_any_public_key_pem(pem: &[u8]) -> Result<RsaPublicKey> {
    let der_bytes = decode_pem(pem, &[PUBLIC_KEY_LABEL, RSA_PUBLIC_KEY_LABEL])?;
    let encoding = public_key_encoding_of(&der_bytes).map_err(DecodeError::from)?;
    decode_public_key_der(&der_bytes, encoding)
}

/// Decode a DER encoded RSA public key stored with the given `encoding`.
pub fn decode_public_key_der(
    der_bytes: &[u8],
    encoding: PublicKeyEncoding,
) -> Result<RsaPublicKey> {
    match encoding {
        PublicKeyEncoding::Pkcs1 => {
            RsaPublicKey::from_pkcs1_der(der_bytes).map_err(|e| DecodeError::from(e).into())
        }
        PublicKeyEncoding::Pkix => {
            let spki = SubjectPublicKeyInfoRef::from_der(der_bytes).map_err(DecodeError::from)?;

            let key_type = KeyType::from_oid(spki.algorithm.oid);
            if !key_type.is_rsa() {
                log::debug!("rejecting {} public key", key_type);
                return Err(Error::UnsupportedKeyType(key_type));
            }

            RsaPublicKey::try_from(spki).map_err(|e| DecodeError::from(e).into())
        }
    }
}

/// Encode an RSA private key as a PKCS#1 PEM document labeled
/// `RSA PRIVATE KEY`.
pub fn encode_private_key_pem(private_key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    let der = private_key.to_pkcs1_der().map_err(|e| Error::Encode(e.into()))?;
    let pem = pem_rfc7468::encode_string(RSA_PRIVATE_KEY_LABEL, LineEnding::LF, der.as_bytes())
        .map_err(|e| Error::Encode(e.into()))?;
    Ok(Zeroizing::new(pem))
}

/// Encode an RSA public key as a PEM document in the given `encoding`.
pub fn encode_public_key_pem(
    public_key: &RsaPublicKey,
    encoding: PublicKeyEncoding,
) -> Result<String> {
    let der = match encoding {
        PublicKeyEncoding::Pkcs1 => public_key
            .to_pkcs1_der()
            .map_err(|e| Error::Encode(e.into()))?,
        PublicKeyEncoding::Pkix => public_key
            .to_public_key_der()
            .map_err(|e| Error::Encode(e.into()))?,
    };

    pem_rfc7468::encode_string(encoding.label(), LineEnding::LF, der.as_bytes())
        .map_err(|e| Error::Encode(e.into()))
}

/// Decode the first PEM block in `pem`, whose label must be one of `labels`.
fn decode_pem(pem: &[u8], labels: &[&'static str]) -> Result<Vec<u8>> {
    let (label, body) = find_pem_block(pem).map_err(DecodeError::from)?;

    if !labels.iter().any(|expected| *expected == label) {
        log::debug!("rejecting PEM document labeled {:?}", label);
        return Err(DecodeError::Label {
            expected: labels[0],
            found: label.to_string(),
        }
        .into());
    }

    let base64: Zeroizing<Vec<u8>> = Zeroizing::new(
        body.iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect(),
    );
    let base64 = core::str::from_utf8(&base64)
        .map_err(|_| DecodeError::from(pem_rfc7468::Error::CharacterEncoding))?;

    Base64::decode_vec(base64)
        .map_err(|e| DecodeError::from(pem_rfc7468::Error::Base64(e)).into())
}

const PRE_ENCAPSULATION_BOUNDARY: &[u8] = b"-----BEGIN ";
const POST_ENCAPSULATION_BOUNDARY: &[u8] = b"-----END ";
const ENCAPSULATION_BOUNDARY_DELIMITER: &[u8] = b"-----";

/// Locate the first complete PEM block, returning its label and the text
/// between its boundaries.
///
/// Text around the block is ignored, and the body may be wrapped at any
/// width. A `BEGIN` line without a matching `END` boundary is skipped.
fn find_pem_block(pem: &[u8]) -> core::result::Result<(&str, &[u8]), pem_rfc7468::Error> {
    let mut error = pem_rfc7468::Error::PreEncapsulationBoundary;
    let mut rest = pem;

    while let Some(start) = find(rest, PRE_ENCAPSULATION_BOUNDARY) {
        rest = &rest[start + PRE_ENCAPSULATION_BOUNDARY.len()..];

        let line_end = find(rest, b"\n").unwrap_or(rest.len());
        let line = trim_end(&rest[..line_end]);
        let label = match line.strip_suffix(ENCAPSULATION_BOUNDARY_DELIMITER) {
            Some(label) => label,
            None => {
                error = pem_rfc7468::Error::PreEncapsulationBoundary;
                continue;
            }
        };
        let label = match core::str::from_utf8(label) {
            Ok(label) => label,
            Err(_) => {
                error = pem_rfc7468::Error::Label;
                continue;
            }
        };

        let body = &rest[line_end..];
        let mut end_boundary = Vec::from(POST_ENCAPSULATION_BOUNDARY);
        end_boundary.extend_from_slice(label.as_bytes());
        end_boundary.extend_from_slice(ENCAPSULATION_BOUNDARY_DELIMITER);

        match find(body, &end_boundary) {
            Some(end) => return Ok((label, &body[..end])),
            None => error = pem_rfc7468::Error::PostEncapsulationBoundary,
        }
    }

    Err(error)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim_end(mut bytes: &[u8]) -> &[u8] {
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}
