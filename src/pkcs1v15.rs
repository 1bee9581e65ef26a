//! `RSASSA-PKCS1-v1_5` signatures over SHA-256 as described in [RFC8017 § 8.2].
//!
//! Signatures travel as standard, padded Base64 text. The hash and padding
//! are fixed: every signature is `RSASSA-PKCS1-v1_5` over a SHA-256 digest.
//!
//! [RFC8017 § 8.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-8.2

use alloc::{string::String, vec::Vec};
use base64ct::{Base64, Encoding};
use rand_core::CryptoRngCore;
use rsa::{traits::PublicKeyParts, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::encoding::{decode_any_public_key_pem, decode_private_key_pem};
use crate::errors::{DecodeError, Error, Result};

/// Sign `msg` with the PKCS#1 private key in `private_key_pem`, returning the
/// Base64 encoded signature.
///
/// `rng` is only used for RSA blinding; the signature itself is
/// deterministic for a given key and message.
pub fn sign_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    private_key_pem: &[u8],
    msg: &[u8],
) -> Result<String> {
    let private_key = decode_private_key_pem(private_key_pem)?;
    sign_key_with_rng(rng, &private_key, msg)
}

/// Sign `msg` with the PKCS#1 private key in `private_key_pem` using the
/// operating system's random number generator for blinding.
#[cfg(feature = "getrandom")]
pub fn sign(private_key_pem: &[u8], msg: &[u8]) -> Result<String> {
    sign_with_rng(&mut rand_core::OsRng, private_key_pem, msg)
}

/// Verify a Base64 encoded signature of `msg` against the public key in
/// `public_key_pem`.
///
/// The key may be either PKCS#1 or PKIX encoded. Returns `Ok(false)` when the
/// signature does not match; malformed input is an error.
pub fn verify(public_key_pem: &[u8], signature: &str, msg: &[u8]) -> Result<bool> {
    let public_key = decode_any_public_key_pem(public_key_pem)?;
    verify_key(&public_key, signature, msg)
}

/// Sign `msg` with an already decoded private key.
pub fn sign_key_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    private_key: &RsaPrivateKey,
    msg: &[u8],
) -> Result<String> {
    let hashed = Sha256::digest(msg);
    let signature = private_key
        .sign_with_rng(rng, Pkcs1v15Sign::new::<Sha256>(), &hashed)
        .map_err(Error::Signing)?;

    log::trace!(
        "signed {} byte message with {} bit key",
        msg.len(),
        private_key.size() * 8
    );
    Ok(encode_signature(&signature))
}

/// Verify a Base64 encoded signature of `msg` with an already decoded public key.
pub fn verify_key(public_key: &RsaPublicKey, signature: &str, msg: &[u8]) -> Result<bool> {
    let signature = decode_signature(signature)?;
    let hashed = Sha256::digest(msg);

    match public_key.verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, &signature) {
        Ok(()) => {
            log::trace!("verified signature with {} bit key", public_key.size() * 8);
            Ok(true)
        }
        Err(rsa::Error::Verification) => {
            log::debug!("signature mismatch");
            Ok(false)
        }
        Err(e) => Err(Error::Verification(e)),
    }
}

/// Encode raw signature bytes as standard, padded Base64.
pub fn encode_signature(signature: &[u8]) -> String {
    Base64::encode_string(signature)
}

/// Decode standard, padded Base64 signature text into raw bytes.
///
/// Line breaks (`\r`, `\n`) are skipped, so wrapped signature text decodes.
pub fn decode_signature(signature: &str) -> Result<Vec<u8>> {
    let unwrapped: String = signature
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    Base64::decode_vec(&unwrapped).map_err(|e| DecodeError::from(e).into())
}
