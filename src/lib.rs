#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Signing and verifying with PEM keys
//!
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use rsa::{RsaPrivateKey, RsaPublicKey};
//! use rsa_signature::{encoding, pkcs1v15, PublicKeyEncoding};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::from_seed([0; 32]);
//! # use rand_chacha::rand_core::SeedableRng;
//!
//! let private_key = RsaPrivateKey::new(&mut rng, 1024).expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! let private_pem = encoding::encode_private_key_pem(&private_key).unwrap();
//! let public_pem = encoding::encode_public_key_pem(&public_key, PublicKeyEncoding::Pkix).unwrap();
//!
//! // Sign
//! let signature = pkcs1v15::sign(private_pem.as_bytes(), "пример".as_bytes()).unwrap();
//!
//! // Verify
//! assert!(pkcs1v15::verify(public_pem.as_bytes(), &signature, "пример".as_bytes()).unwrap());
//! assert!(!pkcs1v15::verify(public_pem.as_bytes(), &signature, "пример2".as_bytes()).unwrap());
//! ```
//!
//! ## Key encodings
//!
//! | Key     | Encoding                      | PEM label         |
//! |---------|-------------------------------|-------------------|
//! | Private | PKCS#1 `RSAPrivateKey`        | `RSA PRIVATE KEY` |
//! | Public  | PKCS#1 `RSAPublicKey`         | `RSA PUBLIC KEY`  |
//! | Public  | PKIX `SubjectPublicKeyInfo`   | `PUBLIC KEY`      |
//!
//! [`pkcs1v15::verify`] accepts either public key encoding and detects which
//! one it was given from the DER structure. PKIX keys for algorithms other
//! than RSA are rejected with [`Error::UnsupportedKeyType`].

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use rand_core;
pub use rsa;

pub mod algorithm;
pub mod encoding;
pub mod errors;
pub mod pkcs1v15;

pub use crate::{
    algorithm::KeyType,
    encoding::PublicKeyEncoding,
    errors::{DecodeError, EncodeError, Error, Result},
};
