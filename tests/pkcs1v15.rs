//! Known-answer tests against fixed 2048-bit key fixtures.

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa::{RsaPrivateKey, RsaPublicKey};
use rsa_signature::{encoding, pkcs1v15, DecodeError, Error, PublicKeyEncoding};

const PRIVATE_KEY_PEM: &str = include_str!("examples/pkcs1/rsa2048-priv.pem");
const PKIX_PUBLIC_KEY_PEM: &str = include_str!("examples/pkix/rsa2048-pub.pem");
const PKCS1_PUBLIC_KEY_PEM: &str = include_str!("examples/pkcs1/rsa2048-pub.pem");

// Signature of "пример" under the fixture key.
const SIGNATURE: &str = "dchEsKOm7cdxW/LAPovvEe2iv6LUOlF4q1XpNSbxc61/0dCpm83liVBGnsTTufa2VWqslYEqyXlQFYOPXcLznTBYqTON8laskgd9LK/QXzUKnE3pErmzrgZ8dmGct5HLElTbuuja7iRAaBGB6ka6G8a6dZDfQfGEYtx+QEGg+og3TSSZdP9HAVeFlKmQOp9j5AY/r3q4ys0aWAMceIuR9C9vQ3q8h3WA53AxT5lmwhhP7QzIDwFY3oWj0ZpukleLQYAT1QN5rer0Q6ThsnO5DsxtnI5y1tLOIemsvRtoqUXRBFJSBO6g3im03XkvLzg9BerDJvwydGCmpTa9PFchYA==";

#[test]
fn verify_known_signature() {
    let tests = [("пример", true), ("пример2", false)];

    for public_key_pem in [PKIX_PUBLIC_KEY_PEM, PKCS1_PUBLIC_KEY_PEM] {
        for (text, expected) in &tests {
            let result = pkcs1v15::verify(public_key_pem.as_bytes(), SIGNATURE, text.as_bytes())
                .expect("verification should not error");
            assert_eq!(result, *expected, "{:?}", text);
        }
    }
}

#[test]
fn sign_matches_known_signature() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let signature =
        pkcs1v15::sign_with_rng(&mut rng, PRIVATE_KEY_PEM.as_bytes(), "пример".as_bytes()).unwrap();
    assert_eq!(signature, SIGNATURE);
}

#[cfg(feature = "getrandom")]
#[test]
fn sign_with_os_rng() {
    let signature = pkcs1v15::sign(PRIVATE_KEY_PEM.as_bytes(), "пример".as_bytes()).unwrap();
    assert_eq!(signature, SIGNATURE);
}

#[test]
fn public_key_derived_from_private_key() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let private_key = encoding::decode_private_key_pem(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let public_pem =
        encoding::encode_public_key_pem(&RsaPublicKey::from(&private_key), PublicKeyEncoding::Pkix)
            .unwrap();

    assert_eq!(public_pem, PKIX_PUBLIC_KEY_PEM);

    let signature =
        pkcs1v15::sign_with_rng(&mut rng, PRIVATE_KEY_PEM.as_bytes(), "пример".as_bytes()).unwrap();
    assert!(pkcs1v15::verify(public_pem.as_bytes(), &signature, "пример".as_bytes()).unwrap());
}

#[test]
fn generate_keys_then_sign_and_verify() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    let private_key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let private_pem = encoding::encode_private_key_pem(&private_key).unwrap();
    let public_pem =
        encoding::encode_public_key_pem(&RsaPublicKey::from(&private_key), PublicKeyEncoding::Pkix)
            .unwrap();

    let signature =
        pkcs1v15::sign_with_rng(&mut rng, private_pem.as_bytes(), "пример".as_bytes()).unwrap();
    assert!(pkcs1v15::verify(public_pem.as_bytes(), &signature, "пример".as_bytes()).unwrap());
    assert!(!pkcs1v15::verify(public_pem.as_bytes(), &signature, "пример2".as_bytes()).unwrap());
}

#[test]
fn verify_signature_from_other_key_is_mismatch() {
    let mut rng = ChaCha8Rng::from_seed([8; 32]);
    let other_key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let signature = pkcs1v15::sign_key_with_rng(&mut rng, &other_key, "пример".as_bytes()).unwrap();

    let result =
        pkcs1v15::verify(PKIX_PUBLIC_KEY_PEM.as_bytes(), &signature, "пример".as_bytes()).unwrap();
    assert!(!result);
}

#[test]
fn sign_rejects_public_key_pem() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let err = pkcs1v15::sign_with_rng(&mut rng, PKIX_PUBLIC_KEY_PEM.as_bytes(), b"msg").unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::Label {
            expected: "RSA PRIVATE KEY",
            found: "PUBLIC KEY".into(),
        })
    );
}

#[test]
fn verify_rejects_malformed_signature_text() {
    let err = pkcs1v15::verify(PKIX_PUBLIC_KEY_PEM.as_bytes(), "@@@@", b"msg").unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::Base64(_))));
}

/// Re-wrap the Base64 body of a PEM document at `width` columns.
fn rewrap_pem(pem: &str, width: usize) -> String {
    let lines: Vec<&str> = pem.lines().collect();
    let body: String = lines[1..lines.len() - 1].concat();
    let mut out = format!("{}\n", lines[0]);
    for chunk in body.as_bytes().chunks(width) {
        out.push_str(std::str::from_utf8(chunk).unwrap());
        out.push('\n');
    }
    out.push_str(lines[lines.len() - 1]);
    out.push('\n');
    out
}

#[test]
fn verify_with_76_column_public_key() {
    for public_key_pem in [PKIX_PUBLIC_KEY_PEM, PKCS1_PUBLIC_KEY_PEM] {
        let wrapped = rewrap_pem(public_key_pem, 76);
        assert_eq!(wrapped.lines().nth(1).unwrap().len(), 76);
        assert!(pkcs1v15::verify(wrapped.as_bytes(), SIGNATURE, "пример".as_bytes()).unwrap());
        assert!(!pkcs1v15::verify(wrapped.as_bytes(), SIGNATURE, "пример2".as_bytes()).unwrap());
    }
}

#[test]
fn sign_with_76_column_private_key() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let wrapped = rewrap_pem(PRIVATE_KEY_PEM, 76);
    let signature =
        pkcs1v15::sign_with_rng(&mut rng, wrapped.as_bytes(), "пример".as_bytes()).unwrap();
    assert_eq!(signature, SIGNATURE);
}

#[test]
fn sign_with_private_key_followed_by_public_key() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let bundle = format!("{}{}", PRIVATE_KEY_PEM, PKIX_PUBLIC_KEY_PEM);
    let signature =
        pkcs1v15::sign_with_rng(&mut rng, bundle.as_bytes(), "пример".as_bytes()).unwrap();
    assert_eq!(signature, SIGNATURE);
}

#[test]
fn verify_with_crlf_public_key_and_preamble() {
    let pem = format!("Subject: test key\r\n\r\n{}", PKIX_PUBLIC_KEY_PEM.replace('\n', "\r\n"));
    assert!(pkcs1v15::verify(pem.as_bytes(), SIGNATURE, "пример".as_bytes()).unwrap());
}

#[test]
fn verify_wrapped_signature_text() {
    let wrapped = SIGNATURE
        .as_bytes()
        .chunks(64)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\r\n");
    let result =
        pkcs1v15::verify(PKIX_PUBLIC_KEY_PEM.as_bytes(), &wrapped, "пример".as_bytes()).unwrap();
    assert!(result);
}
