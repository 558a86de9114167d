//! Containers written by OpenSSL parse, and ours come out byte-identical

use keyseal_api::ErrorKind;
use keyseal_pkcs::pem::label;
use keyseal_pkcs::{KeyAlgorithm, PemBlock, PrivateKey, PublicKey};
use keyseal_tests::fixtures::*;
use keyseal_tests::{big, codec};

fn der(text: &str) -> Vec<u8> {
    PemBlock::decode(text).unwrap().contents
}

#[test]
fn test_rsa_every_container() {
    let codec = codec();
    let key = codec.parse_pem_private_key(RSA_PKCS8, None).unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Rsa);
    let PrivateKey::Rsa(rsa) = &key else {
        panic!("expected RSA, got {key:?}");
    };
    assert_eq!(rsa.public_key().bits(), 1024);

    assert_eq!(codec.parse_pem_private_key(RSA_PKCS1, None).unwrap(), key);
    assert_eq!(
        codec
            .parse_pem_private_key(RSA_LEGACY_AES128, Some(LEGACY_PASSWORD))
            .unwrap(),
        key
    );

    assert_eq!(*codec.marshal_private_key(&key).unwrap(), der(RSA_PKCS8));
    assert_eq!(*codec.private_key_to_pem(&key).unwrap(), RSA_PKCS8);
    assert_eq!(*codec.traditional_private_key_to_pem(&key).unwrap(), RSA_PKCS1);

    let public = codec.parse_pem_public_key(RSA_SPKI).unwrap();
    assert_eq!(public, key.public_key());
    assert_eq!(codec.public_key_to_pem(&public).unwrap(), RSA_SPKI);

    let PublicKey::Rsa(rsa_public) = codec.parse_pem_public_key(RSA_PKCS1_PUBLIC).unwrap() else {
        panic!("expected an RSA public key");
    };
    assert_eq!(&rsa_public, rsa.public_key());
    assert_eq!(codec.marshal_rsa_public_key(&rsa_public), der(RSA_PKCS1_PUBLIC));
}

#[test]
fn test_dsa_every_container() {
    let codec = codec();
    let key = codec.parse_pem_private_key(DSA_PKCS8, None).unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Dsa);
    assert_eq!(codec.parse_pem_private_key(DSA_TRADITIONAL, None).unwrap(), key);

    assert_eq!(*codec.private_key_to_pem(&key).unwrap(), DSA_PKCS8);
    assert_eq!(*codec.traditional_private_key_to_pem(&key).unwrap(), DSA_TRADITIONAL);

    let public = codec.parse_pem_public_key(DSA_SPKI).unwrap();
    assert_eq!(public, key.public_key());
    assert_eq!(codec.marshal_public_key(&public).unwrap(), der(DSA_SPKI));

    let PublicKey::Dsa(dsa) = public else {
        panic!("expected a DSA public key");
    };
    assert_eq!(dsa.parameters().q().bits(), 224);
    assert_eq!(dsa.parameters().p().bits(), 1024);
}

#[test]
fn test_ec_every_container() {
    let codec = codec();
    let key = codec.parse_pem_private_key(EC_PKCS8, None).unwrap();
    let PrivateKey::Ec(ec) = &key else {
        panic!("expected EC, got {key:?}");
    };
    assert_eq!(ec.scalar(), &big(EC_SCALAR));
    assert_eq!(ec.curve().name(), "P-256");

    assert_eq!(codec.parse_pem_private_key(EC_SEC1, None).unwrap(), key);
    assert_eq!(
        codec
            .parse_pem_private_key(EC_LEGACY_DES3, Some(LEGACY_PASSWORD))
            .unwrap(),
        key
    );
    for encrypted in [EC_PBES2_AES256, EC_PBES2_SCRYPT, EC_PKCS12_3DES, EC_PBES1_MD5_DES] {
        assert_eq!(
            codec.parse_pem_private_key(encrypted, Some(PASSWORD)).unwrap(),
            key
        );
    }
    assert_eq!(codec.parse_pem_public_key(EC_SPKI).unwrap(), key.public_key());
}

#[test]
fn test_sm2_keys_keep_their_algorithm() {
    let codec = codec();
    let key = codec.parse_pem_private_key(SM2_PKCS8, None).unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Sm2);
    let PrivateKey::Ec(sm2) = &key else {
        panic!("expected an SM2 key, got {key:?}");
    };
    assert_eq!(sm2.curve().name(), "sm2p256v1");
    assert_eq!(sm2.scalar(), &big(SM2_SCALAR));
    assert_eq!(*codec.private_key_to_pem(&key).unwrap(), SM2_PKCS8);

    let public = codec.parse_pem_public_key(SM2_SPKI).unwrap();
    assert_eq!(public.algorithm(), KeyAlgorithm::Sm2);
    assert_eq!(public, key.public_key());
    assert_eq!(codec.public_key_to_pem(&public).unwrap(), SM2_SPKI);

    let (pem_label, _) = codec.marshal_traditional_private_key(&key).unwrap();
    assert_eq!(pem_label, label::SM2_PRIVATE_KEY);
}

#[test]
fn test_openssl_fixtures_reject_wrong_password() {
    let codec = codec();
    for encrypted in [EC_PBES2_AES256, EC_PBES2_SCRYPT, EC_PKCS12_3DES, EC_PBES1_MD5_DES] {
        let err = codec
            .parse_pem_private_key(encrypted, Some(b"Correct-horse".as_slice()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecryptionFailure);
    }
    let err = codec.parse_pem_private_key(EC_PBES2_AES256, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    let err = codec.parse_pem_private_key(RSA_LEGACY_AES128, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}
