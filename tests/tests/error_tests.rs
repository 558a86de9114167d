//! Hostile and malformed inputs are errors, never panics

use keyseal_algorithms::ber_to_der;
use keyseal_api::ErrorKind;
use keyseal_pkcs::PemBlock;
use keyseal_tests::codec;
use keyseal_tests::fixtures::*;

fn der(text: &str) -> Vec<u8> {
    PemBlock::decode(text).unwrap().contents
}

#[test]
fn test_every_truncation_is_an_error() {
    let codec = codec();
    for fixture in [RSA_PKCS8, DSA_PKCS8, EC_PKCS8, SM2_PKCS8] {
        let bytes = der(fixture);
        for len in 0..bytes.len() {
            assert!(codec.parse_private_key(&bytes[..len]).is_err(), "prefix {len}");
        }
    }
    for fixture in [RSA_SPKI, DSA_SPKI, EC_SPKI, SM2_SPKI] {
        let bytes = der(fixture);
        for len in 0..bytes.len() {
            assert!(codec.parse_public_key(&bytes[..len]).is_err(), "prefix {len}");
        }
    }
    let sealed = der(EC_PBES2_AES256);
    for len in 0..sealed.len() {
        assert!(codec.parse_encrypted_private_key(&sealed[..len], PASSWORD).is_err());
    }
}

#[test]
fn test_single_byte_corruption_never_panics() {
    let codec = codec();
    let bytes = der(EC_PKCS8);
    for at in 0..bytes.len() {
        for flip in [0x01u8, 0x80, 0xff] {
            let mut corrupt = bytes.clone();
            corrupt[at] ^= flip;
            let _ = codec.parse_private_key(&corrupt);
        }
    }
}

#[test]
fn test_indefinite_length_pkcs8_is_normalized() {
    let codec = codec();
    let definite = der(EC_PKCS8);
    assert_eq!(&definite[..3], &[0x30, 0x81, 0x87]);

    let mut indefinite = vec![0x30, 0x80];
    indefinite.extend_from_slice(&definite[3..]);
    indefinite.extend_from_slice(&[0x00, 0x00]);

    assert_eq!(ber_to_der(&indefinite).unwrap(), definite);
    assert_eq!(
        codec.parse_private_key(&indefinite).unwrap(),
        codec.parse_private_key(&definite).unwrap()
    );
}

#[test]
fn test_trailing_data_is_malformed() {
    let codec = codec();
    let mut bytes = der(RSA_PKCS8);
    bytes.push(0x00);
    let err = codec.parse_private_key(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);

    let mut bytes = der(EC_SPKI);
    bytes.extend_from_slice(&[0x05, 0x00]);
    let err = codec.parse_public_key(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedEncoding);
}

#[test]
fn test_private_key_under_public_label() {
    let codec = codec();
    let text = PemBlock::new("PUBLIC KEY", der(EC_PKCS8)).encode();
    assert!(codec.parse_pem_public_key(&text).is_err());

    let text = PemBlock::new("PRIVATE KEY", der(EC_SPKI)).encode();
    assert!(codec.parse_pem_private_key(&text, None).is_err());
}

#[test]
fn test_mislabelled_traditional_block() {
    let codec = codec();
    let block = PemBlock::decode(EC_SEC1).unwrap();
    let text = PemBlock::new("RSA PRIVATE KEY", block.contents).encode();
    assert!(codec.parse_pem_private_key(&text, None).is_err());

    let block = PemBlock::decode(DSA_TRADITIONAL).unwrap();
    let text = PemBlock::new("EC PRIVATE KEY", block.contents).encode();
    assert!(codec.parse_pem_private_key(&text, None).is_err());
}

#[test]
fn test_corrupt_ciphertext_is_decryption_failure() {
    let codec = codec();
    let mut block = PemBlock::decode(EC_PBES2_AES256).unwrap();
    let last = block.contents.len() - 1;
    block.contents[last] ^= 0x5a;
    let err = codec
        .parse_pem_private_key(&block.encode(), Some(PASSWORD))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecryptionFailure);
}
