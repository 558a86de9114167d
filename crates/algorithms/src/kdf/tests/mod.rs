//! Known-answer tests for the non-PBKDF2 KDFs and the shared trait surface

use super::*;
use crate::hash::HashAlgorithm;
use keyseal_api::ErrorKind;

fn hex_of(key: Zeroizing<Vec<u8>>) -> String {
    hex::encode(key.as_slice())
}

#[test]
fn test_pbkdf1_sha1() {
    let kdf = Pbkdf1::new(HashAlgorithm::Sha1, 1000).unwrap();
    let salt = hex::decode("7805e0f2c93b5a11").unwrap();
    assert_eq!(
        hex_of(kdf.derive(b"password", &salt, 16).unwrap()),
        "6b5e9279d1034c157ceb842592ea8254"
    );
}

#[test]
fn test_pbkdf1_length_limit() {
    let kdf = Pbkdf1::new(HashAlgorithm::Md5, 1).unwrap();
    assert!(kdf.derive(b"pw", b"saltsalt", 16).is_ok());
    assert_eq!(
        kdf.derive(b"pw", b"saltsalt", 17).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}

/// RFC 7914 section 12
#[test]
fn test_scrypt_rfc7914() {
    let kdf = Scrypt::new(16, 1, 1).unwrap();
    assert_eq!(
        hex_of(kdf.derive(b"", b"", 64).unwrap()),
        "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442\
         fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906"
    );
    let kdf = Scrypt::new(1024, 8, 16).unwrap();
    assert_eq!(
        hex_of(kdf.derive(b"password", b"NaCl", 64).unwrap()),
        "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162\
         2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
    );
}

#[test]
fn test_scrypt_short_output() {
    // DES keys are shorter than the scrypt crate's PHC minimum
    let kdf = Scrypt::new(16, 1, 1).unwrap();
    assert_eq!(kdf.derive(b"pw", b"salt", 8).unwrap().len(), 8);
}

#[test]
fn test_scrypt_rejects_bad_cost() {
    for n in [0u64, 1, 3, 1000] {
        assert_eq!(Scrypt::new(n, 8, 1).unwrap_err().kind(), ErrorKind::InvalidParameter);
    }
    assert!(Scrypt::new(16, 0, 1).is_err());
    assert!(Scrypt::new(16, 1, 0).is_err());
    assert_eq!(Scrypt::new(1 << 14, 8, 1).unwrap().cost(), 16384);
}

#[test]
fn test_bmp_password() {
    assert_eq!(
        bmp_password(b"smeg").unwrap().as_slice(),
        &[0, b's', 0, b'm', 0, b'e', 0, b'g', 0, 0]
    );
    assert_eq!(bmp_password(b"").unwrap().as_slice(), &[0, 0]);
    assert!(bmp_password(&[0xff, 0xfe]).is_err());
}

#[test]
fn test_pkcs12_kdf_vectors() {
    let password = bmp_password(b"smeg").unwrap();
    let salt = hex::decode("0a58cf64530d823f").unwrap();
    let key = Pkcs12Kdf::new(HashAlgorithm::Sha1, 1, Pkcs12KeyId::Key).unwrap();
    assert_eq!(
        hex_of(key.derive(&password, &salt, 24).unwrap()),
        "8aaae6297b6cb04642ab5b077851284eb7128f1a2a7fbca3"
    );
    let iv = key.with_id(Pkcs12KeyId::Iv);
    assert_eq!(hex_of(iv.derive(&password, &salt, 8).unwrap()), "79993dfe048d3b76");

    let password = bmp_password(b"queeg").unwrap();
    let salt = hex::decode("05dec959acff72f7").unwrap();
    let key = Pkcs12Kdf::new(HashAlgorithm::Sha1, 1000, Pkcs12KeyId::Key).unwrap();
    assert_eq!(
        hex_of(key.derive(&password, &salt, 24).unwrap()),
        "ed2034e36328830ff09df1e1a07dd357185dac0d4f9eb3d4"
    );
    assert_eq!(
        hex_of(key.with_id(Pkcs12KeyId::Iv).derive(&password, &salt, 8).unwrap()),
        "11dedad7758d4860"
    );
}

/// Matches `openssl enc -aes-256-cbc -md md5 -S 0102030405060708 -P`
#[test]
fn test_evp_bytes_to_key() {
    let salt = hex::decode("0102030405060708").unwrap();
    let (key, iv) = EvpBytesToKey::pem()
        .derive_key_iv(b"password", &salt, 24, 8)
        .unwrap();
    assert_eq!(hex::encode(key.as_slice()), "e7b0971e52ca5cc8d0539fb3412f6316f7ba2e6ee293d9f3");
    assert_eq!(hex::encode(iv.as_slice()), "457b99436b51ce02");
    assert_eq!(
        hex_of(EvpBytesToKey::pem().derive(b"password", &salt, 32).unwrap()),
        "e7b0971e52ca5cc8d0539fb3412f6316f7ba2e6ee293d9f3457b99436b51ce02"
    );
}

#[test]
fn test_zero_iterations_rejected_everywhere() {
    assert!(Pbkdf1::new(HashAlgorithm::Sha1, 0).is_err());
    assert!(Pbkdf2::new(HashAlgorithm::Sha1, 0).is_err());
    assert!(Pkcs12Kdf::new(HashAlgorithm::Sha1, 0, Pkcs12KeyId::Key).is_err());
    assert!(EvpBytesToKey::new(HashAlgorithm::Md5, 0).is_err());
}

#[test]
fn test_iteration_ceiling() {
    assert!(Pbkdf2::new(HashAlgorithm::Sha256, MAX_ITERATIONS).is_ok());
    for kind in [
        Pbkdf1::new(HashAlgorithm::Sha1, MAX_ITERATIONS + 1).unwrap_err().kind(),
        Pbkdf2::new(HashAlgorithm::Sha256, u32::MAX).unwrap_err().kind(),
        Pkcs12Kdf::new(HashAlgorithm::Sha1, u32::MAX, Pkcs12KeyId::Key).unwrap_err().kind(),
        EvpBytesToKey::new(HashAlgorithm::Md5, u32::MAX).unwrap_err().kind(),
    ] {
        assert_eq!(kind, ErrorKind::InvalidParameter);
    }
}

#[test]
fn test_scrypt_memory_ceiling() {
    // 128 * 8 * 2^18 is exactly 256 MiB
    assert!(Scrypt::new(1 << 18, 8, 1).is_ok());
    assert_eq!(Scrypt::new(1 << 19, 8, 1).unwrap_err().kind(), ErrorKind::InvalidParameter);
    assert!(Scrypt::new(1 << 36, 8, 1).is_err());
    assert!(Scrypt::new(16, u32::MAX, 1).is_err());
    assert!(Scrypt::new(16, 8, 1 << 20).is_err());
}

#[test]
fn test_trait_objects() {
    let kdfs: Vec<Box<dyn PasswordKdf>> = vec![
        Box::new(Pbkdf1::new(HashAlgorithm::Sha1, 2).unwrap()),
        Box::new(Pbkdf2::new(HashAlgorithm::Sha256, 2).unwrap()),
        Box::new(Scrypt::new(16, 1, 1).unwrap()),
        Box::new(Pkcs12Kdf::new(HashAlgorithm::Sha1, 2, Pkcs12KeyId::Key).unwrap()),
        Box::new(EvpBytesToKey::pem()),
    ];
    for kdf in &kdfs {
        let a = kdf.derive(b"pw", b"saltsalt", 16).unwrap();
        let b = kdf.derive(b"pw", b"saltsalt", 16).unwrap();
        let c = kdf.derive(b"pw2", b"saltsalt", 16).unwrap();
        assert_eq!(a, b, "{}", kdf.name());
        assert_ne!(a, c, "{}", kdf.name());
        assert_eq!(kdf.derive(b"pw", b"s", 0).unwrap_err().kind(), ErrorKind::InvalidParameter);
    }
}
