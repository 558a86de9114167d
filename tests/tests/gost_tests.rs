//! GOST keys across the codec and the signature layer

use keyseal_algorithms::{BlockCipher, Gost28147};
use keyseal_api::{DigestSigner, DigestVerifier};
use keyseal_pkcs::keys::GostPrivateKey;
use keyseal_pkcs::pbe::{EncryptionOpts, KdfOpts, Pbkdf2Opts};
use keyseal_pkcs::{PbeOpts, PrivateKey, PublicKey};
use keyseal_tests::{codec, curve, rng};

const GOST_CURVES: [&str; 10] = [
    "id-GostR3410-2001-TestParamSet",
    "id-GostR3410-2001-CryptoPro-A-ParamSet",
    "id-GostR3410-2001-CryptoPro-B-ParamSet",
    "id-GostR3410-2001-CryptoPro-C-ParamSet",
    "id-GostR3410-2001-CryptoPro-XchA-ParamSet",
    "id-GostR3410-2001-CryptoPro-XchB-ParamSet",
    "id-tc26-gost-3410-2012-256-paramSetA",
    "id-tc26-gost-3410-2012-512-paramSetA",
    "id-tc26-gost-3410-2012-512-paramSetB",
    "id-tc26-gost-3410-2012-512-paramSetC",
];

#[test]
fn test_sign_with_recovered_key_verify_with_parsed_public() {
    let codec = codec();
    let mut rng = rng(200);
    let opts = PbeOpts::Pbes2(EncryptionOpts {
        cipher: "GOST28147-CFB".into(),
        kdf: KdfOpts::Pbkdf2(Pbkdf2Opts {
            iteration_count: 8,
            ..Default::default()
        }),
    });
    for name in GOST_CURVES {
        let key = GostPrivateKey::generate(curve(name), &mut rng).unwrap();
        let sealed = codec
            .encrypted_private_key_to_pem(&PrivateKey::from(key.clone()), b"gost", &opts, &mut rng)
            .unwrap();
        let PrivateKey::Gost(recovered) = codec
            .parse_pem_private_key(&sealed, Some(b"gost".as_slice()))
            .unwrap()
        else {
            panic!("{name}: expected a GOST key");
        };
        assert_eq!(recovered, key);

        let spki = codec
            .public_key_to_pem(&PublicKey::Gost(key.public_key().clone()))
            .unwrap();
        let PublicKey::Gost(public) = codec.parse_pem_public_key(&spki).unwrap() else {
            panic!("{name}: expected a GOST public key");
        };
        assert_eq!(public.curve().name(), name);

        let digest = vec![0x5a; recovered.curve().point_size()];
        let signature = recovered.sign_digest(&mut rng, &digest).unwrap();
        assert!(public.verify_digest(&digest, &signature).unwrap(), "{name}");

        let raw = recovered.sign_bytes(&mut rng, &digest).unwrap();
        assert_eq!(raw.len(), 2 * public.curve().point_size());
        assert!(public.verify_bytes(&digest, &raw).unwrap());

        let mut other = digest.clone();
        other[0] ^= 1;
        assert!(!public.verify_bytes(&other, &raw).unwrap());
    }
}

#[test]
fn test_signatures_do_not_cross_curves() {
    let mut rng = rng(201);
    let a = GostPrivateKey::generate(curve("id-GostR3410-2001-CryptoPro-A-ParamSet"), &mut rng)
        .unwrap();
    let b = GostPrivateKey::generate(curve("id-GostR3410-2001-CryptoPro-B-ParamSet"), &mut rng)
        .unwrap();
    let digest = [0x11; 32];
    let sig = a.sign_asn1(&mut rng, &digest).unwrap();
    assert!(a.public_key().verify_asn1(&digest, &sig).unwrap());
    assert!(!b.public_key().verify_asn1(&digest, &sig).unwrap());
}

#[test]
fn test_block_cipher_through_the_trait() {
    let key = [0x42u8; 32];
    let cipher = Gost28147::with_cryptopro_a(&key).unwrap();
    assert_eq!(cipher.block_size(), 8);

    let mut block = *b"keyseal!";
    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(&block, b"keyseal!");
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(&block, b"keyseal!");

    let other = Gost28147::with_param_z(&key).unwrap();
    let mut a = *b"keyseal!";
    let mut b = a;
    cipher.encrypt_block(&mut a).unwrap();
    other.encrypt_block(&mut b).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_gost_suite_in_registry() {
    let codec = codec();
    let suite = codec.ciphers().lookup("GOST28147-CFB").unwrap();
    assert_eq!(suite.key_size(), 32);
    assert_eq!(suite.iv_size(), 8);
    let key = [7u8; 32];
    let iv = [9u8; 8];
    let message = b"thirteen byte";
    let sealed = suite.encrypt_with_iv(&key, &iv, message).unwrap();
    assert_ne!(sealed.as_slice(), message.as_slice());
    assert_eq!(suite.decrypt_with_iv(&key, &iv, &sealed).unwrap(), message.to_vec());
}
