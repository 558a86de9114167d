//! Property-based tests over the container codec

use keyseal_algorithms::ber_to_der;
use keyseal_pkcs::keys::EcPrivateKey;
use keyseal_pkcs::pbe::{EncryptionOpts, KdfOpts, Pbkdf2Opts};
use keyseal_pkcs::{PbeOpts, PrivateKey};
use keyseal_tests::{codec, curve, rng};
use proptest::prelude::*;

const CIPHERS: [&str; 4] = ["AES-256-CBC", "AES-128-GCM", "SM4-CFB", "GOST28147-CFB"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_password_round_trip(
        seed in any::<u64>(),
        password in prop::collection::vec(any::<u8>(), 0..40),
        cipher in 0..CIPHERS.len(),
    ) {
        let codec = codec();
        let mut rng = rng(seed);
        let key: PrivateKey = EcPrivateKey::generate(curve("P-256"), &mut rng).unwrap().into();
        let opts = PbeOpts::Pbes2(EncryptionOpts {
            cipher: CIPHERS[cipher].into(),
            kdf: KdfOpts::Pbkdf2(Pbkdf2Opts { iteration_count: 4, ..Default::default() }),
        });
        let sealed = codec
            .marshal_encrypted_private_key(&key, &password, &opts, &mut rng)
            .unwrap();
        prop_assert_eq!(codec.parse_encrypted_private_key(&sealed, &password).unwrap(), key);
    }

    #[test]
    fn prop_codec_output_is_already_der(seed in any::<u64>()) {
        let codec = codec();
        let mut rng = rng(seed);
        let key: PrivateKey = EcPrivateKey::generate(curve("sm2p256v1"), &mut rng).unwrap().into();
        let der = codec.marshal_private_key(&key).unwrap();
        prop_assert_eq!(ber_to_der(&der).unwrap(), der.to_vec());
        let spki = codec.marshal_public_key(&key.public_key()).unwrap();
        prop_assert_eq!(ber_to_der(&spki).unwrap(), spki);
    }

    #[test]
    fn prop_ber_to_der_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(der) = ber_to_der(&bytes) {
            prop_assert_eq!(ber_to_der(&der).unwrap(), der);
        }
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let codec = codec();
        let _ = codec.parse_private_key(&bytes);
        let _ = codec.parse_public_key(&bytes);
        let _ = codec.parse_encrypted_private_key(&bytes, b"pw");
    }
}
