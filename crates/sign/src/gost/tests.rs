use super::*;
use keyseal_api::ErrorKind;
use keyseal_params::curves::{gost, CurveParams};
use proptest::prelude::*;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Replays a fixed byte pattern forever
struct ReplayRng {
    data: Vec<u8>,
    pos: usize,
}

impl ReplayRng {
    fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.data[self.pos % self.data.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ReplayRng {}

fn curve(params: &CurveParams) -> Arc<Curve> {
    Arc::new(Curve::from_params(params).unwrap())
}

fn big(hex_str: &str) -> BigUint {
    BigUint::from_bytes_be(&hex::decode(hex_str).unwrap())
}

const RFC5832_D: &str = "7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28";
const RFC5832_E: &str = "2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5";
const RFC5832_K: &str = "77105c9b20bcd3122823c8cf6fcc7b956de33814e95b7fe64fed924594dceab3";
const RFC5832_R: &str = "41aa28d2f1ab148280cd9ed56feda41974053554a42767b83ad043fd39dc0493";
const RFC5832_S: &str = "01456c64ba4642a1653c235a98a60249bcd6d3f746b631df928014f6c5bf9c40";

fn rfc5832_key() -> GostPrivateKey {
    let c = curve(&gost::GOST_R3410_2001_TEST);
    GostPrivateKey::from_bytes(c, &hex::decode(RFC5832_D).unwrap()).unwrap()
}

/// RFC 5832 section 7.1
#[test]
fn test_rfc5832_public_key() {
    let key = rfc5832_key();
    let public = key.public_key();
    assert_eq!(
        public.point().x(),
        &big("7f2b49e270db6d90d8595bec458b50c58585ba1d4e9b788f6689dbd8e56fd80b")
    );
    assert_eq!(
        public.point().y(),
        &big("26f1b489d6701dd185c8413a977b3cbbaf64d1c593d26627dffb101a87ff77da")
    );
}

#[test]
fn test_rfc5832_signature() {
    let key = rfc5832_key();
    let digest = hex::decode(RFC5832_E).unwrap();
    let mut rng = ReplayRng::new(hex::decode(RFC5832_K).unwrap());
    let sig = key.sign_components(&mut rng, &digest).unwrap();
    assert_eq!(sig.r, big(RFC5832_R));
    assert_eq!(sig.s, big(RFC5832_S));
    assert!(key.public_key().verify_components(&digest, &sig));

    let fixed = sig.to_fixed(32).unwrap();
    assert_eq!(hex::encode(&fixed), format!("{RFC5832_R}{RFC5832_S}"));
    assert!(key.public_key().verify_bytes(&digest, &fixed).unwrap());
}

#[test]
fn test_zero_nonce_is_redrawn() {
    let key = rfc5832_key();
    let digest = hex::decode(RFC5832_E).unwrap();
    // First draw is exactly q, which reduces to zero
    let mut stream = key.curve().order().to_bytes_be();
    stream.extend_from_slice(&hex::decode(RFC5832_K).unwrap());
    let mut rng = ReplayRng::new(stream);
    let sig = key.sign_components(&mut rng, &digest).unwrap();
    assert_eq!(sig.r, big(RFC5832_R));
    assert_eq!(sig.s, big(RFC5832_S));
}

#[test]
fn test_golden_keygen_all_ones() {
    let cases = [
        (
            &gost::GOST_R3410_2001_TEST,
            "3eccf7d50495f160b26996f07caebe614508acb063ba459bfee6ff8293ba2503",
            "72cd86f9a8032df3a89bdc34cdb0dd43a19073e8afacc7972675ea34a28832fa",
        ),
        (
            &gost::GOST_R3410_2001_CRYPTOPRO_A,
            "acef8391d9ee8fb48083a675c77bb8ffd167bdb5b0898fb6ce5b5a231a8103d4",
            "2ab48ed96cc01f89ac2db2b40905e393b6059f68d3db892e0b4ab62e988dfd01",
        ),
        (
            &gost::GOST_R3410_2012_512_A,
            "27042a833c89361b73cf7bc9e0dfa207121e69524d891bde6e48d134fa217822\
             882e3086c0800a2d74af08ff3575a579e38540226ba842f67224bf298758a820",
            "c94b9d7371fbd5e5e57b3d8b15fa8429469793e1be395f65440e9e43cf152e28\
             a47ef9a48e112f50264038d6449289ea19df04fed3fd625c051aac09ecaab6f6",
        ),
    ];
    for (params, x, y) in cases {
        let mut rng = ReplayRng::new(vec![0x01]);
        let key = GostPrivateKey::generate(curve(params), &mut rng).unwrap();
        assert_eq!(key.to_bytes().unwrap(), vec![0x01; params.point_size], "{}", params.name);
        assert_eq!(key.public_key().point().x(), &big(x), "{}", params.name);
        assert_eq!(key.public_key().point().y(), &big(y), "{}", params.name);
    }
}

#[test]
fn test_exhausted_source() {
    let c = curve(&gost::GOST_R3410_2001_CRYPTOPRO_A);
    let mut zeros = ReplayRng::new(vec![0]);
    let err = GostPrivateKey::generate(c.clone(), &mut zeros).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RandomSourceExhausted);

    let key = GostPrivateKey::generate(c, &mut ChaCha20Rng::seed_from_u64(7)).unwrap();
    let err = key.sign_components(&mut zeros, b"digest").unwrap_err();
    assert_eq!(
        err,
        Error::RandomSourceExhausted {
            context: "GOST sign",
            attempts: MAX_SIGN_ATTEMPTS
        }
    );
}

#[test]
fn test_sign_verify_all_gost_curves() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let digest = [0xa5u8; 32];
    for params in [
        gost::GOST_R3410_2001_CRYPTOPRO_B,
        gost::GOST_R3410_2001_CRYPTOPRO_C,
        gost::GOST_R3410_2001_CRYPTOPRO_XCHA,
        gost::GOST_R3410_2012_256_A,
        gost::GOST_R3410_2012_512_B,
        gost::GOST_R3410_2012_512_C,
    ] {
        let key = GostPrivateKey::generate(curve(&params), &mut rng).unwrap();
        let public = key.public_key();
        let sig = key.sign_asn1(&mut rng, &digest).unwrap();
        assert!(public.verify_asn1(&digest, &sig).unwrap(), "{}", params.name);
        let sig = key.sign_bytes(&mut rng, &digest).unwrap();
        assert_eq!(sig.len(), 2 * params.point_size);
        assert!(public.verify_bytes(&digest, &sig).unwrap(), "{}", params.name);
    }
}

#[test]
fn test_bit_flips_reject() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let key = GostPrivateKey::generate(curve(&gost::GOST_R3410_2001_CRYPTOPRO_A), &mut rng).unwrap();
    let public = key.public_key();
    let digest = HashDigest::of(b"message");
    let sig = key.sign_bytes(&mut rng, &digest).unwrap();
    assert!(public.verify_bytes(&digest, &sig).unwrap());

    for bit in [0usize, 7, 100, 255] {
        let mut flipped = digest.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        assert!(!public.verify_bytes(&flipped, &sig).unwrap(), "digest bit {bit}");
    }
    for bit in [0usize, 130, 256, 300, 511] {
        let mut flipped = sig.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        assert!(!public.verify_bytes(&digest, &flipped).unwrap(), "signature bit {bit}");
    }
}

/// Deterministic 32-byte stand-in for a message hash
struct HashDigest;

impl HashDigest {
    fn of(message: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; 32];
        for (i, b) in message.iter().cycle().take(32).enumerate() {
            out[i] = b.wrapping_mul(31).wrapping_add(i as u8);
        }
        out
    }
}

#[test]
fn test_out_of_range_components_are_rejections() {
    let key = rfc5832_key();
    let digest = hex::decode(RFC5832_E).unwrap();
    let q = key.curve().order().clone();
    let public = key.public_key();
    let valid_s = big(RFC5832_S);
    for (r, s) in [
        (BigUint::zero(), valid_s.clone()),
        (q.clone(), valid_s.clone()),
        (big(RFC5832_R), BigUint::zero()),
        (big(RFC5832_R), q.clone()),
        (big(RFC5832_R) + &q, valid_s),
    ] {
        assert!(!public.verify_components(&digest, &SignatureComponents { r, s }));
    }
}

#[test]
fn test_malformed_signature_is_error() {
    let key = rfc5832_key();
    let public = key.public_key();
    assert_eq!(
        public.verify_bytes(b"d", &[0u8; 63]).unwrap_err().kind(),
        ErrorKind::MalformedEncoding
    );
    assert_eq!(
        public.verify_asn1(b"d", &[0x30, 0x03, 0x02, 0x01]).unwrap_err().kind(),
        ErrorKind::MalformedEncoding
    );
}

#[test]
fn test_zero_digest_signs_as_one() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let key = rfc5832_key();
    let sig = key.sign_components(&mut rng, &[0u8; 32]).unwrap();
    assert!(key.public_key().verify_components(&[0u8; 32], &sig));
    assert!(key.public_key().verify_components(&[1u8], &sig));
}

#[test]
fn test_key_encoding() {
    let key = rfc5832_key();
    let c = key.curve().clone();
    assert_eq!(hex::encode(key.to_bytes().unwrap()), RFC5832_D);

    let public_bytes = key.public_key().to_bytes().unwrap();
    assert_eq!(public_bytes.len(), 64);
    let public = GostPublicKey::from_bytes(c.clone(), &public_bytes).unwrap();
    assert_eq!(&public, key.public_key());

    let mut off_curve = public_bytes.clone();
    off_curve[63] ^= 1;
    assert_eq!(
        GostPublicKey::from_bytes(c.clone(), &off_curve).unwrap_err().kind(),
        ErrorKind::InvalidKeyMaterial
    );
    assert_eq!(
        GostPrivateKey::from_bytes(c.clone(), &[0u8; 32]).unwrap_err().kind(),
        ErrorKind::InvalidKeyMaterial
    );
    assert_eq!(
        GostPrivateKey::from_bytes(c.clone(), &[1u8; 31]).unwrap_err().kind(),
        ErrorKind::InvalidKeyMaterial
    );
    // q itself reduces to zero
    let q_bytes = c.order().to_bytes_be();
    assert!(GostPrivateKey::from_bytes(c, &q_bytes).is_err());
}

#[test]
fn test_public_key_equality_includes_curve() {
    let mut rng = ReplayRng::new(vec![0x01]);
    let a = GostPrivateKey::generate(curve(&gost::GOST_R3410_2001_CRYPTOPRO_A), &mut rng).unwrap();
    let xch = GostPrivateKey::generate(curve(&gost::GOST_R3410_2001_CRYPTOPRO_XCHA), &mut rng).unwrap();
    assert_eq!(a.public_key().point(), xch.public_key().point());
    assert_ne!(a.public_key(), xch.public_key());
    assert_ne!(a, xch);
}

#[test]
fn test_trait_surface() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let key = rfc5832_key();
    let sig = key.sign_digest(&mut rng, b"abc").unwrap();
    assert!(key.public_key().verify_digest(b"abc", &sig).unwrap());
    assert!(!key.public_key().verify_digest(b"abd", &sig).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_sign_then_verify(seed in any::<u64>(), digest in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let key = GostPrivateKey::generate(curve(&gost::GOST_R3410_2012_256_A), &mut rng).unwrap();
        let sig = key.sign_components(&mut rng, &digest).unwrap();
        prop_assert!(key.public_key().verify_components(&digest, &sig));
    }
}
