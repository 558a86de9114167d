use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keyseal_algorithms::{BlockCipher, Gost28147};
use keyseal_pkcs::keys::GostPrivateKey;
use keyseal_pkcs::pbe::{EncryptionOpts, KdfOpts, Pbkdf2Opts};
use keyseal_pkcs::{PbeOpts, PemBlock, PrivateKey};
use keyseal_tests::fixtures::{EC_PBES2_AES256, PASSWORD, RSA_PKCS8};
use keyseal_tests::{codec, curve, rng};

fn bench_gost28147(c: &mut Criterion) {
    let mut group = c.benchmark_group("GOST28147-89");
    let cipher = Gost28147::with_cryptopro_a(&[0x42u8; 32]).unwrap();

    for size in [8usize, 256, 4096].iter() {
        let mut data = vec![0u8; *size];
        group.bench_with_input(BenchmarkId::new("encrypt blocks", size), size, |b, _| {
            b.iter(|| {
                for block in data.chunks_exact_mut(8) {
                    let _ = cipher.encrypt_block(block);
                }
            });
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let codec = codec();
    let rsa_der = PemBlock::decode(RSA_PKCS8).unwrap().contents;
    c.bench_function("parse RSA PKCS#8", |b| {
        b.iter(|| codec.parse_private_key(&rsa_der).unwrap());
    });

    let sealed = PemBlock::decode(EC_PBES2_AES256).unwrap().contents;
    c.bench_function("decrypt PBES2 (PBKDF2 2048)", |b| {
        b.iter(|| codec.parse_encrypted_private_key(&sealed, PASSWORD).unwrap());
    });

    let mut rng = rng(1);
    let key: PrivateKey = GostPrivateKey::generate(
        curve("id-tc26-gost-3410-2012-256-paramSetA"),
        &mut rng,
    )
    .unwrap()
    .into();
    let opts = PbeOpts::Pbes2(EncryptionOpts {
        cipher: "GOST28147-CFB".into(),
        kdf: KdfOpts::Pbkdf2(Pbkdf2Opts {
            iteration_count: 1000,
            ..Default::default()
        }),
    });
    c.bench_function("encrypt GOST key (PBKDF2 1000)", |b| {
        b.iter(|| {
            codec
                .marshal_encrypted_private_key(&key, PASSWORD, &opts, &mut rng)
                .unwrap()
        });
    });
}

fn bench_gost_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("GOST R 34.10");
    let mut rng = rng(2);
    for name in [
        "id-GostR3410-2001-CryptoPro-A-ParamSet",
        "id-tc26-gost-3410-2012-512-paramSetA",
    ] {
        let key = GostPrivateKey::generate(curve(name), &mut rng).unwrap();
        let digest = vec![0x33u8; key.curve().point_size()];
        let signature = key.sign_bytes(&mut rng, &digest).unwrap();
        group.bench_with_input(BenchmarkId::new("sign", name), &digest, |b, d| {
            b.iter(|| key.sign_bytes(&mut rng, d).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("verify", name), &digest, |b, d| {
            b.iter(|| key.public_key().verify_bytes(d, &signature).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gost28147, bench_codec, bench_gost_sign);
criterion_main!(benches);
