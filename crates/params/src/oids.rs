//! Object identifiers that form part of the key-container wire format
//!
//! Kept as dotted strings; the codec parses them once when its registries
//! are built.

// Key algorithms
pub const RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const DSA: &str = "1.2.840.10040.4.1";
pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const GOST_R3410_2001: &str = "1.2.643.2.2.19";
pub const ELGAMAL: &str = "1.3.14.7.2.1.1";

// GOST R 34.10 named parameter sets
pub const GOST_2001_TEST_PARAMSET: &str = "1.2.643.2.2.35.0";
pub const GOST_2001_CRYPTOPRO_A_PARAMSET: &str = "1.2.643.2.2.35.1";
pub const GOST_2001_CRYPTOPRO_B_PARAMSET: &str = "1.2.643.2.2.35.2";
pub const GOST_2001_CRYPTOPRO_C_PARAMSET: &str = "1.2.643.2.2.35.3";
pub const GOST_2001_CRYPTOPRO_XCHA_PARAMSET: &str = "1.2.643.2.2.36.0";
pub const GOST_2001_CRYPTOPRO_XCHB_PARAMSET: &str = "1.2.643.2.2.36.1";
pub const TC26_GOST_3410_12_256_PARAMSET_A: &str = "1.2.643.7.1.2.1.1.1";
pub const TC26_GOST_3410_12_512_PARAMSET_A: &str = "1.2.643.7.1.2.1.2.1";
pub const TC26_GOST_3410_12_512_PARAMSET_B: &str = "1.2.643.7.1.2.1.2.2";
pub const TC26_GOST_3410_12_512_PARAMSET_C: &str = "1.2.643.7.1.2.1.2.3";

// Other named curves
pub const SM2_P256: &str = "1.2.156.10197.1.301";
pub const SECP256R1: &str = "1.2.840.10045.3.1.7";
pub const SECP384R1: &str = "1.3.132.0.34";
pub const SECP521R1: &str = "1.3.132.0.35";

// Password-based encryption schemes and KDFs
pub const PBES2: &str = "1.2.840.113549.1.5.13";
pub const PBKDF2: &str = "1.2.840.113549.1.5.12";
pub const SCRYPT: &str = "1.3.6.1.4.1.11591.4.11";
pub const PBE_MD5_DES_CBC: &str = "1.2.840.113549.1.5.3";
pub const PBE_SHA1_DES_CBC: &str = "1.2.840.113549.1.5.10";
pub const PBE_SHA1_3DES_CBC: &str = "1.2.840.113549.1.12.1.3";

// PBKDF2 pseudo-random functions
pub const HMAC_WITH_MD5: &str = "1.3.6.1.5.5.8.1.1";
pub const HMAC_WITH_SHA1: &str = "1.2.840.113549.2.7";
pub const HMAC_WITH_SHA224: &str = "1.2.840.113549.2.8";
pub const HMAC_WITH_SHA256: &str = "1.2.840.113549.2.9";
pub const HMAC_WITH_SHA384: &str = "1.2.840.113549.2.10";
pub const HMAC_WITH_SHA512: &str = "1.2.840.113549.2.11";

// Content-encryption ciphers
pub const DES_CBC: &str = "1.3.14.3.2.7";
pub const DES_EDE3_CBC: &str = "1.2.840.113549.3.7";
pub const AES128_CBC: &str = "2.16.840.1.101.3.4.1.2";
pub const AES128_OFB: &str = "2.16.840.1.101.3.4.1.3";
pub const AES128_CFB: &str = "2.16.840.1.101.3.4.1.4";
pub const AES128_GCM: &str = "2.16.840.1.101.3.4.1.6";
pub const AES192_CBC: &str = "2.16.840.1.101.3.4.1.22";
pub const AES192_OFB: &str = "2.16.840.1.101.3.4.1.23";
pub const AES192_CFB: &str = "2.16.840.1.101.3.4.1.24";
pub const AES192_GCM: &str = "2.16.840.1.101.3.4.1.26";
pub const AES256_CBC: &str = "2.16.840.1.101.3.4.1.42";
pub const AES256_OFB: &str = "2.16.840.1.101.3.4.1.43";
pub const AES256_CFB: &str = "2.16.840.1.101.3.4.1.44";
pub const AES256_GCM: &str = "2.16.840.1.101.3.4.1.46";
pub const SM4_CBC: &str = "1.2.156.10197.1.104.2";
pub const SM4_OFB: &str = "1.2.156.10197.1.104.3";
pub const SM4_CFB: &str = "1.2.156.10197.1.104.4";
pub const SM4_GCM: &str = "1.2.156.10197.1.104.8";
pub const GOST28147_89: &str = "1.2.643.2.2.21";

// GOST 28147-89 S-box parameter sets
pub const GOST28147_PARAM_Z: &str = "1.2.643.7.1.2.5.1.1";
pub const GOST28147_CRYPTOPRO_A: &str = "1.2.643.2.2.31.1";
