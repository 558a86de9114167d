//! Digital signatures over precomputed digests
//!
//! This crate implements GOST R 34.10-2001 / 34.10-2012 signatures on any
//! [`Curve`](keyseal_algorithms::Curve), with the signature available either
//! as fixed-width `r || s` bytes or as an ASN.1 `SEQUENCE { r, s }`.

#![forbid(unsafe_code)]

pub mod common;
pub mod gost;

pub use common::SignatureComponents;
pub use gost::{GostPrivateKey, GostPublicKey, MAX_SIGN_ATTEMPTS};
