//! Constant values for the keyseal library
//!
//! Domain parameters are stored as fixed-width big-endian byte strings so the
//! crate has no dependencies; the algorithms crate lifts them into big
//! integers once, when a curve is built.

pub mod curves;
pub mod oids;
pub mod symmetric;
