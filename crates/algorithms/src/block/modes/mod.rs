//! Block cipher modes of operation
//!
//! CBC, CFB and OFB as used by password-encrypted key containers. CBC works
//! on whole blocks and is paired with PKCS#7 padding by its callers; CFB and
//! OFB are stream modes and accept any length.

pub mod cbc;
pub mod cfb;
pub mod ofb;
pub mod padding;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ofb::Ofb;
pub use padding::{pkcs7_pad, pkcs7_unpad};
