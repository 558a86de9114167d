//! ASN.1 encodings
//!
//! [`ber_to_der`] canonicalizes permissive BER input once at the edge; the
//! strict [`DerReader`] then assumes definite, minimal lengths everywhere.
//! [`DerWriter`] produces DER directly.

pub mod ber;
pub mod der;

pub use ber::ber_to_der;
pub use der::{tag, DerReader, DerWriter, Tlv};

/// Append a definite, minimally encoded length
pub(crate) fn write_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}
