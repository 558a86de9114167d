//! Strict DER reader and writer
//!
//! The reader accepts only definite, minimally encoded lengths and
//! single-byte tags, which is all the key containers need. Callers that may
//! receive BER run the input through [`ber_to_der`](super::ber_to_der) first.

use const_oid::ObjectIdentifier;
use num_bigint::{BigInt, BigUint, Sign};

use super::write_length;
use crate::error::{validate, Error, Result};

/// Universal tags and context-specific tag helpers
pub mod tag {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;
    pub const SET: u8 = 0x31;

    /// Constructed context-specific tag `[n]`
    pub const fn context(n: u8) -> u8 {
        0xa0 | n
    }

    /// Primitive context-specific tag `[n] IMPLICIT`
    pub const fn context_primitive(n: u8) -> u8 {
        0x80 | n
    }
}

/// One decoded tag-length-value triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: u8,
    /// Content octets
    pub value: &'a [u8],
    /// The full encoding, header included
    pub raw: &'a [u8],
}

/// Cursor over a DER byte string
#[derive(Debug, Clone)]
pub struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Read the next element of any tag
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>> {
        let rest = &self.data[self.pos..];
        let tag = *rest
            .first()
            .ok_or_else(|| Error::malformed("DER", "unexpected end of data"))?;
        if tag & 0x1f == 0x1f {
            return Err(Error::malformed("DER", "high-tag-number form not supported"));
        }

        let first = *rest
            .get(1)
            .ok_or_else(|| Error::malformed("DER", "truncated length field"))?;
        let (len, header) = match first {
            0x00..=0x7f => (first as usize, 2),
            0x80 => return Err(Error::malformed("DER", "indefinite length")),
            _ => {
                let n = (first & 0x7f) as usize;
                if n > std::mem::size_of::<usize>() {
                    return Err(Error::malformed("DER", "length field too large"));
                }
                let bytes = rest
                    .get(2..2 + n)
                    .ok_or_else(|| Error::malformed("DER", "truncated length field"))?;
                if bytes[0] == 0 {
                    return Err(Error::malformed("DER", "non-minimal length"));
                }
                let len = bytes.iter().fold(0usize, |acc, &b| acc << 8 | b as usize);
                if len < 0x80 {
                    return Err(Error::malformed("DER", "non-minimal length"));
                }
                (len, 2 + n)
            }
        };

        let end = header
            .checked_add(len)
            .filter(|&end| end <= rest.len())
            .ok_or_else(|| Error::malformed("DER", "length runs past the end of the data"))?;

        self.pos += end;
        Ok(Tlv {
            tag,
            value: &rest[header..end],
            raw: &rest[..end],
        })
    }

    /// Read an element that must carry `expected` and return its contents
    pub fn read_tagged(&mut self, expected: u8, what: &'static str) -> Result<&'a [u8]> {
        let tlv = self.read_tlv()?;
        if tlv.tag != expected {
            return Err(Error::malformed(
                what,
                format!("expected tag 0x{expected:02x}, found 0x{:02x}", tlv.tag),
            ));
        }
        Ok(tlv.value)
    }

    /// Read a SEQUENCE and return a reader over its contents
    pub fn read_sequence(&mut self) -> Result<DerReader<'a>> {
        self.read_tagged(tag::SEQUENCE, "SEQUENCE").map(DerReader::new)
    }

    /// Read the content octets of an INTEGER, checking minimal encoding
    pub fn read_integer_bytes(&mut self) -> Result<&'a [u8]> {
        let bytes = self.read_tagged(tag::INTEGER, "INTEGER")?;
        match bytes {
            [] => Err(Error::malformed("INTEGER", "empty encoding")),
            [0x00, next, ..] if *next < 0x80 => {
                Err(Error::malformed("INTEGER", "non-minimal encoding"))
            }
            [0xff, next, ..] if *next >= 0x80 => {
                Err(Error::malformed("INTEGER", "non-minimal encoding"))
            }
            _ => Ok(bytes),
        }
    }

    /// Read a signed INTEGER
    pub fn read_bigint(&mut self) -> Result<BigInt> {
        self.read_integer_bytes().map(BigInt::from_signed_bytes_be)
    }

    /// Read an INTEGER that must not be negative
    pub fn read_biguint(&mut self) -> Result<BigUint> {
        let bytes = self.read_integer_bytes()?;
        if bytes[0] & 0x80 != 0 {
            return Err(Error::malformed("INTEGER", "negative value"));
        }
        Ok(BigUint::from_bytes_be(bytes))
    }

    /// Read a small non-negative INTEGER such as a version or iteration count
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_integer_bytes()?;
        if bytes[0] & 0x80 != 0 {
            return Err(Error::malformed("INTEGER", "negative value"));
        }
        let digits = if bytes[0] == 0 { &bytes[1..] } else { bytes };
        if digits.len() > 8 {
            return Err(Error::malformed("INTEGER", "value does not fit in 64 bits"));
        }
        Ok(digits.iter().fold(0u64, |acc, &b| acc << 8 | b as u64))
    }

    pub fn read_octet_string(&mut self) -> Result<&'a [u8]> {
        self.read_tagged(tag::OCTET_STRING, "OCTET STRING")
    }

    /// Read a BIT STRING whose length is a whole number of bytes
    pub fn read_bit_string(&mut self) -> Result<&'a [u8]> {
        let bytes = self.read_tagged(tag::BIT_STRING, "BIT STRING")?;
        match bytes.split_first() {
            Some((&0, rest)) => Ok(rest),
            Some(_) => Err(Error::malformed("BIT STRING", "unused bits not supported")),
            None => Err(Error::malformed("BIT STRING", "empty encoding")),
        }
    }

    pub fn read_oid(&mut self) -> Result<ObjectIdentifier> {
        let bytes = self.read_tagged(tag::OBJECT_IDENTIFIER, "OBJECT IDENTIFIER")?;
        ObjectIdentifier::from_bytes(bytes)
            .map_err(|e| Error::malformed("OBJECT IDENTIFIER", e.to_string()))
    }

    pub fn read_null(&mut self) -> Result<()> {
        let bytes = self.read_tagged(tag::NULL, "NULL")?;
        if !bytes.is_empty() {
            return Err(Error::malformed("NULL", "non-empty contents"));
        }
        Ok(())
    }

    /// Read the next element and return its full encoding
    pub fn read_raw(&mut self) -> Result<&'a [u8]> {
        self.read_tlv().map(|tlv| tlv.raw)
    }

    /// Read `[n]` explicitly tagged contents if the next element carries that tag
    pub fn read_optional_context(&mut self, n: u8) -> Result<Option<DerReader<'a>>> {
        if self.peek_tag() != Some(tag::context(n)) {
            return Ok(None);
        }
        self.read_tlv().map(|tlv| Some(DerReader::new(tlv.value)))
    }

    /// Fail if any bytes remain
    pub fn finish(&self, context: &'static str) -> Result<()> {
        validate::no_trailing(context, self.remaining())
    }
}

/// Builder for DER output
#[derive(Debug, Default, Clone)]
pub struct DerWriter {
    buf: Vec<u8>,
}

impl DerWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_tlv(&mut self, tag: u8, value: &[u8]) {
        self.buf.push(tag);
        write_length(&mut self.buf, value.len());
        self.buf.extend_from_slice(value);
    }

    /// Write a constructed element whose contents are produced by `f`
    pub fn write_constructed(&mut self, tag: u8, f: impl FnOnce(&mut DerWriter)) {
        let mut inner = DerWriter::new();
        f(&mut inner);
        self.write_tlv(tag, &inner.buf);
    }

    pub fn write_sequence(&mut self, f: impl FnOnce(&mut DerWriter)) {
        self.write_constructed(tag::SEQUENCE, f)
    }

    /// Write `[n] EXPLICIT` around the contents produced by `f`
    pub fn write_context(&mut self, n: u8, f: impl FnOnce(&mut DerWriter)) {
        self.write_constructed(tag::context(n), f)
    }

    pub fn write_biguint(&mut self, value: &BigUint) {
        let mut bytes = value.to_bytes_be();
        if bytes[0] & 0x80 != 0 {
            bytes.insert(0, 0);
        }
        self.write_tlv(tag::INTEGER, &bytes);
    }

    pub fn write_bigint(&mut self, value: &BigInt) {
        self.write_tlv(tag::INTEGER, &value.to_signed_bytes_be());
    }

    pub fn write_uint(&mut self, value: u64) {
        self.write_biguint(&BigUint::from(value));
    }

    pub fn write_octet_string(&mut self, value: &[u8]) {
        self.write_tlv(tag::OCTET_STRING, value);
    }

    pub fn write_bit_string(&mut self, value: &[u8]) {
        self.buf.push(tag::BIT_STRING);
        write_length(&mut self.buf, value.len() + 1);
        self.buf.push(0);
        self.buf.extend_from_slice(value);
    }

    pub fn write_oid(&mut self, oid: &ObjectIdentifier) {
        self.write_tlv(tag::OBJECT_IDENTIFIER, oid.as_bytes());
    }

    pub fn write_null(&mut self) {
        self.write_tlv(tag::NULL, &[]);
    }

    /// Append an already encoded element
    pub fn write_raw(&mut self, encoded: &[u8]) {
        self.buf.extend_from_slice(encoded);
    }
}

/// Sign-aware helper used by key parsers: reject zero and negative values
pub fn positive(value: BigInt, context: &'static str) -> Result<BigUint> {
    match value.sign() {
        Sign::Plus => value
            .to_biguint()
            .ok_or_else(|| Error::invalid_key(context, "negative value")),
        Sign::NoSign => Err(Error::invalid_key(context, "zero value")),
        Sign::Minus => Err(Error::invalid_key(context, "negative value")),
    }
}
