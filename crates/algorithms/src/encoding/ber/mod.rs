//! BER to DER normalization
//!
//! Input is parsed into a tree of elements and re-emitted with definite,
//! minimal lengths:
//!
//! - indefinite-length constructed elements are closed at their
//!   end-of-contents marker and rewritten with an explicit length
//! - non-minimal long-form lengths are shortened
//! - constructed OCTET STRING and BIT STRING values are flattened into their
//!   primitive form
//!
//! Several concatenated top-level elements are normalized in order. Input
//! that is already DER comes back byte-identical.

use std::borrow::Cow;

use super::write_length;
use crate::error::{Error, Result};

/// Deepest nesting accepted before the input is treated as hostile
const MAX_DEPTH: usize = 64;

const CONSTRUCTED: u8 = 0x20;
const OCTET_STRING: u8 = 0x04;
const BIT_STRING: u8 = 0x03;

/// Rewrite BER-encoded bytes as canonical DER
pub fn ber_to_der(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::malformed("BER", "empty input"));
    }

    let mut out = Vec::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        let (element, used) = parse_element(&input[pos..], 0)?;
        element.encode(&mut out);
        pos += used;
    }
    Ok(out)
}

struct Element<'a> {
    identifier: &'a [u8],
    content: Content<'a>,
}

enum Content<'a> {
    Primitive(Cow<'a, [u8]>),
    Constructed(Vec<Element<'a>>),
}

impl Element<'_> {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.identifier);
        match &self.content {
            Content::Primitive(bytes) => {
                write_length(out, bytes.len());
                out.extend_from_slice(bytes);
            }
            Content::Constructed(children) => {
                let mut body = Vec::new();
                for child in children {
                    child.encode(&mut body);
                }
                write_length(out, body.len());
                out.extend_from_slice(&body);
            }
        }
    }
}

/// Parse one element, returning it and the number of bytes it spanned
fn parse_element(data: &[u8], depth: usize) -> Result<(Element<'_>, usize)> {
    if depth > MAX_DEPTH {
        return Err(Error::malformed("BER", "nesting too deep"));
    }

    let id_len = identifier_length(data)?;
    let identifier = &data[..id_len];
    if identifier == [0x00] {
        return Err(Error::malformed("BER", "unexpected end-of-contents marker"));
    }
    let constructed = identifier[0] & CONSTRUCTED != 0;

    let (length, len_len) = parse_length(&data[id_len..])?;
    let header = id_len + len_len;

    let (children, end) = match length {
        None => {
            if !constructed {
                return Err(Error::malformed(
                    "BER",
                    "indefinite length on a primitive element",
                ));
            }
            let mut children = Vec::new();
            let mut pos = header;
            loop {
                if data.len() < pos + 2 {
                    return Err(Error::malformed("BER", "missing end-of-contents marker"));
                }
                if data[pos] == 0 && data[pos + 1] == 0 {
                    pos += 2;
                    break;
                }
                let (child, used) = parse_element(&data[pos..], depth + 1)?;
                children.push(child);
                pos += used;
            }
            (children, pos)
        }
        Some(len) => {
            let end = header
                .checked_add(len)
                .filter(|&end| end <= data.len())
                .ok_or_else(|| {
                    Error::malformed(
                        "BER",
                        format!("length {len} runs past the end of the input"),
                    )
                })?;
            let body = &data[header..end];
            if !constructed {
                let element = Element {
                    identifier,
                    content: Content::Primitive(Cow::Borrowed(body)),
                };
                return Ok((element, end));
            }
            let mut children = Vec::new();
            let mut pos = 0;
            while pos < body.len() {
                let (child, used) = parse_element(&body[pos..], depth + 1)?;
                children.push(child);
                pos += used;
            }
            (children, end)
        }
    };

    let element = match identifier {
        [id] if *id == CONSTRUCTED | OCTET_STRING => Element {
            identifier: &[OCTET_STRING],
            content: Content::Primitive(Cow::Owned(flatten_octets(&children)?)),
        },
        [id] if *id == CONSTRUCTED | BIT_STRING => Element {
            identifier: &[BIT_STRING],
            content: Content::Primitive(Cow::Owned(flatten_bits(&children)?)),
        },
        _ => Element {
            identifier,
            content: Content::Constructed(children),
        },
    };
    Ok((element, end))
}

fn identifier_length(data: &[u8]) -> Result<usize> {
    let first = *data
        .first()
        .ok_or_else(|| Error::malformed("BER", "truncated identifier"))?;
    if first & 0x1f != 0x1f {
        return Ok(1);
    }

    // High-tag-number form: base-128 digits, continuation bit set on all but the last
    for (i, &b) in data.iter().enumerate().skip(1) {
        if i == 1 && b == 0x80 {
            return Err(Error::malformed("BER", "non-minimal tag number"));
        }
        if i > 5 {
            return Err(Error::malformed("BER", "tag number too large"));
        }
        if b & 0x80 == 0 {
            return Ok(i + 1);
        }
    }
    Err(Error::malformed("BER", "truncated identifier"))
}

/// Decode a length field; `None` means indefinite
fn parse_length(data: &[u8]) -> Result<(Option<usize>, usize)> {
    let first = *data
        .first()
        .ok_or_else(|| Error::malformed("BER", "truncated length field"))?;
    match first {
        0x00..=0x7f => Ok((Some(first as usize), 1)),
        0x80 => Ok((None, 1)),
        0xff => Err(Error::malformed("BER", "reserved length octet")),
        _ => {
            let n = (first & 0x7f) as usize;
            if n > std::mem::size_of::<usize>() {
                return Err(Error::malformed("BER", "length field too large"));
            }
            let bytes = data
                .get(1..1 + n)
                .ok_or_else(|| Error::malformed("BER", "truncated length field"))?;
            let len = bytes.iter().fold(0usize, |acc, &b| acc << 8 | b as usize);
            Ok((Some(len), 1 + n))
        }
    }
}

fn flatten_octets(segments: &[Element<'_>]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for segment in segments {
        match (segment.identifier, &segment.content) {
            ([OCTET_STRING], Content::Primitive(bytes)) => out.extend_from_slice(bytes),
            _ => {
                return Err(Error::malformed(
                    "BER",
                    "constructed OCTET STRING holds a non-OCTET STRING segment",
                ))
            }
        }
    }
    Ok(out)
}

fn flatten_bits(segments: &[Element<'_>]) -> Result<Vec<u8>> {
    let mut out = vec![0u8];
    for (i, segment) in segments.iter().enumerate() {
        let bytes = match (segment.identifier, &segment.content) {
            ([BIT_STRING], Content::Primitive(bytes)) if !bytes.is_empty() => bytes,
            _ => {
                return Err(Error::malformed(
                    "BER",
                    "constructed BIT STRING holds an invalid segment",
                ))
            }
        };
        let unused = bytes[0];
        if unused > 7 || (unused != 0 && i + 1 != segments.len()) {
            return Err(Error::malformed(
                "BER",
                "only the last BIT STRING segment may have unused bits",
            ));
        }
        out[0] = unused;
        out.extend_from_slice(&bytes[1..]);
    }
    Ok(out)
}
