//! RSA keys (PKCS#1 two-prime)

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use keyseal_algorithms::encoding::{DerReader, DerWriter};
use keyseal_algorithms::math::{mod_inverse, prime::generate_prime};
use keyseal_api::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{read_positive, PrivateKeyStrategy, PublicKeyStrategy};
use crate::asn1::{oid, AlgorithmIdentifier};
use crate::curves::CurveRegistry;

/// Public exponent used by [`RsaPrivateKey::generate`]
pub const DEFAULT_PUBLIC_EXPONENT: u32 = 65537;

/// Smallest modulus [`RsaPrivateKey::generate`] accepts
pub const MIN_MODULUS_BITS: usize = 512;

/// Prime pairs drawn before key generation gives up
const MAX_GENERATION_ATTEMPTS: usize = 32;

const XML_CONTEXT: &str = "RSA XML key";
const XML_ROOT: &str = "RSAKeyValue";

/// Child elements of `<RSAKeyValue>` in the order they are written
const XML_FIELDS: [&str; 8] = ["Modulus", "Exponent", "D", "P", "Q", "DP", "DQ", "InverseQ"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    public: RsaPublicKey,
    d: BigUint,
    p: BigUint,
    q: BigUint,
    dp: BigUint,
    dq: BigUint,
    qinv: BigUint,
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("bits", &self.public.n.bits())
            .field("e", &self.public.e)
            .finish_non_exhaustive()
    }
}

impl RsaPublicKey {
    /// Check `n` is odd and `e` is an odd exponent above 1
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        if n.is_even() || n.bits() < 16 {
            return Err(Error::invalid_key("RSA public key", "modulus must be odd"));
        }
        if e.is_even() || e <= BigUint::one() || e >= n {
            return Err(Error::invalid_key("RSA public key", "bad public exponent"));
        }
        Ok(Self { n, e })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Modulus length in bits
    pub fn bits(&self) -> u64 {
        self.n.bits()
    }

    /// `RSAPublicKey ::= SEQUENCE { modulus, publicExponent }`
    pub fn to_pkcs1_der(&self) -> Vec<u8> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_biguint(&self.n);
            w.write_biguint(&self.e);
        });
        w.into_bytes()
    }

    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish("RSA public key")?;
        let n = read_positive(&mut seq, "RSA modulus")?;
        let e = read_positive(&mut seq, "RSA public exponent")?;
        seq.finish("RSA public key")?;
        Self::new(n, e)
    }

    /// `<RSAKeyValue>` with base64 `Modulus` and `Exponent`, as exported by .NET
    pub fn to_xml(&self) -> Result<String> {
        let xml = write_xml(&[&self.n, &self.e])?;
        String::from_utf8(xml.to_vec()).map_err(|e| Error::construction(XML_CONTEXT, e.to_string()))
    }

    /// Parse `<RSAKeyValue>`; private elements, if present, are ignored
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut fields = read_xml(xml)?;
        let n = take_field(&mut fields, 0)?;
        let e = take_field(&mut fields, 1)?;
        Self::new(n, e)
    }
}

impl RsaPrivateKey {
    /// Generate a two-prime key with `e = 65537` and a modulus of exactly `bits` bits
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, bits: usize) -> Result<Self> {
        if bits < MIN_MODULUS_BITS || bits % 2 != 0 {
            return Err(Error::param(
                "RSA key generation",
                format!("modulus size must be even and at least {MIN_MODULUS_BITS} bits"),
            ));
        }
        let e = BigUint::from(DEFAULT_PUBLIC_EXPONENT);
        let half = (bits / 2) as u64;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let p = generate_prime(rng, half)?;
            let q = generate_prime(rng, half)?;
            if p == q {
                continue;
            }
            let lambda = (&p - 1u32).lcm(&(&q - 1u32));
            let Some(d) = mod_inverse(&e, &lambda) else {
                trace!(attempt, "public exponent not invertible, redrawing primes");
                continue;
            };
            debug!(bits, "generated RSA key");
            return Self::from_components(&p * &q, e, d, p, q);
        }
        Err(Error::RandomSourceExhausted {
            context: "RSA key generation",
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Assemble a key from `n, e, d, p, q`, deriving the CRT values
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint, p: BigUint, q: BigUint) -> Result<Self> {
        let public = RsaPublicKey::new(n, e)?;
        let qinv = mod_inverse(&q, &p)
            .ok_or_else(|| Error::invalid_key("RSA private key", "q is not invertible mod p"))?;
        let key = Self {
            dp: &d % (&p - 1u32),
            dq: &d % (&q - 1u32),
            qinv,
            public,
            d,
            p,
            q,
        };
        key.validate()?;
        Ok(key)
    }

    /// Check `n = p*q` and that `d` inverts `e` modulo both `p-1` and `q-1`
    fn validate(&self) -> Result<()> {
        let one = BigUint::one();
        if self.p <= one || self.q <= one || &self.p * &self.q != self.public.n {
            return Err(Error::invalid_key("RSA private key", "n is not p*q"));
        }
        for prime in [&self.p, &self.q] {
            let m = prime - 1u32;
            if (&self.d * &self.public.e) % &m != one {
                return Err(Error::invalid_key("RSA private key", "d does not invert e"));
            }
        }
        if self.dp != &self.d % (&self.p - 1u32)
            || self.dq != &self.d % (&self.q - 1u32)
            || (&self.qinv * &self.q) % &self.p != one
        {
            return Err(Error::invalid_key("RSA private key", "inconsistent CRT values"));
        }
        Ok(())
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.d
    }

    /// The primes `(p, q)`
    pub fn primes(&self) -> (&BigUint, &BigUint) {
        (&self.p, &self.q)
    }

    /// PKCS#1 `RSAPrivateKey`, version 0
    pub fn to_pkcs1_der(&self) -> Zeroizing<Vec<u8>> {
        let mut w = DerWriter::new();
        w.write_sequence(|w| {
            w.write_uint(0);
            w.write_biguint(&self.public.n);
            w.write_biguint(&self.public.e);
            w.write_biguint(&self.d);
            w.write_biguint(&self.p);
            w.write_biguint(&self.q);
            w.write_biguint(&self.dp);
            w.write_biguint(&self.dq);
            w.write_biguint(&self.qinv);
        });
        Zeroizing::new(w.into_bytes())
    }

    /// Parse PKCS#1 `RSAPrivateKey`; multi-prime keys are not supported
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let mut r = DerReader::new(der);
        let mut seq = r.read_sequence()?;
        r.finish("RSA private key")?;
        match seq.read_u64()? {
            0 => {}
            1 => return Err(Error::unsupported("RSA private key", "multi-prime RSA")),
            v => {
                return Err(Error::malformed(
                    "RSA private key",
                    format!("unknown version {v}"),
                ))
            }
        }
        let n = read_positive(&mut seq, "RSA modulus")?;
        let e = read_positive(&mut seq, "RSA public exponent")?;
        let d = read_positive(&mut seq, "RSA private exponent")?;
        let p = read_positive(&mut seq, "RSA prime")?;
        let q = read_positive(&mut seq, "RSA prime")?;
        let dp = read_positive(&mut seq, "RSA CRT exponent")?;
        let dq = read_positive(&mut seq, "RSA CRT exponent")?;
        let qinv = read_positive(&mut seq, "RSA CRT coefficient")?;
        seq.finish("RSA private key")?;

        let key = Self {
            public: RsaPublicKey::new(n, e)?,
            d,
            p,
            q,
            dp,
            dq,
            qinv,
        };
        key.validate()?;
        Ok(key)
    }

    /// `<RSAKeyValue>` carrying every PKCS#1 component
    pub fn to_xml(&self) -> Result<Zeroizing<String>> {
        let xml = write_xml(&[
            &self.public.n,
            &self.public.e,
            &self.d,
            &self.p,
            &self.q,
            &self.dp,
            &self.dq,
            &self.qinv,
        ])?;
        let text = std::str::from_utf8(&xml)
            .map_err(|e| Error::construction(XML_CONTEXT, e.to_string()))?;
        Ok(Zeroizing::new(text.to_owned()))
    }

    /// Parse `<RSAKeyValue>`; all eight elements are required and must agree
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut fields = read_xml(xml)?;
        let n = take_field(&mut fields, 0)?;
        let e = take_field(&mut fields, 1)?;
        let key = Self {
            public: RsaPublicKey::new(n, e)?,
            d: take_field(&mut fields, 2)?,
            p: take_field(&mut fields, 3)?,
            q: take_field(&mut fields, 4)?,
            dp: take_field(&mut fields, 5)?,
            dq: take_field(&mut fields, 6)?,
            qinv: take_field(&mut fields, 7)?,
        };
        key.validate()?;
        Ok(key)
    }
}

fn xml_error(err: quick_xml::Error) -> Error {
    Error::construction(XML_CONTEXT, err.to_string())
}

/// Write the leading `values.len()` fields of [`XML_FIELDS`] under the root element
fn write_xml(values: &[&BigUint]) -> Result<Zeroizing<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer
        .write_event(Event::Start(BytesStart::new(XML_ROOT)))
        .map_err(xml_error)?;
    for (name, value) in XML_FIELDS.iter().zip(values) {
        let encoded = Zeroizing::new(STANDARD.encode(value.to_bytes_be()));
        writer
            .write_event(Event::Start(BytesStart::new(*name)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Text(BytesText::new(&encoded)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(*name)))
            .map_err(xml_error)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(XML_ROOT)))
        .map_err(xml_error)?;
    Ok(Zeroizing::new(writer.into_inner()))
}

/// Collect the known children of `<RSAKeyValue>`; unknown elements are skipped
fn read_xml(xml: &str) -> Result<[Option<BigUint>; 8]> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut fields: [Option<BigUint>; 8] = Default::default();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current = None;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                let name = e.name();
                match depth {
                    1 if name.as_ref() == XML_ROOT.as_bytes() && !seen_root => seen_root = true,
                    1 => {
                        return Err(Error::malformed(
                            XML_CONTEXT,
                            format!("expected a single <{XML_ROOT}> element"),
                        ))
                    }
                    2 => current = XML_FIELDS.iter().position(|f| f.as_bytes() == name.as_ref()),
                    _ => {}
                }
            }
            Ok(Event::Empty(_)) if depth == 0 => {
                return Err(Error::malformed(
                    XML_CONTEXT,
                    format!("expected a single <{XML_ROOT}> element"),
                ))
            }
            Ok(Event::Text(t)) if depth == 2 => {
                if let Some(index) = current {
                    if fields[index].is_some() {
                        return Err(Error::malformed(
                            XML_CONTEXT,
                            format!("duplicate <{}>", XML_FIELDS[index]),
                        ));
                    }
                    let text = t
                        .unescape()
                        .map_err(|e| Error::malformed(XML_CONTEXT, e.to_string()))?;
                    fields[index] = Some(decode_value(XML_FIELDS[index], &text)?);
                }
            }
            Ok(Event::Text(_)) if depth < 2 => {
                return Err(Error::malformed(XML_CONTEXT, "text outside an element"));
            }
            Ok(Event::End(_)) => {
                if depth == 2 {
                    current = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::malformed(
                    XML_CONTEXT,
                    format!("error at position {}: {e}", reader.buffer_position()),
                ))
            }
        }
        buf.clear();
    }
    if !seen_root || depth != 0 {
        return Err(Error::malformed(XML_CONTEXT, format!("unterminated or missing <{XML_ROOT}>")));
    }
    Ok(fields)
}

fn decode_value(name: &str, text: &str) -> Result<BigUint> {
    let compact: Zeroizing<String> =
        Zeroizing::new(text.chars().filter(|c| !c.is_ascii_whitespace()).collect());
    let bytes = Zeroizing::new(
        STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| Error::malformed(XML_CONTEXT, format!("<{name}>: bad base64: {e}")))?,
    );
    let value = BigUint::from_bytes_be(&bytes);
    if value == BigUint::default() {
        return Err(Error::invalid_key(XML_CONTEXT, format!("<{name}> must be positive")));
    }
    Ok(value)
}

fn take_field(fields: &mut [Option<BigUint>; 8], index: usize) -> Result<BigUint> {
    fields[index]
        .take()
        .ok_or_else(|| Error::malformed(XML_CONTEXT, format!("missing <{}>", XML_FIELDS[index])))
}

fn check_parameters(algorithm: &AlgorithmIdentifier) -> Result<()> {
    if !algorithm.has_null_parameters() {
        return Err(Error::malformed("RSA AlgorithmIdentifier", "parameters must be NULL"));
    }
    Ok(())
}

impl PrivateKeyStrategy for RsaPrivateKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::with_null(oid::RSA_ENCRYPTION))
    }

    fn private_key_der(&self, _: &CurveRegistry) -> Result<Zeroizing<Vec<u8>>> {
        Ok(self.to_pkcs1_der())
    }

    fn from_private_key_der(
        algorithm: &AlgorithmIdentifier,
        der: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        check_parameters(algorithm)?;
        Self::from_pkcs1_der(der)
    }
}

impl PublicKeyStrategy for RsaPublicKey {
    fn algorithm_identifier(&self, _: &CurveRegistry) -> Result<AlgorithmIdentifier> {
        Ok(AlgorithmIdentifier::with_null(oid::RSA_ENCRYPTION))
    }

    fn public_key_bits(&self) -> Result<Vec<u8>> {
        Ok(self.to_pkcs1_der())
    }

    fn from_public_key_bits(
        algorithm: &AlgorithmIdentifier,
        bits: &[u8],
        _: &CurveRegistry,
    ) -> Result<Self> {
        check_parameters(algorithm)?;
        Self::from_pkcs1_der(bits)
    }
}
