//! Signature representations shared by the curve-based schemes

use keyseal_algorithms::encoding::der::positive;
use keyseal_algorithms::math::to_padded_bytes;
use keyseal_algorithms::{DerReader, DerWriter};
use keyseal_api::{Error, Result};
use num_bigint::BigUint;

/// The integer pair `(r, s)` of a curve signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: BigUint,
    pub s: BigUint,
}

impl SignatureComponents {
    /// DER `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        let mut writer = DerWriter::new();
        writer.write_sequence(|seq| {
            seq.write_biguint(&self.r);
            seq.write_biguint(&self.s);
        });
        writer.into_bytes()
    }

    /// Parse DER `SEQUENCE { INTEGER r, INTEGER s }`
    ///
    /// Both integers must be positive; range checks against the group order
    /// are left to verification, which treats them as a normal rejection.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut outer = DerReader::new(der);
        let mut seq = outer.read_sequence()?;
        let r = positive(seq.read_bigint()?, "signature r")
            .map_err(|_| Error::malformed("signature", "r is not a positive integer"))?;
        let s = positive(seq.read_bigint()?, "signature s")
            .map_err(|_| Error::malformed("signature", "s is not a positive integer"))?;
        seq.finish("signature")?;
        outer.finish("signature")?;
        Ok(Self { r, s })
    }

    /// `r || s`, each left-padded to `width` bytes
    pub fn to_fixed(&self, width: usize) -> Result<Vec<u8>> {
        let mut out = to_padded_bytes(&self.r, width)?;
        out.extend_from_slice(&to_padded_bytes(&self.s, width)?);
        Ok(out)
    }

    /// Split `r || s` of two equal halves of `width` bytes
    pub fn from_fixed(bytes: &[u8], width: usize) -> Result<Self> {
        if bytes.len() != 2 * width {
            return Err(Error::malformed(
                "signature",
                format!("expected {} bytes, got {}", 2 * width, bytes.len()),
            ));
        }
        Ok(Self {
            r: BigUint::from_bytes_be(&bytes[..width]),
            s: BigUint::from_bytes_be(&bytes[width..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyseal_api::ErrorKind;

    #[test]
    fn test_der_round_trip_with_high_bit() {
        let sig = SignatureComponents {
            r: BigUint::from(0x80u32),
            s: BigUint::from(0x0102u32),
        };
        let der = sig.to_der();
        assert_eq!(hex::encode(&der), "30080202008002020102");
        assert_eq!(SignatureComponents::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn test_der_rejects_zero_and_trailing() {
        assert_eq!(
            SignatureComponents::from_der(&hex::decode("3006020100020101").unwrap())
                .unwrap_err()
                .kind(),
            ErrorKind::MalformedEncoding
        );
        let mut der = SignatureComponents {
            r: BigUint::from(1u32),
            s: BigUint::from(1u32),
        }
        .to_der();
        der.push(0);
        assert_eq!(
            SignatureComponents::from_der(&der).unwrap_err().kind(),
            ErrorKind::MalformedEncoding
        );
    }

    #[test]
    fn test_fixed_width() {
        let sig = SignatureComponents {
            r: BigUint::from(1u32),
            s: BigUint::from(0xffffu32),
        };
        let bytes = sig.to_fixed(4).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1, 0, 0, 0xff, 0xff]);
        assert_eq!(SignatureComponents::from_fixed(&bytes, 4).unwrap(), sig);
        assert!(SignatureComponents::from_fixed(&bytes[..7], 4).is_err());
    }
}
