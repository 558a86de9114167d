//! AlgorithmIdentifier and the object identifiers the containers carry

use const_oid::ObjectIdentifier;
use keyseal_algorithms::encoding::{tag, DerReader, DerWriter};
use keyseal_api::{Error, Result};

/// Object identifiers, parsed at compile time from the dotted strings in
/// `keyseal_params::oids`
pub mod oid {
    use const_oid::ObjectIdentifier;
    use keyseal_params::oids;

    pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::RSA_ENCRYPTION);
    pub const DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::DSA);
    pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::EC_PUBLIC_KEY);
    pub const GOST_R3410_2001: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::GOST_R3410_2001);
    pub const ELGAMAL: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::ELGAMAL);

    pub const PBES2: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::PBES2);
    pub const PBKDF2: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::PBKDF2);
    pub const SCRYPT: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::SCRYPT);
    pub const PBE_MD5_DES_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::PBE_MD5_DES_CBC);
    pub const PBE_SHA1_DES_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::PBE_SHA1_DES_CBC);
    pub const PBE_SHA1_3DES_CBC: ObjectIdentifier =
        ObjectIdentifier::new_unwrap(oids::PBE_SHA1_3DES_CBC);

    pub const HMAC_WITH_MD5: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_MD5);
    pub const HMAC_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_SHA1);
    pub const HMAC_WITH_SHA224: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_SHA224);
    pub const HMAC_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_SHA256);
    pub const HMAC_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_SHA384);
    pub const HMAC_WITH_SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::HMAC_WITH_SHA512);

    pub const GOST28147_89: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::GOST28147_89);
    pub const GOST28147_PARAM_Z: ObjectIdentifier = ObjectIdentifier::new_unwrap(oids::GOST28147_PARAM_Z);
    pub const GOST28147_CRYPTOPRO_A: ObjectIdentifier =
        ObjectIdentifier::new_unwrap(oids::GOST28147_CRYPTOPRO_A);
}

/// `SEQUENCE { algorithm OID, parameters ANY OPTIONAL }`
///
/// `parameters` holds the complete DER encoding of the parameter element
/// (tag and length included), or `None` when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    pub oid: ObjectIdentifier,
    pub parameters: Option<Vec<u8>>,
}

impl AlgorithmIdentifier {
    pub fn new(oid: ObjectIdentifier, parameters: Option<Vec<u8>>) -> Self {
        Self { oid, parameters }
    }

    /// Identifier with an explicit `NULL` parameter
    pub fn with_null(oid: ObjectIdentifier) -> Self {
        Self {
            oid,
            parameters: Some(vec![tag::NULL, 0x00]),
        }
    }

    pub fn encode(&self, w: &mut DerWriter) {
        w.write_sequence(|w| {
            w.write_oid(&self.oid);
            if let Some(params) = &self.parameters {
                w.write_raw(params);
            }
        });
    }

    pub fn to_der(&self) -> Vec<u8> {
        let mut w = DerWriter::new();
        self.encode(&mut w);
        w.into_bytes()
    }

    pub fn decode(r: &mut DerReader<'_>) -> Result<Self> {
        let mut seq = r.read_sequence()?;
        let oid = seq.read_oid()?;
        let parameters = if seq.is_empty() {
            None
        } else {
            Some(seq.read_raw()?.to_vec())
        };
        seq.finish("AlgorithmIdentifier")?;
        Ok(Self { oid, parameters })
    }

    /// Whether the parameters are absent or an explicit `NULL`
    pub fn has_null_parameters(&self) -> bool {
        matches!(self.parameters.as_deref(), None | Some([tag::NULL, 0x00]))
    }

    /// Reader over the parameter element, failing if there is none
    pub fn parameters_reader(&self, context: &'static str) -> Result<DerReader<'_>> {
        self.parameters
            .as_deref()
            .map(DerReader::new)
            .ok_or_else(|| Error::malformed(context, "missing algorithm parameters"))
    }

    /// Read the parameters as a single OBJECT IDENTIFIER
    pub fn parameters_oid(&self, context: &'static str) -> Result<ObjectIdentifier> {
        let mut r = self.parameters_reader(context)?;
        let oid = r.read_oid()?;
        r.finish(context)?;
        Ok(oid)
    }
}

/// DER encoding of a bare OBJECT IDENTIFIER, for use as parameters
pub fn oid_parameters(oid: &ObjectIdentifier) -> Vec<u8> {
    let mut w = DerWriter::new();
    w.write_oid(oid);
    w.into_bytes()
}
