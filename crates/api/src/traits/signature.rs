//! Digest signature traits
//!
//! Signers in keyseal operate on a digest the caller already computed; the
//! hash function is chosen outside this layer.

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Produce signatures over precomputed digests
pub trait DigestSigner {
    /// Signature representation produced by this signer
    type Signature;

    /// Sign `digest`, drawing nonces from `rng`
    ///
    /// Implementations must bound any nonce-retry loop and report
    /// [`Error::RandomSourceExhausted`](crate::Error::RandomSourceExhausted)
    /// instead of looping forever.
    fn sign_digest<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        digest: &[u8],
    ) -> Result<Self::Signature>;
}

/// Check signatures over precomputed digests
pub trait DigestVerifier {
    /// Signature representation accepted by this verifier
    type Signature: ?Sized;

    /// Verify `signature` over `digest`
    ///
    /// An invalid signature is `Ok(false)`. Only an unparsable signature
    /// encoding is an error.
    fn verify_digest(&self, digest: &[u8], signature: &Self::Signature) -> Result<bool>;
}
