//! Error type definitions for encoding and cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for keyseal operations
///
/// Every variant carries a static `context` naming the operation that failed,
/// plus a free-form message or the identifier that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Bad BER/DER, unexpected trailing bytes, wrong field count
    #[error("malformed encoding: {context}: {message}")]
    MalformedEncoding {
        context: &'static str,
        message: String,
    },

    /// Unknown OID, cipher name or KDF name
    #[error("unsupported algorithm: {context}: {identifier}")]
    UnsupportedAlgorithm {
        context: &'static str,
        identifier: String,
    },

    /// Zero or negative scalar, off-curve point, wrong byte length
    #[error("invalid key material: {context}: {message}")]
    InvalidKeyMaterial {
        context: &'static str,
        message: String,
    },

    /// Wrong password, tag mismatch, truncated ciphertext
    #[error("decryption failed: {context}: {message}")]
    DecryptionFailure {
        context: &'static str,
        message: String,
    },

    /// Malformed cipher construction parameters
    #[error("construction error: {context}: {message}")]
    ConstructionError {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid caller-supplied parameter
    #[error("invalid parameter: {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A retry loop drew only rejected values from the random source
    #[error("random source exhausted: {context} after {attempts} attempts")]
    RandomSourceExhausted {
        context: &'static str,
        attempts: usize,
    },

    /// The random source itself reported a failure
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Fieldless discriminant of [`Error`], for matching on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    MalformedEncoding,
    UnsupportedAlgorithm,
    InvalidKeyMaterial,
    DecryptionFailure,
    ConstructionError,
    InvalidLength,
    InvalidParameter,
    RandomSourceExhausted,
    RandomGeneration,
}

/// Result type for keyseal operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Create a malformed-encoding error
    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            context,
            message: message.into(),
        }
    }

    /// Create an unsupported-algorithm error naming the unresolved identifier
    pub fn unsupported(context: &'static str, identifier: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            context,
            identifier: identifier.into(),
        }
    }

    /// Create an invalid-key-material error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKeyMaterial {
            context,
            message: message.into(),
        }
    }

    /// Create a decryption-failure error
    pub fn decryption(context: &'static str, message: impl Into<String>) -> Self {
        Self::DecryptionFailure {
            context,
            message: message.into(),
        }
    }

    /// Create a construction error
    pub fn construction(context: &'static str, message: impl Into<String>) -> Self {
        Self::ConstructionError {
            context,
            message: message.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedEncoding { .. } => ErrorKind::MalformedEncoding,
            Self::UnsupportedAlgorithm { .. } => ErrorKind::UnsupportedAlgorithm,
            Self::InvalidKeyMaterial { .. } => ErrorKind::InvalidKeyMaterial,
            Self::DecryptionFailure { .. } => ErrorKind::DecryptionFailure,
            Self::ConstructionError { .. } => ErrorKind::ConstructionError,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::RandomSourceExhausted { .. } => ErrorKind::RandomSourceExhausted,
            Self::RandomGeneration { .. } => ErrorKind::RandomGeneration,
        }
    }

    /// The static context recorded when the error was raised
    pub fn context(&self) -> &'static str {
        match self {
            Self::MalformedEncoding { context, .. }
            | Self::UnsupportedAlgorithm { context, .. }
            | Self::InvalidKeyMaterial { context, .. }
            | Self::DecryptionFailure { context, .. }
            | Self::ConstructionError { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomSourceExhausted { context, .. }
            | Self::RandomGeneration { context, .. } => context,
        }
    }

    /// Replace the context, keeping the rest of the error intact
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            Self::UnsupportedAlgorithm { identifier, .. } => {
                Self::UnsupportedAlgorithm { context, identifier }
            }
            Self::InvalidKeyMaterial { message, .. } => Self::InvalidKeyMaterial { context, message },
            Self::DecryptionFailure { message, .. } => Self::DecryptionFailure { context, message },
            Self::ConstructionError { message, .. } => Self::ConstructionError { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomSourceExhausted { attempts, .. } => {
                Self::RandomSourceExhausted { context, attempts }
            }
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
        }
    }
}
