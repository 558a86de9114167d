//! Result adapters shared by the codec layers

use super::types::{Error, ErrorKind, Result};

/// Context rewriting on `Result`s that carry a keyseal [`Error`]
pub trait ResultExt<T>: Sized {
    /// Relabel the error with the operation that observed it
    fn with_context(self, context: &'static str) -> Result<T>;

    /// Treat an undecodable plaintext as a decryption failure
    ///
    /// Bytes recovered with a wrong password usually fail to parse rather
    /// than fail to decrypt; callers on the far side of a cipher report
    /// those as [`ErrorKind::DecryptionFailure`]. Other kinds pass through.
    fn malformed_as_decryption(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn malformed_as_decryption(self, context: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            err if err.kind() == ErrorKind::MalformedEncoding => {
                Error::decryption(context, "wrong password or corrupt data")
            }
            err => err,
        })
    }
}
