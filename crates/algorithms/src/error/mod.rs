//! Error handling for keyseal primitives
//!
//! The primitives share the workspace error type so failures flow up to the
//! codec without conversion layers.

pub use keyseal_api::error::{validate, Error, ErrorKind, Result, ResultExt};
