//! Error types for Setsum Core.
//!
//! Decoding a digest is the only fallible operation; every other
//! accumulator operation is total.

use thiserror::Error;

/// Why a digest could not be decoded into a [`Setsum`](crate::Setsum).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex digest length: expected {expected} characters, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
