//! Crate-level error type and `Result` alias.
//!
//! Every variant is an input-validation failure detected before any
//! computation starts. The operations are pure, so retrying with the same
//! input yields the same error.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Source or target width/height is zero.
    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A policy parameter is out of range (empty candidates, zero alignment,
    /// budget smaller than one alignment cell).
    #[error("invalid argument {arg}: {reason}")]
    InvalidArgument {
        arg: &'static str,
        reason: &'static str,
    },

    /// A preset or resampler label did not match any known entry.
    #[error("unknown {kind} label")]
    UnknownLabel { kind: &'static str },
}
