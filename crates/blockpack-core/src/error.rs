//! Error types for the blockpack codecs.

use thiserror::Error;

/// Errors raised while decoding envelopes or applying deltas.
///
/// An unrecognized format tag is deliberately NOT an error: it is the
/// legacy-passthrough path for data written before compression was
/// enabled, and decoders return the input unchanged instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Recognized envelope tag, unknown version byte.
    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    /// The envelope declares more payload bytes than the buffer holds.
    #[error("declared compressed length {declared} exceeds remaining {available} bytes")]
    PayloadOverrun { declared: usize, available: usize },

    /// Decompressed payload does not match the declared original length.
    #[error("decompressed length {actual} does not match declared original length {declared}")]
    LengthMismatch { declared: usize, actual: usize },

    /// Delta buffer is shorter than its 4-byte length prefix.
    #[error("delta is shorter than its 4-byte length prefix")]
    TruncatedDelta,

    /// Delta length prefix would make the target length negative.
    #[error("delta declares a negative target length")]
    NegativeTargetLength,

    /// Reconstructed target length does not match the declared delta.
    #[error("patched length {actual} does not match expected {expected}")]
    DeltaMismatch { expected: usize, actual: usize },
}
