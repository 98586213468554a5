//! Error types for the compression engine.

use blockpack_core::{CodecError, Fingerprint};
use thiserror::Error;

/// Errors that can occur during engine decode operations.
///
/// All are terminal for the call that raised them and are propagated to
/// the host; the engine never retries internally. Encode operations and
/// disabled-mode passthroughs cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Envelope or delta codec failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A dedup reference names a fingerprint that is not cached, e.g.
    /// after a cache clear between encode and decode.
    #[error("dedup pattern not found: {0}")]
    PatternNotFound(Fingerprint),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
