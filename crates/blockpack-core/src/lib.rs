//! # Blockpack Core
//!
//! Pure primitives for blockpack: the run-length byte codec, the block
//! envelope wire format, the delta primitive, and content fingerprints.
//!
//! This crate contains no I/O and no shared state. It is pure computation
//! over byte buffers; the stateful engine lives in the `blockpack` crate.
//!
//! ## Key Pieces
//!
//! - [`rle`] - Lossless run-length transform between raw and compressed bytes
//! - [`envelope`] - Self-describing framing (tag, version, flags, sizes)
//! - [`delta`] - Byte-wise difference between two buffers
//! - [`Fingerprint`] - Content-addressed identifier (Blake3 hash)
//!
//! ## Round-Trip Guarantee
//!
//! Stored ledger bytes are later rehashed against consensus commitments,
//! so every transform here reproduces its input bit-for-bit on decode.

pub mod delta;
pub mod envelope;
pub mod error;
pub mod fingerprint;
pub mod rle;

pub use envelope::{EnvelopeHeader, ENVELOPE_MAGIC, ENVELOPE_VERSION, HEADER_LEN};
pub use error::CodecError;
pub use fingerprint::Fingerprint;
