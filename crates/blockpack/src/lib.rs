//! # Blockpack
//!
//! Transparent compression and deduplication beneath an append-only
//! ledger's block/transaction storage path.
//!
//! The [`CompressionEngine`] converts raw serialized block and
//! transaction buffers into a smaller, self-describing on-disk form and
//! reconstructs the original bytes exactly on read. Stored bytes are
//! later rehashed against consensus-level commitments, so round-trips
//! are bit-for-bit lossless, and data written before compression was
//! enabled passes through decoders unchanged.
//!
//! ## Usage
//!
//! The host's storage subsystem constructs one engine and shares it by
//! reference across its read/write paths:
//!
//! ```rust
//! use blockpack::{CompressionConfig, CompressionEngine};
//!
//! let engine = CompressionEngine::new(CompressionConfig::new(true, 6));
//!
//! let raw = vec![0u8; 4096];
//! let framed = engine.encode_block(&raw);
//! assert!(framed.len() < raw.len());
//! assert_eq!(engine.decode_block(&framed).unwrap(), raw);
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod stats;

pub use cache::{Observation, Pattern, PatternCache};
pub use config::{CompressionConfig, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
pub use engine::{CompressionEngine, DEDUP_MARKER, DEDUP_REF_LEN};
pub use error::{EngineError, Result};
pub use stats::CompressionStats;
