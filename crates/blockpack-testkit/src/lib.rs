//! # Blockpack Testkit
//!
//! Testing utilities for blockpack.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known inputs with their exact framed bytes, so
//!   any change to the on-disk format is caught immediately
//! - **Generators**: proptest strategies for property-based testing,
//!   including run-heavy buffers that exercise the byte codec
//! - **Fixtures**: deterministic sample block/transaction buffers and
//!   pre-configured engines
//!
//! ## Golden Vectors
//!
//! ```rust
//! use blockpack_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{}: {} -> {} bytes", vector.name, vector.raw.len() / 2, vector.framed.len() / 2);
//! }
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use blockpack_testkit::generators::runny_bytes;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrips(raw in runny_bytes(4096)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{enabled_engine, sample_block, sample_transaction};
pub use generators::{level, raw_bytes, runny_bytes};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
