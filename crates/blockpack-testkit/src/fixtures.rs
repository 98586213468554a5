//! Deterministic fixtures for test scenarios.
//!
//! Sample buffers imitate the shape of real serialized ledger data:
//! a fixed-size header with zero-padded fields (long runs the codec
//! collapses) followed by mostly-incompressible payload bytes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockpack::{CompressionConfig, CompressionEngine};

/// An engine with compression enabled at the given level.
pub fn enabled_engine(level: i32) -> CompressionEngine {
    CompressionEngine::new(CompressionConfig::new(true, level))
}

/// A deterministic pseudo-serialized transaction buffer.
///
/// Layout: 4-byte version, 36-byte zeroed outpoint, a seeded script
/// blob, and a zero-padded lock time.
pub fn sample_transaction(seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut tx = Vec::with_capacity(256);
    tx.extend_from_slice(&1u32.to_le_bytes());
    tx.extend_from_slice(&[0u8; 36]);

    let script_len = rng.gen_range(32..160);
    tx.push(script_len as u8);
    for _ in 0..script_len {
        tx.push(rng.gen());
    }

    tx.extend_from_slice(&[0u8; 4]);
    tx
}

/// A deterministic pseudo-serialized block buffer holding `tx_count`
/// transactions behind an 80-byte header.
pub fn sample_block(seed: u64, tx_count: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut block = Vec::with_capacity(80 + tx_count * 200);

    // Header: version, zeroed prev-hash (a 32-byte run), random merkle
    // root, timestamp, bits, nonce.
    block.extend_from_slice(&2u32.to_le_bytes());
    block.extend_from_slice(&[0u8; 32]);
    let merkle: [u8; 32] = rng.gen();
    block.extend_from_slice(&merkle);
    block.extend_from_slice(&1_700_000_000u32.to_le_bytes());
    block.extend_from_slice(&0x1d00_ffffu32.to_le_bytes());
    block.extend_from_slice(&rng.gen::<u32>().to_le_bytes());

    block.push(tx_count as u8);
    for i in 0..tx_count {
        block.extend_from_slice(&sample_transaction(seed.wrapping_add(i as u64 + 1)));
    }

    block
}
