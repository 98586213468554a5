//! Compression statistics.
//!
//! Cumulative counters mutated on every encode call and reset only on
//! explicit request. Counters are relaxed atomics: they are monotonic
//! telemetry, not synchronization.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of the engine's cumulative counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Raw bytes fed into the byte codec.
    pub bytes_original: u64,
    /// Bytes the byte codec produced.
    pub bytes_compressed: u64,
    /// Blocks framed by the envelope codec.
    pub blocks_processed: u64,
    /// Transactions replaced by a dedup reference.
    pub dedup_hits: u64,
}

impl CompressionStats {
    /// Compressed-to-original ratio; 1.0 before any traffic.
    pub fn ratio(&self) -> f64 {
        if self.bytes_original > 0 {
            self.bytes_compressed as f64 / self.bytes_original as f64
        } else {
            1.0
        }
    }
}

/// Live counters behind the snapshots.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    bytes_original: AtomicU64,
    bytes_compressed: AtomicU64,
    blocks_processed: AtomicU64,
    dedup_hits: AtomicU64,
}

impl StatsRecorder {
    pub fn record_compress(&self, original: usize, compressed: usize) {
        self.bytes_original
            .fetch_add(original as u64, Ordering::Relaxed);
        self.bytes_compressed
            .fetch_add(compressed as u64, Ordering::Relaxed);
    }

    pub fn record_block(&self) {
        self.blocks_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dedup_hit(&self) {
        self.dedup_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CompressionStats {
        CompressionStats {
            bytes_original: self.bytes_original.load(Ordering::Relaxed),
            bytes_compressed: self.bytes_compressed.load(Ordering::Relaxed),
            blocks_processed: self.blocks_processed.load(Ordering::Relaxed),
            dedup_hits: self.dedup_hits.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.bytes_original.store(0, Ordering::Relaxed);
        self.bytes_compressed.store(0, Ordering::Relaxed);
        self.blocks_processed.store(0, Ordering::Relaxed);
        self.dedup_hits.store(0, Ordering::Relaxed);
    }
}
