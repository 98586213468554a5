//! Proptest generators for property-based testing.

use proptest::prelude::*;

use blockpack_core::Fingerprint;

/// Arbitrary byte buffers up to `max_len`.
pub fn raw_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Run-heavy buffers: concatenated runs of a single byte value, the
/// shape the run-length codec is built for. Run lengths straddle both
/// the minimum-run and the 255-cap boundaries.
pub fn runny_bytes(max_runs: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((any::<u8>(), 1usize..=600), 0..=max_runs).prop_map(|runs| {
        runs.iter()
            .flat_map(|&(value, count)| std::iter::repeat(value).take(count))
            .collect()
    })
}

/// A valid compression level.
pub fn level() -> impl Strategy<Value = i32> {
    1i32..=9
}

/// A random fingerprint (not necessarily of any real payload).
pub fn fingerprint() -> impl Strategy<Value = Fingerprint> {
    any::<[u8; 32]>().prop_map(Fingerprint::from_bytes)
}
