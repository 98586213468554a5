//! Content-addressed pattern cache for transaction deduplication.
//!
//! The cache is process-lifetime only: it never evicts, and it is not
//! persisted across restarts. A dedup reference is therefore only
//! decodable within the process that produced it; the host clears the
//! cache explicitly when it invalidates stored references. Growth is
//! unbounded on purpose — [`PatternCache::size_bytes`] and
//! [`PatternCache::len`] exist so the host can monitor it.

use std::collections::HashMap;
use std::mem;
use std::sync::RwLock;

use bytes::Bytes;

use blockpack_core::Fingerprint;

/// A stored payload keyed by its content fingerprint.
///
/// `ref_count` counts how many times the payload has been observed,
/// including the first insertion.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub fingerprint: Fingerprint,
    pub data: Bytes,
    pub ref_count: u64,
}

/// Outcome of a combined lookup-then-insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Fingerprint was already cached; its ref_count was bumped.
    Hit,
    /// First sighting; the pattern was inserted with ref_count 1.
    Inserted,
}

/// Deduplication cache. Thread-safe via RwLock.
pub struct PatternCache {
    inner: RwLock<HashMap<Fingerprint, Pattern>>,
}

impl PatternCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Combined lookup-then-insert for one fingerprint, executed as a
    /// single critical section: two concurrent encodes of the same
    /// never-before-seen payload cannot both observe "absent" and both
    /// insert.
    ///
    /// On a hit the stored bytes are NOT rewritten — identical
    /// fingerprints imply identical bytes. The ref_count increments
    /// only here; hit/miss accounting is the caller's concern.
    pub fn observe(&self, fingerprint: Fingerprint, data: &[u8]) -> Observation {
        let mut inner = self.inner.write().unwrap();

        if let Some(pattern) = inner.get_mut(&fingerprint) {
            pattern.ref_count += 1;
            Observation::Hit
        } else {
            inner.insert(
                fingerprint,
                Pattern {
                    fingerprint,
                    data: Bytes::copy_from_slice(data),
                    ref_count: 1,
                },
            );
            Observation::Inserted
        }
    }

    /// Get the stored bytes for a fingerprint.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<Bytes> {
        let inner = self.inner.read().unwrap();
        inner.get(fingerprint).map(|pattern| pattern.data.clone())
    }

    /// Current ref_count for a fingerprint.
    pub fn ref_count(&self, fingerprint: &Fingerprint) -> Option<u64> {
        let inner = self.inner.read().unwrap();
        inner.get(fingerprint).map(|pattern| pattern.ref_count)
    }

    /// Drop every stored pattern.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.clear();
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.len()
    }

    /// Whether the cache holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate resident size: stored byte lengths plus a fixed
    /// per-entry struct overhead. Monitoring only; nothing evicts on
    /// this value.
    pub fn size_bytes(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner
            .values()
            .map(|pattern| pattern.data.len() + mem::size_of::<Pattern>())
            .sum()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
