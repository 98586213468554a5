//! Delta primitive: byte-wise difference between two buffers.
//!
//! A delta is a 4-byte big-endian signed length difference
//! (`target_len - base_len`), followed by the XOR of the overlapping
//! prefix of target against base, followed by any suffix of target
//! beyond base's length verbatim.
//!
//! A standalone extension point for similar-block storage; not wired
//! into the block or transaction paths.

use crate::error::CodecError;

/// Length of the signed size-difference prefix.
const PREFIX_LEN: usize = 4;

/// Compute the delta that transforms `base` into `target`.
pub fn diff(base: &[u8], target: &[u8]) -> Vec<u8> {
    let size_diff = (target.len() as i64 - base.len() as i64) as i32;

    let mut delta = Vec::with_capacity(PREFIX_LEN + target.len());
    delta.extend_from_slice(&size_diff.to_be_bytes());

    let overlap = base.len().min(target.len());
    for i in 0..overlap {
        delta.push(target[i] ^ base[i]);
    }
    delta.extend_from_slice(&target[overlap..]);

    delta
}

/// Reconstruct the target buffer from `base` and a delta produced by
/// [`diff`].
pub fn patch(base: &[u8], delta: &[u8]) -> Result<Vec<u8>, CodecError> {
    if delta.len() < PREFIX_LEN {
        return Err(CodecError::TruncatedDelta);
    }

    let size_diff = i32::from_be_bytes([delta[0], delta[1], delta[2], delta[3]]) as i64;
    let expected = base.len() as i64 + size_diff;
    if expected < 0 {
        return Err(CodecError::NegativeTargetLength);
    }
    let expected = expected as usize;

    let body = &delta[PREFIX_LEN..];
    let mut target = Vec::with_capacity(body.len());
    for (i, &byte) in body.iter().enumerate() {
        if i < base.len() {
            target.push(base[i] ^ byte);
        } else {
            target.push(byte);
        }
    }

    if target.len() != expected {
        return Err(CodecError::DeltaMismatch {
            expected,
            actual: target.len(),
        });
    }

    Ok(target)
}
