//! Run-length byte codec.
//!
//! The compressed stream is a mix of literal bytes and 3-byte escape
//! triples `{ESCAPE, run_len, value}`. A maximal run of an identical
//! byte of length >= [`MIN_RUN`] (capped at [`MAX_RUN`] by the one-byte
//! length field) is emitted as a triple; shorter runs are copied
//! literally. Literal occurrences of the escape byte itself are ALWAYS
//! emitted as a triple, whatever the run length, so the compressed
//! stream contains [`ESCAPE`] only as a triple leader and every input
//! round-trips exactly.

/// Escape byte introducing a `{ESCAPE, run_len, value}` triple.
pub const ESCAPE: u8 = 0xFF;

/// Shortest run worth encoding as a triple (below this a triple expands).
pub const MIN_RUN: usize = 4;

/// Longest run a single triple can describe (one-byte length field).
pub const MAX_RUN: usize = 255;

/// Compress a buffer. Empty input maps to empty output.
///
/// `level` is accepted and reserved for future tuning; it does not
/// currently alter the output.
pub fn compress(input: &[u8], _level: u8) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());

    let mut i = 0;
    while i < input.len() {
        let value = input[i];
        let mut run = 1;
        while i + run < input.len() && input[i + run] == value && run < MAX_RUN {
            run += 1;
        }

        if run >= MIN_RUN || value == ESCAPE {
            output.push(ESCAPE);
            output.push(run as u8);
            output.push(value);
        } else {
            for _ in 0..run {
                output.push(value);
            }
        }

        i += run;
    }

    output
}

/// Expand a compressed buffer. Empty input maps to empty output.
///
/// Every complete `{ESCAPE, run_len, value}` triple expands to `run_len`
/// copies of `value`; all other bytes are copied through, including a
/// truncated trailing escape (engine-produced buffers never truncate
/// mid-triple, and legacy data must pass through unchanged).
pub fn decompress(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * 2);

    let mut i = 0;
    while i < input.len() {
        if input[i] == ESCAPE && i + 2 < input.len() {
            let run = input[i + 1] as usize;
            let value = input[i + 2];
            for _ in 0..run {
                output.push(value);
            }
            i += 3;
        } else {
            output.push(input[i]);
            i += 1;
        }
    }

    output
}
