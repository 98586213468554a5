//! Block envelope wire format.
//!
//! A framed block is a fixed 14-byte prefix followed by the payload:
//!
//! | Offset | Size | Field                          |
//! |--------|------|--------------------------------|
//! | 0      | 4    | format tag (`b"BPAK"`)         |
//! | 4      | 1    | version                        |
//! | 5      | 1    | flags                          |
//! | 6      | 4    | original size (big-endian u32) |
//! | 10     | 4    | compressed size (big-endian u32) |
//! | 14     | N    | compressed payload             |
//!
//! Buffers that do not begin with the tag are legacy (uncompressed)
//! data and must be returned unchanged by decoders.

use crate::error::CodecError;

/// 4-byte tag identifying a blockpack envelope.
pub const ENVELOPE_MAGIC: [u8; 4] = *b"BPAK";

/// Current envelope version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Fixed prefix length: tag + version + flags + two u32 sizes.
pub const HEADER_LEN: usize = 14;

/// Envelope flag bits.
pub mod flags {
    /// Payload is run-length compressed.
    pub const COMPRESSED: u8 = 0x01;
    /// Payload was replaced by a dedup reference.
    pub const DEDUPLICATED: u8 = 0x02;
    /// Payload is delta-encoded against a base buffer.
    pub const DELTA_ENCODED: u8 = 0x04;
}

/// Parsed envelope prefix. Transient: constructed per call, never
/// persisted independently of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub version: u8,
    pub flags: u8,
    pub original_len: u32,
    pub compressed_len: u32,
}

impl EnvelopeHeader {
    /// Encode the prefix, tag included.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[..4].copy_from_slice(&ENVELOPE_MAGIC);
        buf[4] = self.version;
        buf[5] = self.flags;
        buf[6..10].copy_from_slice(&self.original_len.to_be_bytes());
        buf[10..14].copy_from_slice(&self.compressed_len.to_be_bytes());
        buf
    }
}

/// Frame a compressed payload into an envelope.
pub fn wrap(flag_bits: u8, original_len: u32, compressed: &[u8]) -> Vec<u8> {
    let header = EnvelopeHeader {
        version: ENVELOPE_VERSION,
        flags: flag_bits,
        original_len,
        compressed_len: compressed.len() as u32,
    };

    let mut out = Vec::with_capacity(HEADER_LEN + compressed.len());
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(compressed);
    out
}

/// Parse an envelope, bounds-checking the payload against the declared
/// compressed length.
///
/// Returns `Ok(None)` when the buffer is not an envelope at all (shorter
/// than the fixed prefix, or tag mismatch): the caller passes the input
/// through unchanged. A recognized tag with an unknown version is an
/// error, as is a declared payload length past the end of the buffer.
pub fn unwrap(buf: &[u8]) -> Result<Option<(EnvelopeHeader, &[u8])>, CodecError> {
    if buf.len() < HEADER_LEN {
        return Ok(None);
    }
    if buf[..4] != ENVELOPE_MAGIC {
        return Ok(None);
    }

    let version = buf[4];
    if version != ENVELOPE_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }

    let header = EnvelopeHeader {
        version,
        flags: buf[5],
        original_len: u32::from_be_bytes([buf[6], buf[7], buf[8], buf[9]]),
        compressed_len: u32::from_be_bytes([buf[10], buf[11], buf[12], buf[13]]),
    };

    let declared = header.compressed_len as usize;
    let available = buf.len() - HEADER_LEN;
    if declared > available {
        return Err(CodecError::PayloadOverrun { declared, available });
    }

    Ok(Some((header, &buf[HEADER_LEN..HEADER_LEN + declared])))
}
