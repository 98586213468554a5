//! Wire-format golden tests.
//!
//! The on-disk representation is a compatibility surface: blocks framed
//! by one build must decode under every later build. These tests pin
//! the exact bytes the engine produces for known inputs.

use blockpack::{CompressionConfig, CompressionEngine, DEDUP_MARKER, DEDUP_REF_LEN};
use blockpack_core::Fingerprint;

fn engine_at(level: i32) -> CompressionEngine {
    CompressionEngine::new(CompressionConfig::new(true, level))
}

#[test]
fn golden_incompressible_block() {
    // "hello world" has no runs and no escape bytes: the payload is
    // carried verbatim behind the 14-byte header.
    let engine = engine_at(6);
    let framed = engine.encode_block(b"hello world");

    assert_eq!(
        hex::encode(&framed),
        concat!(
            "4250414b", // tag "BPAK"
            "01",       // version
            "01",       // flags: COMPRESSED
            "0000000b", // original size: 11
            "0000000b", // compressed size: 11
            "68656c6c6f20776f726c64",
        )
    );
    assert_eq!(engine.decode_block(&framed).unwrap(), b"hello world");
}

#[test]
fn golden_run_heavy_block() {
    // Eight zeros collapse to one triple; the trailing bytes ride along
    // literally.
    let engine = engine_at(6);
    let mut raw = vec![0x00; 8];
    raw.extend_from_slice(&[0x01, 0x02, 0x03]);

    let framed = engine.encode_block(&raw);
    assert_eq!(
        hex::encode(&framed),
        concat!(
            "4250414b",
            "01",
            "01",
            "0000000b", // 11 original
            "00000006", // 6 compressed
            "ff0800",   // {ESCAPE, 8, 0x00}
            "010203",
        )
    );
    assert_eq!(engine.decode_block(&framed).unwrap(), raw);
}

#[test]
fn golden_escape_byte_block() {
    // A single literal 0xFF must be escaped, expanding 1 byte to 3.
    let engine = engine_at(6);
    let framed = engine.encode_block(&[0xFF]);

    assert_eq!(
        hex::encode(&framed),
        concat!("4250414b", "01", "01", "00000001", "00000003", "ff01ff")
    );
    assert_eq!(engine.decode_block(&framed).unwrap(), vec![0xFF]);
}

#[test]
fn golden_thousand_escape_bytes() {
    // The spec scenario: level 9, 1000 x 0xFF. Output starts with the
    // tag, stays well under 1014 bytes, and round-trips exactly.
    let engine = engine_at(9);
    let raw = vec![0xFF; 1000];

    let framed = engine.encode_block(&raw);
    assert_eq!(
        hex::encode(&framed),
        concat!(
            "4250414b",
            "01",
            "01",
            "000003e8", // 1000 original
            "0000000c", // 12 compressed: 255+255+255+235
            "ffffff",
            "ffffff",
            "ffffff",
            "ffebff",
        )
    );
    assert!(framed.len() < 1014);
    assert_eq!(engine.decode_block(&framed).unwrap(), raw);
}

#[test]
fn golden_dedup_reference_layout() {
    let engine = engine_at(6);
    let raw = b"repeated transaction".to_vec();

    engine.encode_transaction(&raw);
    let reference = engine.encode_transaction(&raw);

    assert_eq!(reference.len(), DEDUP_REF_LEN);
    assert_eq!(reference[0], DEDUP_MARKER);
    assert_eq!(&reference[1..], Fingerprint::of(&raw).as_bytes());
}

#[test]
fn golden_delta_vectors() {
    use blockpack_core::delta;

    // Equal lengths: zero size prefix, pure XOR body.
    assert_eq!(hex::encode(delta::diff(b"abc", b"abd")), "00000000000007");

    // Growing from empty: body is the target verbatim.
    assert_eq!(hex::encode(delta::diff(b"", b"xy")), "000000027879");

    // Shrinking by two: negative big-endian prefix.
    assert_eq!(hex::encode(delta::diff(b"xyxy", b"xy")), "fffffffe0000");
}

#[test]
fn framed_blocks_survive_later_disable_and_reenable() {
    // Output is self-describing: a block framed at one level decodes
    // whatever the level is later, as long as compression is enabled.
    let engine = engine_at(9);
    let raw: Vec<u8> = (0u8..=255).cycle().take(3000).collect();
    let framed = engine.encode_block(&raw);

    engine.set_level(1);
    assert_eq!(engine.decode_block(&framed).unwrap(), raw);
}
