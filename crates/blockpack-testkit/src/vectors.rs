//! Golden wire vectors.
//!
//! Framed bytes written by one build must decode under every later
//! build, so the envelope layout is pinned here as exact hex. A failing
//! vector means the on-disk format changed; that requires a version
//! bump, not a vector edit.

use blockpack::{CompressionConfig, CompressionEngine};

/// A single golden vector: raw input and its exact framed output, both
/// hex-encoded.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    pub name: &'static str,
    pub description: &'static str,
    pub raw: String,
    pub framed: String,
}

/// All golden envelope vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "incompressible_text",
            description: "No runs, no escape bytes: payload carried verbatim",
            raw: hex::encode(b"hello world"),
            framed: concat!(
                "4250414b", // tag "BPAK"
                "01",       // version 1
                "01",       // flags: COMPRESSED
                "0000000b", // original size 11
                "0000000b", // compressed size 11
                "68656c6c6f20776f726c64",
            )
            .to_string(),
        },
        GoldenVector {
            name: "zero_run_with_tail",
            description: "Eight zeros collapse to one triple, tail is literal",
            raw: "0000000000000000010203".to_string(),
            framed: concat!("4250414b", "01", "01", "0000000b", "00000006", "ff0800", "010203")
                .to_string(),
        },
        GoldenVector {
            name: "single_escape_byte",
            description: "A lone 0xFF is always escaped, even below the run threshold",
            raw: "ff".to_string(),
            framed: concat!("4250414b", "01", "01", "00000001", "00000003", "ff01ff").to_string(),
        },
        GoldenVector {
            name: "thousand_escape_bytes",
            description: "1000 x 0xFF: three full triples plus a 235-byte remainder",
            raw: "ff".repeat(1000),
            framed: concat!(
                "4250414b",
                "01",
                "01",
                "000003e8",
                "0000000c",
                "ffffff",
                "ffffff",
                "ffffff",
                "ffebff",
            )
            .to_string(),
        },
        GoldenVector {
            name: "empty_block",
            description: "Empty input frames to a bare header",
            raw: String::new(),
            framed: concat!("4250414b", "01", "01", "00000000", "00000000").to_string(),
        },
        GoldenVector {
            name: "run_split_at_cap",
            description: "A 300-byte run splits at the 255 one-byte cap",
            raw: "07".repeat(300),
            framed: concat!(
                "4250414b",
                "01",
                "01",
                "0000012c", // 300
                "00000006",
                "ffff07", // {ESCAPE, 255, 0x07}
                "ff2d07", // {ESCAPE, 45, 0x07}
            )
            .to_string(),
        },
    ]
}

/// Re-encode every vector and compare both directions against the
/// pinned bytes.
pub fn verify_all_vectors() -> Result<(), String> {
    let engine = CompressionEngine::new(CompressionConfig::new(true, 6));

    for vector in all_vectors() {
        let raw = hex::decode(&vector.raw).map_err(|e| format!("{}: bad raw hex: {}", vector.name, e))?;

        let framed = engine.encode_block(&raw);
        if hex::encode(&framed) != vector.framed {
            return Err(format!(
                "{}: encode produced {} instead of {}",
                vector.name,
                hex::encode(&framed),
                vector.framed
            ));
        }

        let decoded = engine
            .decode_block(&framed)
            .map_err(|e| format!("{}: decode failed: {}", vector.name, e))?;
        if decoded != raw {
            return Err(format!("{}: round-trip mismatch", vector.name));
        }
    }

    Ok(())
}
