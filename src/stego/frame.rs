// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Payload frame construction and parsing.
//!
//! The frame is the byte sequence embedded into the raster's bit plane:
//!
//! ```text
//! [tag      ] "ENCRYPTED:" or "PLAIN:"  (ASCII, signals cipher mode)
//! [payload  ] message bytes, XOR-enciphered when the tag says so
//! [delimiter] "|||END|||"               (end-of-message sentinel)
//! ```
//!
//! The decoder scans for an exact bit-level suffix match of the delimiter,
//! so the sentinel only needs to be improbable in framed payloads, not
//! unguessable. Tag and delimiter literals live here and nowhere else —
//! encoder and decoder agreement is by shared constant, not by convention.

/// Tag prefix for XOR-enciphered payloads.
pub const TAG_ENCRYPTED: &str = "ENCRYPTED:";

/// Tag prefix for cleartext payloads.
pub const TAG_PLAIN: &str = "PLAIN:";

/// End-of-message sentinel appended after the payload.
pub const DELIMITER: &str = "|||END|||";

/// Frame overhead in bytes for the given cipher mode (tag + delimiter).
pub fn overhead(encrypted: bool) -> usize {
    tag(encrypted).len() + DELIMITER.len()
}

/// The tag literal for the given cipher mode.
pub fn tag(encrypted: bool) -> &'static str {
    if encrypted {
        TAG_ENCRYPTED
    } else {
        TAG_PLAIN
    }
}

/// A parsed frame, split by recognized tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFrame {
    /// Payload behind [`TAG_ENCRYPTED`]; still XOR-enciphered.
    Encrypted(Vec<u8>),
    /// Payload behind [`TAG_PLAIN`]; cleartext bytes.
    Plain(Vec<u8>),
    /// No recognized tag. Tolerated for rasters framed by older encoders
    /// that wrote bare payloads; not part of the encode contract.
    Untagged(Vec<u8>),
}

/// Build a frame: tag + payload + delimiter.
///
/// The payload is taken as already transformed (enciphered or not) — the
/// frame layer never touches the cipher.
pub fn build(payload: &[u8], encrypted: bool) -> Vec<u8> {
    let tag = tag(encrypted).as_bytes();
    let mut frame = Vec::with_capacity(tag.len() + payload.len() + DELIMITER.len());
    frame.extend_from_slice(tag);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(DELIMITER.as_bytes());
    frame
}

/// Parse frame bytes with the delimiter already stripped by the bit scan.
///
/// Tag inspection happens at the byte level because an enciphered payload is
/// not guaranteed to be valid UTF-8.
pub fn parse(bytes: &[u8]) -> ParsedFrame {
    if let Some(payload) = bytes.strip_prefix(TAG_ENCRYPTED.as_bytes()) {
        ParsedFrame::Encrypted(payload.to_vec())
    } else if let Some(payload) = bytes.strip_prefix(TAG_PLAIN.as_bytes()) {
        ParsedFrame::Plain(payload.to_vec())
    } else {
        ParsedFrame::Untagged(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_parse_roundtrip_plain() {
        let frame = build(b"hello", false);
        assert_eq!(frame, b"PLAIN:hello|||END|||");
        let stripped = &frame[..frame.len() - DELIMITER.len()];
        assert_eq!(parse(stripped), ParsedFrame::Plain(b"hello".to_vec()));
    }

    #[test]
    fn build_parse_roundtrip_encrypted() {
        // Arbitrary non-UTF-8 payload bytes must survive.
        let payload = vec![0x00, 0xFF, 0x80, 0x41];
        let frame = build(&payload, true);
        assert!(frame.starts_with(TAG_ENCRYPTED.as_bytes()));
        assert!(frame.ends_with(DELIMITER.as_bytes()));
        let stripped = &frame[..frame.len() - DELIMITER.len()];
        assert_eq!(parse(stripped), ParsedFrame::Encrypted(payload));
    }

    #[test]
    fn untagged_fallback() {
        assert_eq!(
            parse(b"bare legacy text"),
            ParsedFrame::Untagged(b"bare legacy text".to_vec())
        );
    }

    #[test]
    fn empty_payload_frames() {
        let frame = build(b"", false);
        let stripped = &frame[..frame.len() - DELIMITER.len()];
        assert_eq!(parse(stripped), ParsedFrame::Plain(vec![]));

        let frame = build(b"", true);
        let stripped = &frame[..frame.len() - DELIMITER.len()];
        assert_eq!(parse(stripped), ParsedFrame::Encrypted(vec![]));
    }

    #[test]
    fn overhead_matches_literals() {
        assert_eq!(overhead(false), 6 + 9);
        assert_eq!(overhead(true), 10 + 9);
    }

    #[test]
    fn tag_selection() {
        assert_eq!(tag(true), "ENCRYPTED:");
        assert_eq!(tag(false), "PLAIN:");
    }
}
