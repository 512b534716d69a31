// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Bit-level serialization of bytes and text.
//!
//! Bits are represented as `Vec<u8>` with values 0/1, MSB first within each
//! byte. The decoder scans a raster bit by bit, so the representation favors
//! cheap append and suffix comparison over packing density.

/// Convert bytes to a bit vector (MSB first within each byte).
///
/// Output length is exactly `8 * bytes.len()`.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// A trailing group shorter than 8 bits is discarded, not zero-padded: the
/// delimiter scan always hands over byte-aligned payloads, so a partial
/// group can only be stray bits past the frame.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Bit-serialize a string via its UTF-8 encoding.
pub fn text_to_bits(text: &str) -> Vec<u8> {
    bytes_to_bits(text.as_bytes())
}

/// Decode a bit vector to text.
///
/// Tolerant by policy: invalid UTF-8 sequences are replaced with U+FFFD
/// rather than reported as an error, so the decode path stays total even on
/// garbage payloads (e.g. a wrong-key decryption).
pub fn bits_to_text(bits: &[u8]) -> String {
    String::from_utf8_lossy(&bits_to_bytes(bits)).into_owned()
}
