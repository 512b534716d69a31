// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Repeating-key XOR stream cipher.
//!
//! This is obfuscation, not confidentiality-grade cryptography: the transform
//! keeps casual viewers out of an extracted payload, nothing more. It is
//! involutive (`apply(apply(m, k), k) == m`), total, and keyed over the UTF-8
//! bytes of the key — the same byte encoding the message itself uses, so
//! round-trips hold for all Unicode input.

use zeroize::Zeroizing;

/// XOR `data` with the repeating UTF-8 byte stream of `key`.
///
/// An empty key returns the input unchanged (the "no encryption" mode).
/// The key byte buffer is wiped when it drops.
pub fn apply(data: &[u8], key: &str) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    let key_bytes = Zeroizing::new(key.as_bytes().to_vec());
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key_bytes[i % key_bytes.len()])
        .collect()
}
