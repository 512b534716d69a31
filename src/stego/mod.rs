// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Steganographic encoding and decoding.
//!
//! The codec embeds one bit per pixel into the least-significant bit of the
//! red channel. A message is UTF-8 encoded, optionally XOR-enciphered with a
//! repeating key, wrapped in a tagged frame ending in a fixed delimiter, and
//! bit-serialized into the raster. Decoding scans the same bit plane for the
//! delimiter and unwinds each step.
//!
//! The moving parts:
//!
//! - [`bits`] — byte/bit-vector conversions (MSB first)
//! - [`cipher`] — the reversible repeating-key XOR transform
//! - [`frame`] — tag and delimiter literals, frame build/parse
//! - [`pixel`] — red-channel LSB reads and writes
//! - [`capacity`] — embedding budget arithmetic
//! - [`encode`]/[`decode`] — the pipelines composing all of the above
//! - [`cancel`] — explicit per-invocation cancellation tokens

pub mod bits;
pub mod cancel;
pub mod capacity;
pub mod cipher;
pub mod error;
pub mod frame;
pub mod pixel;
mod pipeline;

pub use cancel::CancelToken;
pub use error::StegoError;
pub use pipeline::{
    decode, decode_image, decode_with_cancel, encode, encode_image, encode_with_cancel,
    DecodeOutcome,
};

/// Maximum message length in characters, counted before framing.
///
/// An application-level ceiling (the original interface caps its message
/// input at this), independent of any particular raster's capacity. Messages
/// over the limit are rejected with [`StegoError::MessageTooLong`] rather
/// than truncated.
pub const MAX_MESSAGE_CHARS: usize = 500;
