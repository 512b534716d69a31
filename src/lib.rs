// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! # veil-core
//!
//! Pure-Rust LSB steganography engine for hiding text messages in RGBA
//! images. A message is framed, optionally XOR-enciphered with a symmetric
//! key, and written one bit per pixel into the least-significant bit of the
//! red channel — an imperceptible perturbation that survives any lossless
//! round-trip of the pixel buffer (and, by design, nothing lossy).
//!
//! The crate is the codec core of a larger application: callers supply a
//! decoded [`Raster`] (or PNG bytes via the convenience wrappers) and get
//! back the mutated raster or the recovered message. File pickers, HTTP
//! fetches, and UI belong to the caller.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use veil_core::{decode, encode, DecodeOutcome, Raster};
//!
//! let png = std::fs::read("cover.png").unwrap();
//! let mut raster = Raster::from_png_bytes(&png).unwrap();
//! encode(&mut raster, "meet at dawn", "orange-crush").unwrap();
//!
//! match decode(&raster, "orange-crush") {
//!     DecodeOutcome::Message(text) => assert_eq!(text, "meet at dawn"),
//!     other => panic!("unexpected outcome: {other}"),
//! }
//! ```
//!
//! Decoding never fails: wrong keys, missing keys, and unframed images all
//! map to [`DecodeOutcome`] variants, not errors. Encoding fails only for
//! empty/oversized messages, insufficient capacity, or cancellation.

pub mod raster;
pub mod stego;

pub use raster::{Raster, RasterError};
pub use stego::capacity::{capacity_bits, max_message_bytes};
pub use stego::{
    decode, decode_image, decode_with_cancel, encode, encode_image, encode_with_cancel,
    CancelToken, DecodeOutcome, StegoError, MAX_MESSAGE_CHARS,
};
