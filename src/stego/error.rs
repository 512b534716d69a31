// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers the encode-side failure modes plus cancellation.
//! Decode-side negative results ("no hidden message found" and friends) are
//! not errors — they are [`DecodeOutcome`](crate::stego::DecodeOutcome)
//! variants, part of the normal contract.

use core::fmt;

use crate::raster::RasterError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The message to embed is empty.
    EmptyMessage,
    /// The message exceeds the application's character ceiling.
    MessageTooLong {
        /// Character count of the rejected message.
        chars: usize,
        /// The ceiling ([`MAX_MESSAGE_CHARS`](crate::stego::MAX_MESSAGE_CHARS)).
        max: usize,
    },
    /// The framed message does not fit the raster's embedding capacity.
    CapacityExceeded {
        /// Bits the framed message needs.
        required_bits: usize,
        /// Bits the raster can hold (one per pixel).
        capacity_bits: usize,
        /// Largest message (in bytes) this raster could hold with the same
        /// cipher mode. Zero or negative means the raster is too small for
        /// any message at all.
        max_message_bytes: i64,
    },
    /// The input bytes could not be decoded as an image, or the result could
    /// not be re-encoded (bytes-level API only).
    InvalidImage(RasterError),
    /// The operation was cancelled via its [`CancelToken`](crate::stego::cancel::CancelToken).
    Cancelled,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::MessageTooLong { chars, max } => {
                write!(f, "message is {chars} characters, maximum is {max}")
            }
            Self::CapacityExceeded {
                required_bits,
                capacity_bits,
                max_message_bytes,
            } => {
                if *max_message_bytes > 0 {
                    write!(
                        f,
                        "message needs {required_bits} bits but the image holds {capacity_bits}; \
                         maximum message size for this image: {max_message_bytes} bytes"
                    )
                } else {
                    write!(
                        f,
                        "message needs {required_bits} bits but the image holds {capacity_bits}; \
                         the image is too small for any message"
                    )
                }
            }
            Self::InvalidImage(e) => write!(f, "invalid image: {e}"),
            Self::Cancelled => write!(f, "operation cancelled by caller"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for StegoError {
    fn from(e: RasterError) -> Self {
        Self::InvalidImage(e)
    }
}
