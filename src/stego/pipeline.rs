// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! LSB encode/decode pipeline.
//!
//! Encoding: cipher the message (when keyed), wrap it in a tagged frame,
//! bit-serialize, and write one bit per pixel into the red-channel LSBs.
//! Decoding: scan the LSBs until the delimiter bit pattern appears, then
//! parse the frame back out. Both directions are synchronous, single-pass,
//! and bounded by the raster's pixel count.

use core::fmt;

use log::debug;

use crate::raster::Raster;
use crate::stego::bits;
use crate::stego::cancel::CancelToken;
use crate::stego::capacity;
use crate::stego::cipher;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, ParsedFrame};
use crate::stego::pixel;
use crate::stego::MAX_MESSAGE_CHARS;

/// Pixels processed between cancellation checks.
const CANCEL_CHECK_INTERVAL: usize = 4096;

/// Result of a decode: either the recovered message or one of the negative
/// outcomes that are part of the normal contract.
///
/// Callers distinguish "no message" from "technical failure" by variant, not
/// by catching errors — the decoder itself has no failure path. `Display`
/// renders the user-facing diagnostic strings for callers that want a plain
/// string result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The recovered message text.
    Message(String),
    /// No delimiter was found anywhere in the raster's capacity.
    NoMessage,
    /// The frame is encrypted and no key was supplied.
    KeyRequired,
    /// Decryption produced nothing usable (wrong key, most likely).
    DecryptFailed,
    /// A frame was found but its payload is empty.
    EmptyMessage,
}

impl DecodeOutcome {
    /// The recovered message, if this outcome carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }

    /// Whether a message was recovered.
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(m) => f.write_str(m),
            Self::NoMessage => f.write_str("No hidden message found"),
            Self::KeyRequired => {
                f.write_str("This message is encrypted! Please provide the secret key to decrypt it.")
            }
            Self::DecryptFailed => f.write_str("Failed to decrypt message. Check your secret key."),
            Self::EmptyMessage => f.write_str("Empty message found"),
        }
    }
}

/// Embed `message` into the red-channel LSBs of `raster`, in place.
///
/// A non-empty `key` enciphers the payload with a repeating-key XOR before
/// framing; an empty `key` stores it in clear. Pixels beyond the frame and
/// all non-red channels are left untouched.
///
/// # Errors
/// - [`StegoError::EmptyMessage`] if `message` is empty.
/// - [`StegoError::MessageTooLong`] if `message` exceeds
///   [`MAX_MESSAGE_CHARS`] characters.
/// - [`StegoError::CapacityExceeded`] if the framed message does not fit,
///   reporting the largest message this raster could hold.
pub fn encode(raster: &mut Raster, message: &str, key: &str) -> Result<(), StegoError> {
    encode_with_cancel(raster, message, key, &CancelToken::new())
}

/// [`encode`] with an explicit cancellation token, checked at loop
/// boundaries.
///
/// # Errors
/// Everything [`encode`] returns, plus [`StegoError::Cancelled`].
pub fn encode_with_cancel(
    raster: &mut Raster,
    message: &str,
    key: &str,
    cancel: &CancelToken,
) -> Result<(), StegoError> {
    // 1. Preconditions: a message must exist and respect the UI ceiling.
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }
    let chars = message.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(StegoError::MessageTooLong {
            chars,
            max: MAX_MESSAGE_CHARS,
        });
    }

    let encrypted = !key.is_empty();
    debug!(
        "encoding {chars}-char message ({} bytes, {})",
        message.len(),
        if encrypted { "keyed" } else { "plain" },
    );

    // 2. Transform the payload and wrap it in the tagged frame.
    let payload = cipher::apply(message.as_bytes(), key);
    let framed = frame::build(&payload, encrypted);

    // 3. Bit-serialize and check against capacity.
    let frame_bits = bits::bytes_to_bits(&framed);
    let cap = capacity::capacity_bits(raster);
    if frame_bits.len() > cap {
        return Err(StegoError::CapacityExceeded {
            required_bits: frame_bits.len(),
            capacity_bits: cap,
            max_message_bytes: capacity::max_message_bytes(raster, encrypted),
        });
    }

    // 4. Write each frame bit into the red LSB of the matching pixel.
    for (i, &bit) in frame_bits.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check()?;
        }
        pixel::write_lsb(raster, i, bit);
    }

    debug!("embedded {} bits of {cap} available", frame_bits.len());
    Ok(())
}

/// Recover a message from the red-channel LSBs of `raster`.
///
/// Infallible: every negative result is a [`DecodeOutcome`] variant. Supply
/// the `key` the message was encoded with; pass `""` for unkeyed messages.
/// A wrong key yields garbage text or [`DecodeOutcome::DecryptFailed`],
/// never a panic or error.
pub fn decode(raster: &Raster, key: &str) -> DecodeOutcome {
    match decode_with_cancel(raster, key, &CancelToken::new()) {
        Ok(outcome) => outcome,
        // The token above never leaves this scope, so it cannot be cancelled.
        Err(_) => unreachable!("decode with a private token cannot be cancelled"),
    }
}

/// [`decode`] with an explicit cancellation token, checked at scan
/// boundaries.
///
/// # Errors
/// [`StegoError::Cancelled`] — the only error this function can return.
pub fn decode_with_cancel(
    raster: &Raster,
    key: &str,
    cancel: &CancelToken,
) -> Result<DecodeOutcome, StegoError> {
    // 1. Scan LSBs until the delimiter bit pattern shows up as a suffix.
    //    Stopping at the first match bounds the scan to one pass over the
    //    raster's capacity.
    let delimiter_bits = bits::text_to_bits(frame::DELIMITER);
    let cap = capacity::capacity_bits(raster);
    let mut acc: Vec<u8> = Vec::new();
    let mut found = false;

    for (i, bit) in pixel::iter_lsbs(raster).take(cap).enumerate() {
        if i % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check()?;
        }
        acc.push(bit);
        if acc.len() >= delimiter_bits.len() && acc.ends_with(&delimiter_bits) {
            debug!("delimiter found after {} bits", i + 1);
            found = true;
            break;
        }
    }

    if !found {
        debug!("no delimiter in {cap} bits");
        return Ok(DecodeOutcome::NoMessage);
    }

    // 2. Strip the delimiter and reassemble the frame bytes.
    let frame_bytes = bits::bits_to_bytes(&acc[..acc.len() - delimiter_bits.len()]);
    if frame_bytes.is_empty() {
        return Ok(DecodeOutcome::NoMessage);
    }

    // 3. Split by tag and produce the outcome.
    let outcome = match frame::parse(&frame_bytes) {
        ParsedFrame::Encrypted(payload) => {
            if key.is_empty() {
                DecodeOutcome::KeyRequired
            } else {
                let plain = cipher::apply(&payload, key);
                let text = String::from_utf8_lossy(&plain);
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    DecodeOutcome::DecryptFailed
                } else {
                    DecodeOutcome::Message(trimmed.to_string())
                }
            }
        }
        ParsedFrame::Plain(payload) => {
            let text = String::from_utf8_lossy(&payload).into_owned();
            if text.is_empty() {
                DecodeOutcome::EmptyMessage
            } else {
                DecodeOutcome::Message(text)
            }
        }
        // Tolerant fallback for frames written without a tag.
        ParsedFrame::Untagged(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                DecodeOutcome::EmptyMessage
            } else {
                DecodeOutcome::Message(trimmed.to_string())
            }
        }
    };

    Ok(outcome)
}

/// Bytes-in/bytes-out encode: decode the image, embed, re-serialize as PNG.
///
/// Accepts any image format the enabled `image` features can decode; the
/// output is always PNG, the one container that preserves the bit plane.
///
/// # Errors
/// Everything [`encode`] returns, plus [`StegoError::InvalidImage`] for
/// undecodable input or a PNG serialization failure.
pub fn encode_image(image_bytes: &[u8], message: &str, key: &str) -> Result<Vec<u8>, StegoError> {
    let mut raster = Raster::from_png_bytes(image_bytes)?;
    encode(&mut raster, message, key)?;
    Ok(raster.to_png_bytes()?)
}

/// Bytes-in decode: decode the image and scan it for a hidden message.
///
/// # Errors
/// [`StegoError::InvalidImage`] if the bytes are not a decodable image.
pub fn decode_image(image_bytes: &[u8], key: &str) -> Result<DecodeOutcome, StegoError> {
    let raster = Raster::from_png_bytes(image_bytes)?;
    Ok(decode(&raster, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors() {
        let msg = DecodeOutcome::Message("hi".into());
        assert!(msg.is_message());
        assert_eq!(msg.message(), Some("hi"));
        assert!(!DecodeOutcome::NoMessage.is_message());
        assert_eq!(DecodeOutcome::KeyRequired.message(), None);
    }

    #[test]
    fn outcome_display_strings() {
        assert_eq!(DecodeOutcome::Message("x".into()).to_string(), "x");
        assert_eq!(DecodeOutcome::NoMessage.to_string(), "No hidden message found");
        assert_eq!(DecodeOutcome::EmptyMessage.to_string(), "Empty message found");
        assert_eq!(
            DecodeOutcome::DecryptFailed.to_string(),
            "Failed to decrypt message. Check your secret key."
        );
        assert!(DecodeOutcome::KeyRequired.to_string().contains("secret key"));
    }
}
