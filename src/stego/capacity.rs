// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Embedding capacity arithmetic.
//!
//! One bit per pixel: the LSB of the red channel. Capacity is therefore the
//! pixel count, and the byte budget for a message is that divided by eight
//! minus the frame overhead (tag + delimiter).

use crate::raster::Raster;
use crate::stego::frame;

/// Number of embeddable bits in the raster (one per pixel, red LSB only).
pub fn capacity_bits(raster: &Raster) -> usize {
    raster.data().len() / 4
}

/// Largest message (in UTF-8 bytes) the raster can hold with the given
/// cipher mode.
///
/// Signed: on tiny rasters the frame overhead dominates and the result is
/// zero or negative, which callers should treat as "too small for any
/// message". The figure is exact, not assumed — it is what the encoder
/// reports in [`StegoError::CapacityExceeded`](crate::stego::error::StegoError).
pub fn max_message_bytes(raster: &Raster, encrypted: bool) -> i64 {
    let budget = (capacity_bits(raster) / 8) as i64;
    budget - frame::overhead(encrypted) as i64
}
