// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Red-channel LSB access over a [`Raster`].
//!
//! Pixel `i` occupies bytes `[i * 4, i * 4 + 4)` of the buffer; the red
//! sample is the first. Only its least-significant bit is ever read or
//! written — green, blue, and alpha pass through the codec untouched.

use crate::raster::Raster;

/// Read the LSB of the red sample of pixel `index`.
///
/// # Panics
/// If `index >= raster.pixel_count()`. The pipelines bound their loops by
/// the raster's capacity, so this is a caller bug, not a runtime condition.
pub fn read_lsb(raster: &Raster, index: usize) -> u8 {
    raster.data()[index * 4] & 1
}

/// Overwrite the LSB of the red sample of pixel `index` with `bit` (0 or 1).
///
/// # Panics
/// If `index >= raster.pixel_count()`.
pub fn write_lsb(raster: &mut Raster, index: usize, bit: u8) {
    let sample = &mut raster.data_mut()[index * 4];
    *sample = (*sample & 0xFE) | (bit & 1);
}

/// Iterate the red-channel LSBs of all pixels in raster order.
pub fn iter_lsbs(raster: &Raster) -> impl Iterator<Item = u8> + '_ {
    raster.data().iter().step_by(4).map(|&r| r & 1)
}
