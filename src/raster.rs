// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! RGBA raster container and the lossless PNG boundary.
//!
//! A [`Raster`] is the only pixel representation the codec operates on: an
//! owned `width × height` grid of RGBA samples, row-major, 4 bytes per pixel.
//! Rasters are produced externally (decoding an image file) and re-serialized
//! externally; the helpers here cover the one container that is safe for LSB
//! data — PNG, which is lossless. Re-encoding through any lossy format
//! destroys the embedded bit plane.

use core::fmt;

/// Errors from raster construction or the PNG boundary.
#[derive(Debug)]
pub enum RasterError {
    /// The pixel buffer length does not match `width * height * 4`.
    BufferSizeMismatch {
        /// `width * height * 4`.
        expected: usize,
        /// Actual buffer length supplied.
        actual: usize,
    },
    /// The input bytes could not be decoded as an image.
    Decode(String),
    /// The raster could not be serialized to PNG.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "pixel buffer length {actual} does not match dimensions (expected {expected})")
            }
            Self::Decode(msg) => write!(f, "image decode failed: {msg}"),
            Self::Encode(msg) => write!(f, "PNG encode failed: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

/// An owned RGBA8 pixel grid.
///
/// Invariant: `data.len() == width * height * 4`, enforced by [`Raster::new`].
/// The codec mutates red-channel LSBs in place and never changes dimensions
/// or any other channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster from explicit dimensions and an RGBA buffer.
    ///
    /// # Errors
    /// [`RasterError::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Create an opaque single-color raster. Handy as a synthetic cover.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self { width, height, data }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The raw RGBA buffer, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw RGBA buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Wrap an `image::RgbaImage` (buffer invariant holds by construction).
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage` for further processing.
    ///
    /// Returns `None` only if the buffer invariant is broken, which
    /// [`Raster::new`] rules out.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    /// Decode image bytes (any format the `image` crate recognizes with the
    /// enabled features) into an RGBA raster.
    ///
    /// # Errors
    /// [`RasterError::Decode`] if the bytes are not a decodable image.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, RasterError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| RasterError::Decode(e.to_string()))?;
        Ok(Self::from_rgba_image(img.to_rgba8()))
    }

    /// Serialize the raster to PNG bytes.
    ///
    /// PNG is lossless, so a decode of the output yields this exact buffer —
    /// the property the steganographic bit plane depends on.
    ///
    /// # Errors
    /// [`RasterError::Encode`] if PNG serialization fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, RasterError> {
        let img = self
            .to_rgba_image()
            .ok_or_else(|| RasterError::Encode("buffer invariant violated".into()))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }
}
