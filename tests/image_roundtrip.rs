// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veil-core

//! Bytes-level (PNG container) tests and cancellation behavior.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use veil_core::{
    decode_image, decode_with_cancel, encode_image, encode_with_cancel, CancelToken,
    DecodeOutcome, Raster, StegoError,
};

/// A deterministic noise cover serialized as PNG bytes.
fn noise_png(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut data = vec![0u8; width as usize * height as usize * 4];
    rng.fill(&mut data[..]);
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    Raster::new(width, height, data).unwrap().to_png_bytes().unwrap()
}

#[test]
fn png_roundtrip_plain() {
    let cover = noise_png(48, 48, 100);
    let stego = encode_image(&cover, "over the wire", "").unwrap();
    assert_eq!(
        decode_image(&stego, "").unwrap(),
        DecodeOutcome::Message("over the wire".into())
    );
}

#[test]
fn png_roundtrip_keyed() {
    let cover = noise_png(48, 48, 101);
    let stego = encode_image(&cover, "signed and sealed", "wax").unwrap();
    assert_eq!(
        decode_image(&stego, "wax").unwrap(),
        DecodeOutcome::Message("signed and sealed".into())
    );
}

#[test]
fn stego_output_is_valid_png_with_same_dimensions() {
    let cover = noise_png(37, 21, 102);
    let stego = encode_image(&cover, "dims preserved", "").unwrap();
    let raster = Raster::from_png_bytes(&stego).unwrap();
    assert_eq!((raster.width(), raster.height()), (37, 21));
}

#[test]
fn clean_png_has_no_message() {
    let cover = noise_png(32, 32, 103);
    assert_eq!(decode_image(&cover, "").unwrap(), DecodeOutcome::NoMessage);
}

#[test]
fn undecodable_bytes_are_invalid_image() {
    assert!(matches!(
        encode_image(b"definitely not a PNG", "msg", ""),
        Err(StegoError::InvalidImage(_))
    ));
    assert!(matches!(
        decode_image(b"definitely not a PNG", ""),
        Err(StegoError::InvalidImage(_))
    ));
}

#[test]
fn capacity_error_surfaces_through_bytes_api() {
    // 4x4 = 16 pixels; even the shortest frame needs 120+ bits.
    let cover = noise_png(4, 4, 104);
    assert!(matches!(
        encode_image(&cover, "way too much", ""),
        Err(StegoError::CapacityExceeded { .. })
    ));
}

#[test]
fn precancelled_encode_bails_out() {
    let mut raster = Raster::filled(64, 64, [50, 60, 70, 255]);
    let token = CancelToken::new();
    token.cancel();
    assert!(matches!(
        encode_with_cancel(&mut raster, "never written", "", &token),
        Err(StegoError::Cancelled)
    ));
}

#[test]
fn precancelled_decode_bails_out() {
    let raster = Raster::filled(64, 64, [50, 60, 70, 255]);
    let token = CancelToken::new();
    token.cancel();
    assert!(matches!(
        decode_with_cancel(&raster, "", &token),
        Err(StegoError::Cancelled)
    ));
}

#[test]
fn uncancelled_token_does_not_interfere() {
    let mut raster = Raster::filled(64, 64, [50, 60, 70, 255]);
    let token = CancelToken::new();
    encode_with_cancel(&mut raster, "carry on", "", &token).unwrap();
    assert_eq!(
        decode_with_cancel(&raster, "", &token).unwrap(),
        DecodeOutcome::Message("carry on".into())
    );
}
