// SPDX-FileCopyrightText: 2026 Showcase Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-pass JPEG shrink.
//!
//! Pass one scales the longer side down to `max_dimension` and encodes at
//! `quality`. If the data URL is still above `max_encoded_bytes`, pass two
//! repeats at `fallback_dimension` / `fallback_quality`. There is no third
//! pass: an image that still does not fit is rejected.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use showcase_config::model::MediaConfig;
use showcase_core::{EncodedImage, ShowcaseError};
use tracing::debug;

/// Which pass produced the accepted encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    First,
    Fallback,
}

/// An encoding that fits under the ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    pub image: EncodedImage,
    pub pass: Pass,
    pub width: u32,
    pub height: u32,
}

/// Outcome of a shrink attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Shrink {
    Fits(Compressed),
    /// Both passes stayed above the ceiling; carries the smaller size seen.
    TooLarge { smallest: usize, ceiling: usize },
}

/// Target size for fitting `(width, height)` into a `max` x `max` box,
/// keeping the aspect ratio. Images already inside the box are untouched.
pub fn scaled_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= max || max == 0 {
        return (width, height);
    }
    let shorter = width.min(height) as u64;
    let scaled = ((shorter * max as u64 + longer as u64 / 2) / longer as u64).max(1) as u32;
    if width >= height {
        (max, scaled)
    } else {
        (scaled, max)
    }
}

/// Decodes `bytes` and runs the two-pass shrink.
pub fn compress(bytes: &[u8], config: &MediaConfig) -> Result<Shrink, ShowcaseError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ShowcaseError::Media {
        message: format!("cannot decode image: {e}"),
    })?;
    let ceiling = config.max_encoded_bytes;

    let first = encode_pass(&decoded, config.max_dimension, config.quality)?;
    debug!(size = first.image.len(), ceiling, "first pass encoded");
    if first.image.len() <= ceiling {
        return Ok(Shrink::Fits(first));
    }

    let mut second = encode_pass(&decoded, config.fallback_dimension, config.fallback_quality)?;
    debug!(size = second.image.len(), ceiling, "fallback pass encoded");
    if second.image.len() <= ceiling {
        second.pass = Pass::Fallback;
        return Ok(Shrink::Fits(second));
    }

    Ok(Shrink::TooLarge {
        smallest: first.image.len().min(second.image.len()),
        ceiling,
    })
}

fn encode_pass(img: &DynamicImage, max: u32, quality: u8) -> Result<Compressed, ShowcaseError> {
    let (width, height) = scaled_dimensions(img.width(), img.height(), max);
    let rgb = if (width, height) == (img.width(), img.height()) {
        img.to_rgb8()
    } else {
        img.resize_exact(width, height, FilterType::Triangle).to_rgb8()
    };

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| ShowcaseError::Media {
            message: format!("JPEG encoding failed: {e}"),
        })?;

    Ok(Compressed {
        image: EncodedImage::jpeg_base64(&STANDARD.encode(&jpeg)),
        pass: Pass::First,
        width,
        height,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    /// PNG of deterministic noise, which JPEG cannot compress well.
    pub(crate) fn noisy_png(width: u32, height: u32) -> Vec<u8> {
        let mut state: u32 = 0x9E37_79B9;
        let img = RgbImage::from_fn(width, height, |_, _| {
            let mut next = || {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            };
            image::Rgb([next(), next(), next()])
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(scaled_dimensions(120, 80, 400), (120, 80));
        assert_eq!(scaled_dimensions(1600, 1200, 400), (400, 300));
        assert_eq!(scaled_dimensions(1000, 4000, 400), (100, 400));
        assert_eq!(scaled_dimensions(4000, 1, 400), (400, 1));
    }

    #[test]
    fn default_settings_fit_on_first_pass() {
        let png = noisy_png(1200, 900);
        match compress(&png, &MediaConfig::default()).unwrap() {
            Shrink::Fits(c) => {
                assert_eq!(c.pass, Pass::First);
                assert_eq!((c.width, c.height), (400, 300));
                assert!(c.image.as_str().starts_with("data:image/jpeg;base64,"));
                assert!(c.image.len() <= 700_000);
            }
            other => panic!("expected fit, got {other:?}"),
        }
    }

    #[test]
    fn oversized_first_pass_falls_back_once() {
        let png = noisy_png(800, 600);
        let config = MediaConfig {
            max_dimension: 400,
            quality: 100,
            fallback_dimension: 100,
            fallback_quality: 10,
            max_encoded_bytes: 60_000,
        };
        match compress(&png, &config).unwrap() {
            Shrink::Fits(c) => {
                assert_eq!(c.pass, Pass::Fallback);
                assert_eq!((c.width, c.height), (100, 75));
                assert!(c.image.len() <= 60_000);
            }
            other => panic!("expected fallback fit, got {other:?}"),
        }
    }

    #[test]
    fn unshrinkable_image_reports_too_large() {
        let png = noisy_png(300, 300);
        let config = MediaConfig {
            max_encoded_bytes: 100,
            ..MediaConfig::default()
        };
        assert!(matches!(
            compress(&png, &config).unwrap(),
            Shrink::TooLarge { ceiling: 100, .. }
        ));
    }

    #[test]
    fn garbage_bytes_are_a_media_error() {
        assert!(matches!(
            compress(b"definitely not a picture", &MediaConfig::default()),
            Err(ShowcaseError::Media { .. })
        ));
    }

    proptest::proptest! {
        #[test]
        fn scaling_never_exceeds_the_box(w in 1u32..10_000, h in 1u32..10_000, max in 1u32..2_000) {
            let (sw, sh) = scaled_dimensions(w, h, max);
            proptest::prop_assert!(sw >= 1 && sh >= 1);
            if w.max(h) > max {
                proptest::prop_assert_eq!(sw.max(sh), max);
            } else {
                proptest::prop_assert_eq!((sw, sh), (w, h));
            }
        }
    }
}
