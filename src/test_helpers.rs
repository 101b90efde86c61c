//! Shared test utilities for the jpeg-border test suite.
//!
//! Builds synthetic rasters and JPEG files so tests never depend on fixture
//! images checked into the repository.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = gradient_raster(100, 50);
//! let (padded, layout) = add_border(&source, &BorderSpec::new(1.0, 2.0, false)).unwrap();
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_test_jpeg(&tmp.path().join("in.jpg"), 64, 32);
//! ```

use crate::imaging::RasterImage;
use image::{ColorType, ImageEncoder, RgbImage};
use std::path::Path;

// =========================================================================
// Rasters
// =========================================================================

/// An RGB raster where every pixel is distinct enough to catch misplaced copies.
pub fn gradient_raster(width: u32, height: u32) -> RasterImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 251) as u8, ((x + y) % 7) as u8])
    });
    RasterImage::new(width, height, ColorType::Rgb8, img.into_raw()).unwrap()
}

/// An RGB raster filled with one color.
pub fn solid_raster(width: u32, height: u32, rgb: [u8; 3]) -> RasterImage {
    let pixels = rgb.repeat((width * height) as usize);
    RasterImage::new(width, height, ColorType::Rgb8, pixels).unwrap()
}

// =========================================================================
// JPEG files
// =========================================================================

/// Write a small valid RGB JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}
