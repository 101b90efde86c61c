//! Owned, validated pixel buffers.
//!
//! A [`RasterImage`] is the value handed between pipeline stages: the decoder
//! produces one, the compositor reads it and produces a new one, the encoder
//! consumes that. Construction checks the buffer invariant once so every later
//! stage can index without re-validating:
//!
//! ```text
//! pixels.len() == width × height × components
//! ```
//!
//! Pixels are row-major with channels interleaved per pixel. The color type is
//! an opaque tag from the decoder and is passed through to the encoder as-is.

use image::ColorType;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("unsupported pixel layout {0:?}: only 8-bit channels are handled")]
    UnsupportedLayout(ColorType),
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}x{components}")]
    BufferLength {
        width: u32,
        height: u32,
        components: u8,
        expected: usize,
        actual: usize,
    },
}

/// A decoded bitmap with its own buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    color: ColorType,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Wrap a pixel buffer, checking dimensions and length.
    pub fn new(
        width: u32,
        height: u32,
        color: ColorType,
        pixels: Vec<u8>,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions { width, height });
        }
        // One byte per channel, so components == bytes per pixel.
        if color.bytes_per_pixel() != color.channel_count() {
            return Err(RasterError::UnsupportedLayout(color));
        }
        let components = color.channel_count();
        let expected = buffer_len(width, height, components).ok_or(RasterError::BufferLength {
            width,
            height,
            components,
            expected: usize::MAX,
            actual: pixels.len(),
        })?;
        if pixels.len() != expected {
            return Err(RasterError::BufferLength {
                width,
                height,
                components,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            color,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel.
    pub fn components(&self) -> u8 {
        self.color.channel_count()
    }

    pub fn color(&self) -> ColorType {
        self.color
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes in one row.
    pub fn row_len(&self) -> usize {
        self.width as usize * self.components() as usize
    }

    /// Channel values of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.components() as usize;
        let start = y as usize * self.row_len() + x as usize * c;
        self.pixels.get(start..start + c)
    }

    /// Row `y` as a byte slice.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let len = self.row_len();
        let start = y as usize * len;
        self.pixels.get(start..start + len)
    }
}

/// `width × height × components` in bytes, or `None` if it overflows `usize`.
pub fn buffer_len(width: u32, height: u32, components: u8) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(components as usize)
}
