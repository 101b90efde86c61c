//! # jpeg-border
//!
//! Pads a JPEG with a solid white border so its dimensions grow by a requested
//! width/height ratio, with the original image centered and untouched.
//!
//! # Architecture: Single-Pass Pipeline
//!
//! ```text
//! 1. Decode     path       →  RasterImage        (image crate, JPEG)
//! 2. Composite  RasterImage →  padded RasterImage (layout + fill pass)
//! 3. Encode     RasterImage →  path               (image crate, staged write)
//! ```
//!
//! Each stage owns its buffer and hands it to the next. There is no shared
//! state, no concurrency, and every error ends the run with a distinct exit
//! status.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Raster type, border layout math, compositor, codec backend, pipeline |
//! | [`config`] | Validates command-line values into pipeline parameters |
//! | [`output`] | Run summary formatting (text and JSON) |
//!
//! # Design Decisions
//!
//! ## Output Size Is Rebuilt From the Border
//!
//! The target size `dimension × ratio` is only used to derive a border of
//! `(target − dimension) / 2`, truncated. The output is then
//! `dimension + 2 × border`, so the source is always exactly centered even when
//! that is one pixel short of the naive product.
//!
//! ## Pad, Never Crop
//!
//! Ratios below 1.0 clamp the border on that axis to zero. The source pixels
//! are never resampled or cut.
//!
//! ## Three Channels Only
//!
//! The fill value and copy loop assume interleaved RGB. Grayscale and other
//! layouts are rejected with a compositing error rather than mis-copied.
//!
//! ## The Square Flag Is Asymmetric
//!
//! `--square` copies one target dimension onto the other only when exactly one
//! ratio differs from 1.0. With both or neither ratio set it does nothing.

pub mod config;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
