//! Codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the boundary to the JPEG codec: `decode`
//! turns a path into a [`RasterImage`], `encode` writes one back out. Nothing
//! past this boundary knows about file formats.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure-Rust JPEG decoder and encoder.

use super::raster::RasterImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Codec failures, one variant per distinguishable cause.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
}

/// Width and height of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<&RasterImage> for Dimensions {
    fn from(image: &RasterImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

/// Trait for codec backends.
pub trait ImageBackend {
    /// Read and decode the image at `path`.
    fn decode(&self, path: &Path) -> Result<RasterImage, BackendError>;

    /// Encode `image` and write it to `path`, keeping its color type.
    fn encode(&self, image: &RasterImage, path: &Path) -> Result<(), BackendError>;
}
