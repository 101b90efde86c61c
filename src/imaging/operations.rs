//! High-level padding pipeline.
//!
//! [`pad_image`] runs the three stages strictly in order:
//!
//! ```text
//! decode (backend)  →  add_border (compositor)  →  encode (backend)
//! ```
//!
//! Each stage owns its buffer until it hands it on. The decoded source is
//! dropped as soon as the padded image exists, before encoding starts.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{BorderLayout, shrunk_axes};
use super::compositor::{CompositeError, add_border};
use super::params::{BorderSpec, PadParams};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for configuration and decode failures (`-1` as a byte).
pub const EXIT_CONFIG_OR_DECODE: u8 = 255;
/// Exit status for compositing failures (`-2` as a byte).
pub const EXIT_COMPOSITE: u8 = 254;
/// Exit status for encode failures (`-3` as a byte).
pub const EXIT_ENCODE: u8 = 253;

/// A failed pipeline stage.
#[derive(Error, Debug)]
pub enum PadError {
    #[error(transparent)]
    Decode(BackendError),
    #[error(transparent)]
    Composite(#[from] CompositeError),
    #[error(transparent)]
    Encode(BackendError),
}

impl PadError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Decode(_) => EXIT_CONFIG_OR_DECODE,
            Self::Composite(_) => EXIT_COMPOSITE,
            Self::Encode(_) => EXIT_ENCODE,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PadError>;

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub spec: BorderSpec,
    pub source: Dimensions,
    pub padded: Dimensions,
    pub border: Dimensions,
}

impl PadReport {
    fn new(params: &PadParams, source: Dimensions, layout: &BorderLayout) -> Self {
        Self {
            input: params.source.clone(),
            output: params.output.clone(),
            spec: params.border,
            source,
            padded: Dimensions {
                width: layout.width,
                height: layout.height,
            },
            border: Dimensions {
                width: layout.border_width,
                height: layout.border_height,
            },
        }
    }
}

/// Decode the source, pad it, and encode the result to the destination.
pub fn pad_image(backend: &impl ImageBackend, params: &PadParams) -> Result<PadReport> {
    let (padded, source_dims, layout) = {
        let source = backend.decode(&params.source).map_err(PadError::Decode)?;
        let source_dims = Dimensions::from(&source);
        log::info!(
            "decoded {} ({}x{}, {} components)",
            params.source.display(),
            source_dims.width,
            source_dims.height,
            source.components()
        );

        let (padded, layout) = add_border(&source, &params.border)?;
        (padded, source_dims, layout)
    };

    let (width_shrunk, height_shrunk) =
        shrunk_axes((source_dims.width, source_dims.height), &params.border);
    if width_shrunk {
        log::warn!(
            "target width is below the source width {}; no horizontal border added",
            source_dims.width
        );
    }
    if height_shrunk {
        log::warn!(
            "target height is below the source height {}; no vertical border added",
            source_dims.height
        );
    }
    log::debug!("layout {layout:?}");
    log::info!("padded to {}x{}", layout.width, layout.height);

    backend
        .encode(&padded, &params.output)
        .map_err(PadError::Encode)?;
    log::info!("encoded {}", params.output.display());

    Ok(PadReport::new(params, source_dims, &layout))
}
