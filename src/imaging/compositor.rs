//! Border compositing: the fill pass.
//!
//! Given a source [`RasterImage`] and a [`BorderSpec`], allocate a fresh
//! buffer sized by [`calculate_border_layout`] and write every output pixel
//! exactly once:
//!
//! ```text
//!   border_w         source width          border_w
//! ┌──────────┬──────────────────────────┬──────────┐  ┐
//! │ 255 ...  │ 255 ...                  │ 255 ...  │  │ border_h rows
//! ├──────────┼──────────────────────────┼──────────┤  ┘
//! │ 255 ...  │ source row 0             │ 255 ...  │
//! │ 255 ...  │ ...                      │ 255 ...  │
//! │ 255 ...  │ source row h-1           │ 255 ...  │
//! ├──────────┼──────────────────────────┼──────────┤  ┐
//! │ 255 ...  │ 255 ...                  │ 255 ...  │  │ border_h rows
//! └──────────┴──────────────────────────┴──────────┘  ┘
//! ```
//!
//! Interior pixels are copied unchanged; nothing is resampled. Border channels
//! are all [`BORDER_FILL`] (white for RGB). Only 3-component rasters are
//! accepted: the fill value and copy layout assume interleaved RGB, and a
//! grayscale or CMYK buffer is rejected instead of being mis-copied.

use super::calculations::{BorderLayout, calculate_border_layout};
use super::params::BorderSpec;
use super::raster::{RasterImage, buffer_len};
use thiserror::Error;

/// Channel value written to every border slot.
pub const BORDER_FILL: u8 = 255;

/// The only channel count the compositor handles.
pub const SUPPORTED_COMPONENTS: u8 = 3;

#[derive(Error, Debug)]
pub enum CompositeError {
    #[error("unsupported channel count {components}: only 3-component images can be bordered")]
    UnsupportedComponents { components: u8 },
    #[error("padded image too large (width ratio {width_ratio}, height ratio {height_ratio})")]
    TooLarge { width_ratio: f64, height_ratio: f64 },
    #[error("could not allocate {bytes} bytes for the padded image")]
    Allocation { bytes: usize },
}

/// Whether the compositor can border an image with this many channels.
pub fn supports_components(components: u8) -> bool {
    components == SUPPORTED_COMPONENTS
}

/// Pad `source` according to `spec`, returning a new image and its layout.
///
/// The source is only read. On error nothing is returned; there is no
/// partially filled result.
pub fn add_border(
    source: &RasterImage,
    spec: &BorderSpec,
) -> Result<(RasterImage, BorderLayout), CompositeError> {
    let components = source.components();
    if !supports_components(components) {
        return Err(CompositeError::UnsupportedComponents { components });
    }

    let too_large = || CompositeError::TooLarge {
        width_ratio: spec.width_ratio,
        height_ratio: spec.height_ratio,
    };
    let layout = calculate_border_layout((source.width(), source.height()), spec)
        .ok_or_else(too_large)?;
    let total = buffer_len(layout.width, layout.height, components).ok_or_else(too_large)?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(total)
        .map_err(|_| CompositeError::Allocation { bytes: total })?;

    fill(&mut pixels, source, &layout);

    // fill writes exactly `total` bytes, so only a size problem can reach here.
    let padded = RasterImage::new(layout.width, layout.height, source.color(), pixels)
        .map_err(|_| too_large())?;
    Ok((padded, layout))
}

/// Append the padded rows to `out`, top to bottom.
fn fill(out: &mut Vec<u8>, source: &RasterImage, layout: &BorderLayout) {
    let c = source.components() as usize;
    let out_row = layout.width as usize * c;
    let side = layout.border_width as usize * c;

    let border_rows = layout.border_height as usize * out_row;
    out.resize(out.len() + border_rows, BORDER_FILL);

    for row in source.pixels().chunks_exact(source.row_len()) {
        out.resize(out.len() + side, BORDER_FILL);
        out.extend_from_slice(row);
        out.resize(out.len() + side, BORDER_FILL);
    }

    out.resize(out.len() + border_rows, BORDER_FILL);
}
