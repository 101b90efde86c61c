//! Parameter types for the padding pipeline.
//!
//! These structs describe *what* to do, not *how* to do it. The
//! [`operations`](super::operations) module hands them to the
//! [`calculations`](super::calculations) and [`compositor`](super::compositor)
//! code, and the [`backend`](super::backend) only ever sees paths and rasters.
//!
//! ## Types
//!
//! - [`BorderSpec`] — width ratio, height ratio, square flag. Defaults to 1.0/1.0/off (no growth).
//! - [`PadParams`] — everything one run needs: source path, destination path, border spec.

use serde::Serialize;
use std::path::PathBuf;

/// How much to grow each dimension.
///
/// Ratios multiply the source dimension to get the target size before
/// centering. `square` copies one target dimension onto the other, but only
/// when exactly one ratio differs from 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderSpec {
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub square: bool,
}

impl BorderSpec {
    pub fn new(width_ratio: f64, height_ratio: f64, square: bool) -> Self {
        Self {
            width_ratio,
            height_ratio,
            square,
        }
    }
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            width_ratio: 1.0,
            height_ratio: 1.0,
            square: false,
        }
    }
}

/// Parameters for one padding run.
#[derive(Debug, Clone, PartialEq)]
pub struct PadParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub border: BorderSpec,
}
