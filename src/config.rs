//! Run configuration.
//!
//! The command line is the only configuration surface: there is no config
//! file and no environment lookup. [`resolve`] takes the raw flag values and
//! produces validated [`PadParams`], or a [`ConfigError`] before any file is
//! touched.
//!
//! ## Rules
//!
//! ```text
//! -o PATH          destination = PATH
//! -O               destination = input path
//! -o and -O        rejected (ambiguous destination)
//! neither          rejected (no destination)
//! -w / -h RATIO    any finite number; values ≤ 1.0 add no border on that axis
//! ```

use crate::imaging::{BorderSpec, PadParams};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("no output option was given! Please use the -o or -O flags!")]
    MissingDestination,
    #[error("-o and -O both name a destination; use only one")]
    ConflictingDestination,
    #[error("{flag} ratio must be a finite number (got {value})")]
    InvalidRatio { flag: &'static str, value: f64 },
}

/// Raw flag values as parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub overwrite: bool,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub square: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        let spec = BorderSpec::default();
        Self {
            input: PathBuf::new(),
            output: None,
            overwrite: false,
            width_ratio: spec.width_ratio,
            height_ratio: spec.height_ratio,
            square: spec.square,
        }
    }
}

fn check_ratio(flag: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidRatio { flag, value })
    }
}

/// Validate raw options into pipeline parameters.
pub fn resolve(raw: RawOptions) -> Result<PadParams, ConfigError> {
    let output = match (raw.output, raw.overwrite) {
        (Some(_), true) => return Err(ConfigError::ConflictingDestination),
        (Some(path), false) => path,
        (None, true) => raw.input.clone(),
        (None, false) => return Err(ConfigError::MissingDestination),
    };
    let border = BorderSpec::new(
        check_ratio("width", raw.width_ratio)?,
        check_ratio("height", raw.height_ratio)?,
        raw.square,
    );
    Ok(PadParams {
        source: raw.input,
        output,
        border,
    })
}
