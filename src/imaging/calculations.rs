//! Pure calculation functions for border dimensions.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! The resolver mirrors integer-truncating arithmetic on purpose: the target
//! size is `dimension × ratio` truncated toward zero, the border is half the
//! growth truncated toward zero, and the final size is rebuilt from the border.
//! An odd growth therefore loses one pixel:
//!
//! ```text
//! 10 × 1.5 = 15  →  border (15 − 10) / 2 = 2  →  output 10 + 2×2 = 14
//! ```

use super::params::BorderSpec;
use serde::Serialize;

/// Resolved geometry of a padded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderLayout {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Columns of border on each of the left and right sides.
    pub border_width: u32,
    /// Rows of border on each of the top and bottom sides.
    pub border_height: u32,
}

impl BorderLayout {
    /// Whether output pixel `(x, y)` falls inside the copied source region.
    ///
    /// Both bands are half-open: `[border, size - border)`.
    pub fn is_interior(&self, x: u32, y: u32) -> bool {
        x >= self.border_width
            && x < self.width - self.border_width
            && y >= self.border_height
            && y < self.height - self.border_height
    }
}

/// Target size before centering: `dimension × ratio`, truncated toward zero.
///
/// Float-to-int casts saturate, so absurd ratios stay representable and are
/// caught later by [`calculate_border_layout`].
fn scaled(dimension: u32, ratio: f64) -> i64 {
    (dimension as f64 * ratio) as i64
}

/// Half the growth from `input` to `target`, truncated toward zero and
/// clamped at zero. The transform only pads, it never crops.
fn half_growth(input: u32, target: i64) -> u64 {
    let growth = target.saturating_sub(input as i64);
    let border = (growth as f64 / 2.0) as i64;
    border.max(0) as u64
}

/// Target (width, height) before centering, after the square rule.
pub fn calculate_targets(input: (u32, u32), spec: &BorderSpec) -> (i64, i64) {
    let (in_w, in_h) = input;
    let mut target_w = scaled(in_w, spec.width_ratio);
    let mut target_h = scaled(in_h, spec.height_ratio);

    // Square only reacts when exactly one ratio was changed from the default.
    if spec.square {
        if spec.width_ratio == 1.0 && spec.height_ratio != 1.0 {
            target_w = target_h;
        }
        if spec.height_ratio == 1.0 && spec.width_ratio != 1.0 {
            target_h = target_w;
        }
    }
    (target_w, target_h)
}

/// Which axes resolve to a target smaller than the source and so get no border.
///
/// Returns `(width_shrunk, height_shrunk)`. This covers ratios below 1.0 and
/// a square target copied from the shorter axis.
pub fn shrunk_axes(input: (u32, u32), spec: &BorderSpec) -> (bool, bool) {
    let (target_w, target_h) = calculate_targets(input, spec);
    (target_w < input.0 as i64, target_h < input.1 as i64)
}

/// Calculate output dimensions and border sizes.
///
/// # Arguments
/// * `input` - Source dimensions (width, height)
/// * `spec` - Ratios and square flag
///
/// # Returns
/// * `Some(layout)` - Output size is `input + 2 × border` on each axis
/// * `None` - The padded size does not fit in `u32`
///
/// # Examples
/// ```
/// # use jpeg_border::imaging::{BorderSpec, calculate_border_layout};
/// let layout = calculate_border_layout((100, 50), &BorderSpec::new(1.0, 2.0, false)).unwrap();
/// assert_eq!((layout.width, layout.height), (100, 100));
/// assert_eq!((layout.border_width, layout.border_height), (0, 25));
/// ```
pub fn calculate_border_layout(input: (u32, u32), spec: &BorderSpec) -> Option<BorderLayout> {
    let (in_w, in_h) = input;
    let (target_w, target_h) = calculate_targets(input, spec);

    let border_w = half_growth(in_w, target_w);
    let border_h = half_growth(in_h, target_h);

    let width = (in_w as u64).checked_add(border_w.checked_mul(2)?)?;
    let height = (in_h as u64).checked_add(border_h.checked_mul(2)?)?;

    Some(BorderLayout {
        width: u32::try_from(width).ok()?,
        height: u32::try_from(height).ok()?,
        border_width: u32::try_from(border_w).ok()?,
        border_height: u32::try_from(border_h).ok()?,
    })
}
