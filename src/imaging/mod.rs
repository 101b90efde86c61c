//! Image padding — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (JPEG) |
//! | **Layout** | [`calculate_border_layout`] |
//! | **Fill** | [`add_border`] |
//! | **Encode** | `image::codecs::jpeg::JpegEncoder` via a staged temp file |
//!
//! The module is split into:
//! - **Raster**: [`RasterImage`], the owned buffer passed between stages
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a padding run
//! - **Compositor**: The fill pass producing the padded buffer
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: The decode → pad → encode pipeline

pub mod backend;
mod calculations;
pub mod compositor;
pub mod operations;
mod params;
pub mod raster;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{BorderLayout, calculate_border_layout};
pub use compositor::{BORDER_FILL, CompositeError, SUPPORTED_COMPONENTS, add_border};
pub use operations::{PadError, PadReport, pad_image};
pub use params::{BorderSpec, PadParams};
pub use raster::{RasterError, RasterImage};
pub use rust_backend::RustBackend;
