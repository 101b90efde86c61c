//! Pure Rust codec backend. Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG) | `image::ImageReader` with content-sniffed format |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder`, library default quality |
//! | Atomic replace | `tempfile::NamedTempFile::persist` in the destination directory |
//!
//! Only the `jpeg` feature of `image` is compiled in, so anything else is
//! reported as a decode failure rather than silently accepted.

use super::backend::{BackendError, ImageBackend};
use super::raster::RasterImage;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageEncoder, ImageReader};
use std::fs::Permissions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a decoded image into a raster, keeping its color type as the tag.
fn into_raster(img: DynamicImage, path: &Path) -> Result<RasterImage, BackendError> {
    let (width, height, color) = (img.width(), img.height(), img.color());
    RasterImage::new(width, height, color, img.into_bytes()).map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Directory a staging file must live in so the final rename stays on one filesystem.
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Permissions the finished file should carry: those of the file being
/// replaced, or the usual `0644` for a new file.
fn destination_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RasterImage, BackendError> {
        let open_err = |source| BackendError::Open {
            path: path.to_path_buf(),
            source,
        };
        let img = ImageReader::open(path)
            .map_err(open_err)?
            .with_guessed_format()
            .map_err(open_err)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        log::debug!(
            "decoded {} as {}x{} {:?}",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );
        into_raster(img, path)
    }

    fn encode(&self, image: &RasterImage, path: &Path) -> Result<(), BackendError> {
        let create_err = |source| BackendError::Create {
            path: path.to_path_buf(),
            source,
        };

        // Dropping the staging file on any early return removes it.
        let mut staged = tempfile::Builder::new()
            .prefix(".jpeg-border-")
            .suffix(".tmp")
            .tempfile_in(staging_dir(path))
            .map_err(create_err)?;

        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            JpegEncoder::new(&mut writer)
                .write_image(
                    image.pixels(),
                    image.width(),
                    image.height(),
                    image.color().into(),
                )
                .map_err(|e| BackendError::Encode {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            writer.flush().map_err(create_err)?;
        }

        if let Some(perms) = destination_permissions(path) {
            staged.as_file().set_permissions(perms).map_err(create_err)?;
        }
        staged.persist(path).map_err(|e| create_err(e.error))?;
        log::debug!(
            "wrote {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, gradient_raster};
    use image::ColorType;

    #[test]
    fn decode_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let raster = RustBackend::new().decode(&path).unwrap();
        assert_eq!(raster.width(), 200);
        assert_eq!(raster.height(), 150);
        assert_eq!(raster.components(), 3);
        assert_eq!(raster.color(), ColorType::Rgb8);
        assert_eq!(raster.pixels().len(), 200 * 150 * 3);
    }

    #[test]
    fn decode_nonexistent_file_is_open_error() {
        let err = RustBackend::new()
            .decode(Path::new("/nonexistent/image.jpg"))
            .unwrap_err();
        assert!(matches!(
            err,
            BackendError::Open { ref path, .. } if path == Path::new("/nonexistent/image.jpg")
        ));
    }

    #[test]
    fn decode_garbage_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = RustBackend::new().decode(&path).unwrap_err();
        assert!(matches!(err, BackendError::Decode { .. }));
    }

    #[test]
    fn decode_truncated_jpeg_is_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cut.jpg");
        create_test_jpeg(&path, 64, 64);
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 3]).unwrap();

        let err = RustBackend::new().decode(&path).unwrap_err();
        assert!(matches!(err, BackendError::Decode { .. }));
    }

    #[test]
    fn encode_then_decode_keeps_geometry() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        let backend = RustBackend::new();

        backend.encode(&gradient_raster(48, 32), &path).unwrap();
        let back = backend.decode(&path).unwrap();
        assert_eq!((back.width(), back.height()), (48, 32));
        assert_eq!(back.color(), ColorType::Rgb8);
    }

    #[test]
    fn encode_into_missing_directory_is_create_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("out.jpg");

        let err = RustBackend::new()
            .encode(&gradient_raster(4, 4), &path)
            .unwrap_err();
        assert!(matches!(err, BackendError::Create { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn encode_leaves_no_staging_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        RustBackend::new()
            .encode(&gradient_raster(8, 8), &path)
            .unwrap();

        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.jpg")]);
    }

    #[test]
    fn encode_replaces_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");
        create_test_jpeg(&path, 10, 10);

        let backend = RustBackend::new();
        backend.encode(&gradient_raster(20, 16), &path).unwrap();
        let back = backend.decode(&path).unwrap();
        assert_eq!((back.width(), back.height()), (20, 16));
    }

    #[test]
    fn staging_dir_for_bare_filename_is_cwd() {
        assert_eq!(staging_dir(Path::new("out.jpg")), Path::new("."));
        assert_eq!(staging_dir(Path::new("/a/b.jpg")), Path::new("/a"));
    }
}
