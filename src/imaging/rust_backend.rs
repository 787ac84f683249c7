//! Pure Rust imaging backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (PNG) | `image` crate (pure Rust decoder) |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Encode → PNG | `image` crate PNG encoder |
//! | Encode → ICO | `ico` crate (`IconDir` with one frame per resolution) |

use super::backend::{BackendError, Dimensions, IcoParams, IconBackend, ResizeParams};
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` and `ico` crates.
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

/// Load and decode an image from disk, normalized to RGBA.
fn load_rgba(path: &Path) -> Result<RgbaImage, BackendError> {
    let decoded = ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ImagingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })?;
    Ok(decoded.to_rgba8())
}

/// Square Lanczos3 downscale of the master.
fn scale_to(master: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(master, size, size, FilterType::Lanczos3)
}

impl IconBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ImagingFailed(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let master = load_rgba(&params.source)?;
        let resized = scale_to(&master, params.size);
        resized.save(&params.output).map_err(|e| {
            BackendError::ImagingFailed(format!(
                "Failed to write {}: {}",
                params.output.display(),
                e
            ))
        })
    }

    fn write_ico(&self, params: &IcoParams) -> Result<(), BackendError> {
        let master = load_rgba(&params.source)?;

        let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
        for &size in &params.sizes {
            let frame = scale_to(&master, size);
            let frame = ico::IconImage::from_rgba_data(size, size, frame.into_raw());
            let entry = ico::IconDirEntry::encode(&frame).map_err(|e| {
                BackendError::ImagingFailed(format!("Failed to encode {size}px ICO frame: {e}"))
            })?;
            dir.add_entry(entry);
        }

        let file = File::create(&params.output)?;
        dir.write(BufWriter::new(file))?;
        Ok(())
    }
}
