//! Raster icon generation.
//!
//! Derives the full icon set from the master image: one PNG per entry in
//! [`config::PNG_SIZES`] plus a multi-resolution `favicon.ico`, all written
//! next to the master. Outputs are fully overwritten on every run — there is
//! no cache and no diffing.
//!
//! ## Output
//!
//! ```text
//! favicon-16.png … favicon-512.png   # One Lanczos3 downscale per size
//! favicon.ico                        # 16/32/48/64 frames for legacy consumers
//! ```
//!
//! Sizes are processed sequentially in listed order. Each output is derived
//! independently from the master, so order does not affect the result; a
//! failure aborts the remaining steps.

use crate::config;
use crate::imaging::{BackendError, Dimensions, IcoParams, IconBackend, ResizeParams};
use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Imaging failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("{0} is required to generate raster icons")]
    MasterNotFound(PathBuf),
    #[error("master image must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },
}

/// One generated PNG.
#[derive(Debug)]
pub struct GeneratedPng {
    pub size: u32,
    pub path: PathBuf,
}

/// Summary of a generator run, consumed by the output formatter.
#[derive(Debug)]
pub struct IconSet {
    pub pngs: Vec<GeneratedPng>,
    pub ico_path: PathBuf,
    pub ico_sizes: &'static [u32],
}

/// Generate the full icon set from the master image in `root`.
///
/// Fails before any write if the master is absent. The 512px entry
/// re-encodes the master file in place.
pub fn generate(backend: &impl IconBackend, root: &Path) -> Result<IconSet, IconError> {
    let master = root.join(naming::MASTER_FILENAME);
    if !master.exists() {
        return Err(IconError::MasterNotFound(master));
    }

    let mut pngs = Vec::with_capacity(config::PNG_SIZES.len());
    for size in config::PNG_SIZES {
        let output = root.join(naming::png_filename(size));
        backend.resize(&ResizeParams {
            source: master.clone(),
            output: output.clone(),
            size,
        })?;
        pngs.push(GeneratedPng { size, path: output });
    }

    let ico_path = root.join(naming::ICO_FILENAME);
    backend.write_ico(&IcoParams {
        source: master,
        output: ico_path.clone(),
        sizes: config::ICO_SIZES.to_vec(),
    })?;

    Ok(IconSet {
        pngs,
        ico_path,
        ico_sizes: &config::ICO_SIZES,
    })
}

/// Validate the master image without writing anything.
///
/// The icon set only makes sense from a square source; the check reports
/// the actual dimensions so an off-size master is caught before a release.
pub fn check_master(backend: &impl IconBackend, root: &Path) -> Result<Dimensions, IconError> {
    let master = root.join(naming::MASTER_FILENAME);
    if !master.exists() {
        return Err(IconError::MasterNotFound(master));
    }

    let dims = backend.identify(&master)?;
    if dims.width != dims.height {
        return Err(IconError::NotSquare {
            width: dims.width,
            height: dims.height,
        });
    }
    Ok(dims)
}
