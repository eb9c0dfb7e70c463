use std::path::Path;

use image::ImageFormat;

use crate::document::Document;
use crate::render::{RasterSurface, render_scene};

/// Exported images are square at this size.
pub const EXPORT_SIZE: u32 = 1024;

/// The export raster scales canvas coordinates up by this factor, so the
/// 256x256 live canvas fills the 1024x1024 image.
pub const EXPORT_SCALE: f32 = 4.0;

/// Errors from the PNG export path. The core itself has no failure
/// modes; only encoding and writing the artifact can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Re-render the committed display list at export resolution and save it
/// as a PNG.
///
/// Only committed drawables are included: the tool preview and any
/// in-flight gesture state are never part of the artifact. The live
/// canvas is untouched.
pub fn export_png(document: &Document, path: &Path) -> Result<(), ExportError> {
    let mut surface = RasterSurface::new(EXPORT_SIZE, EXPORT_SIZE, EXPORT_SCALE);
    render_scene(&mut surface, document, None);
    surface
        .into_image()
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
