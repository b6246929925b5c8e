//! Image loading and resampling against the character grid.

use std::path::Path;

use anyhow::{Context, Result};
use asciify_core::raster::{PixelMode, Raster};
use asciify_core::resize::target_height;
use image::DynamicImage;
use image::imageops::FilterType;

/// Decode an image from disk.
///
/// # Errors
/// Returns an error when the path is missing or the bytes are not a
/// decodable image, with the offending path in the context chain.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path).with_context(|| format!("impossible de charger {}", path.display()))?;
    log::info!("loaded {} ({}×{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Resample a decoded image to `width` columns, with the row count
/// corrected for the character cell aspect ratio, and hand back an RGB
/// raster for the rendering core.
///
/// # Errors
/// Returns an error for degenerate geometry (zero-sized source,
/// non-positive ratio, height rounding to zero).
pub fn resize_to_grid(img: &DynamicImage, width: u32, char_ratio: f64) -> Result<Raster> {
    let height = target_height(img.width(), img.height(), width, char_ratio)?;
    log::info!("rendering to a {width}×{height} character grid");

    let rgb = img
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgb8();
    let (w, h) = rgb.dimensions();
    Ok(Raster::new(rgb.into_raw(), w, h, PixelMode::Rgb)?)
}
