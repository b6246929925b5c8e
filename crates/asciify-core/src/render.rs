//! Glyph mapping and line formatting.

use crate::error::CoreError;
use crate::palette::GlyphPalette;
use crate::raster::{PixelMode, Raster};

/// Map every luminance sample of a grayscale raster to a glyph,
/// row-major.
///
/// # Errors
/// [`CoreError::InvalidMode`] if the raster is not grayscale. A color
/// raster reaching this stage is a pipeline-ordering bug and must fail
/// loudly rather than mis-render.
///
/// # Example
/// ```
/// use asciify_core::palette::GlyphPalette;
/// use asciify_core::raster::{PixelMode, Raster};
/// use asciify_core::render::map_glyphs;
///
/// let gray = Raster::new(vec![0, 255], 2, 1, PixelMode::Grayscale).unwrap();
/// let glyphs = map_glyphs(&gray, &GlyphPalette::new(false)).unwrap();
/// assert_eq!(glyphs, vec!['@', ' ']);
/// ```
pub fn map_glyphs(image: &Raster, palette: &GlyphPalette) -> Result<Vec<char>, CoreError> {
    if image.mode() != PixelMode::Grayscale {
        return Err(CoreError::InvalidMode { mode: image.mode() });
    }
    Ok(image
        .samples()
        .iter()
        .map(|&p| palette.glyph_for(p))
        .collect())
}

/// Fold a flat glyph stream into lines of `width` characters.
///
/// A newline follows every `width`-th glyph and nothing else: when the
/// glyph count divides `width` exactly the text ends with a newline,
/// otherwise the partial last row ends bare. Callers must not "fix"
/// this by appending a final newline.
///
/// `width` must be positive; rasters are validated at construction so
/// a zero width cannot reach this point through the pipeline.
///
/// # Example
/// ```
/// use asciify_core::render::format_lines;
/// assert_eq!(format_lines(&['a', 'b', 'c', 'd'], 2), "ab\ncd\n");
/// assert_eq!(format_lines(&['a', 'b', 'c'], 2), "ab\nc");
/// ```
#[must_use]
pub fn format_lines(glyphs: &[char], width: u32) -> String {
    debug_assert!(width > 0, "line width must be positive");
    let width = width as usize;
    let mut text = String::with_capacity(glyphs.len() + glyphs.len() / width.max(1));
    for (i, &glyph) in glyphs.iter().enumerate() {
        text.push(glyph);
        if (i + 1) % width == 0 {
            text.push('\n');
        }
    }
    text
}

/// Full text rendering of a grayscale raster: glyph mapping plus line
/// formatting at the raster's own width.
///
/// # Errors
/// [`CoreError::InvalidMode`] if the raster is not grayscale.
pub fn render_text(image: &Raster, palette: &GlyphPalette) -> Result<String, CoreError> {
    let glyphs = map_glyphs(image, palette)?;
    log::debug!(
        "mapped {} samples across {} glyph buckets of width {}",
        glyphs.len(),
        palette.len(),
        palette.bucket_width()
    );
    Ok(format_lines(&glyphs, image.width()))
}
