//! Raster buffer with an explicit pixel-mode tag.

use crate::error::CoreError;

/// Channel layout of a [`Raster`].
///
/// Compared by value; the mode tag is what lets the glyph mapper
/// reject color input instead of silently mis-rendering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelMode {
    /// 3 bytes per pixel, RGB row-major.
    Rgb,
    /// 1 byte per pixel, luminance [0..255].
    Grayscale,
}

impl PixelMode {
    /// Bytes occupied by one pixel in this mode.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Grayscale => 1,
        }
    }
}

/// Immutable pixel grid, row-major.
///
/// Every pipeline stage consumes one raster and produces a new one;
/// nothing is patched in place.
///
/// # Example
/// ```
/// use asciify_core::raster::{PixelMode, Raster};
/// let raster = Raster::new(vec![0u8; 12], 2, 2, PixelMode::Rgb).unwrap();
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.mode(), PixelMode::Rgb);
/// ```
pub struct Raster {
    data: Vec<u8>,
    width: u32,
    height: u32,
    mode: PixelMode,
}

impl Raster {
    /// Wrap a pixel buffer, validating that its length matches the
    /// declared dimensions and mode.
    ///
    /// # Errors
    /// [`CoreError::InvalidDimensions`] if either dimension is zero,
    /// [`CoreError::BufferMismatch`] if the buffer length is wrong.
    pub fn new(data: Vec<u8>, width: u32, height: u32, mode: PixelMode) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * mode.bytes_per_pixel();
        if data.len() != expected {
            return Err(CoreError::BufferMismatch {
                len: data.len(),
                width,
                height,
                mode,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            mode,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout tag.
    #[must_use]
    pub fn mode(&self) -> PixelMode {
        self.mode
    }

    /// Raw samples, row-major.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    /// Reduce to a single-channel luminance raster using BT.709
    /// integer weighting. Already-grayscale input passes through as a
    /// copy.
    ///
    /// # Example
    /// ```
    /// use asciify_core::raster::{PixelMode, Raster};
    /// let white = Raster::new(vec![255u8; 3], 1, 1, PixelMode::Rgb).unwrap();
    /// let gray = white.to_grayscale();
    /// assert_eq!(gray.mode(), PixelMode::Grayscale);
    /// assert_eq!(gray.samples(), &[255]);
    /// ```
    #[must_use]
    pub fn to_grayscale(&self) -> Self {
        let data = match self.mode {
            PixelMode::Grayscale => self.data.clone(),
            PixelMode::Rgb => self
                .data
                .chunks_exact(3)
                .map(|px| luminance(px[0], px[1], px[2]))
                .collect(),
        };
        Self {
            data,
            width: self.width,
            height: self.height,
            mode: PixelMode::Grayscale,
        }
    }
}

/// Perceptual luminance, BT.709.
#[inline(always)]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 2126 + u32::from(g) * 7152 + u32::from(b) * 722) / 10000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let err = Raster::new(Vec::new(), 0, 4, PixelMode::Grayscale);
        assert!(matches!(err, Err(CoreError::InvalidDimensions { .. })));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = Raster::new(vec![0u8; 5], 2, 2, PixelMode::Rgb);
        assert!(matches!(err, Err(CoreError::BufferMismatch { len: 5, .. })));
    }

    #[test]
    fn grayscale_conversion_tags_mode() {
        let rgb = Raster::new(vec![10u8; 2 * 3 * 3], 2, 3, PixelMode::Rgb).unwrap();
        let gray = rgb.to_grayscale();
        assert_eq!(gray.mode(), PixelMode::Grayscale);
        assert_eq!(gray.width(), 2);
        assert_eq!(gray.height(), 3);
        assert_eq!(gray.samples().len(), 6);
    }

    #[test]
    fn grayscale_weights_extremes() {
        let rgb = Raster::new(vec![0, 0, 0, 255, 255, 255], 2, 1, PixelMode::Rgb).unwrap();
        let gray = rgb.to_grayscale();
        assert_eq!(gray.samples(), &[0, 255]);
    }

    #[test]
    fn grayscale_is_identity_on_grayscale() {
        let src = Raster::new(vec![7, 42, 99, 200], 2, 2, PixelMode::Grayscale).unwrap();
        let gray = src.to_grayscale();
        assert_eq!(gray.samples(), src.samples());
        assert_eq!(gray.mode(), PixelMode::Grayscale);
    }

    #[test]
    fn green_dominates_luminance() {
        let rgb = Raster::new(vec![255, 0, 0, 0, 255, 0, 0, 0, 255], 3, 1, PixelMode::Rgb).unwrap();
        let gray = rgb.to_grayscale();
        let (r, g, b) = (gray.samples()[0], gray.samples()[1], gray.samples()[2]);
        assert!(g > r && r > b, "BT.709 ordering violated: r={r} g={g} b={b}");
    }
}
