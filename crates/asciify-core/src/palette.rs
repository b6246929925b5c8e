//! Glyph palette and luminance quantization.

/// Canonical 12-glyph palette, visually densest first.
///
/// Dark pixels (luminance near 0) map to the early, dense glyphs; light
/// pixels map to the sparse tail, ending in a plain space.
pub const GLYPH_PALETTE: [char; 12] =
    ['@', '#', '$', '%', '?', '*', '+', ';', ':', ',', '.', ' '];

/// Ordered glyph set with its quantization bucket width.
///
/// Each glyph covers a contiguous band of `ceil(255 / 12) = 22`
/// luminance values. Built once per run, never mutated.
///
/// # Example
/// ```
/// use asciify_core::palette::GlyphPalette;
/// let palette = GlyphPalette::new(false);
/// assert_eq!(palette.glyph_for(0), '@');
/// assert_eq!(palette.glyph_for(255), ' ');
/// ```
pub struct GlyphPalette {
    glyphs: [char; GLYPH_PALETTE.len()],
    bucket: u8,
}

impl GlyphPalette {
    /// Build the canonical palette, reversed when `invert` is set.
    ///
    /// Inverting flips dark-on-light vs light-on-dark rendering; the
    /// bucketing itself is unchanged.
    ///
    /// # Example
    /// ```
    /// use asciify_core::palette::GlyphPalette;
    /// let inverted = GlyphPalette::new(true);
    /// assert_eq!(inverted.glyph_for(0), ' ');
    /// assert_eq!(inverted.glyph_for(255), '@');
    /// ```
    #[must_use]
    pub fn new(invert: bool) -> Self {
        let mut glyphs = GLYPH_PALETTE;
        if invert {
            glyphs.reverse();
        }
        Self {
            glyphs,
            bucket: 255u32.div_ceil(GLYPH_PALETTE.len() as u32) as u8,
        }
    }

    /// Map a luminance value [0..255] to a glyph.
    ///
    /// The bucket index is clamped so a sample landing exactly on the
    /// top bucket edge (255) stays inside the palette.
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, luminance: u8) -> char {
        let idx = (luminance / self.bucket) as usize;
        self.glyphs[idx.min(self.glyphs.len() - 1)]
    }

    /// Width of one quantization bucket in luminance units.
    #[must_use]
    pub fn bucket_width(&self) -> u8 {
        self.bucket
    }

    /// Number of glyphs in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false, the palette is a fixed non-empty constant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_width_is_ceil_255_over_12() {
        let palette = GlyphPalette::new(false);
        assert_eq!(palette.bucket_width(), 22);
    }

    #[test]
    fn extremes_map_to_first_and_last_glyph() {
        let palette = GlyphPalette::new(false);
        assert_eq!(palette.glyph_for(0), '@');
        assert_eq!(palette.glyph_for(255), ' ');
    }

    #[test]
    fn top_edge_stays_in_range() {
        // 255 / 22 == 11, the last valid index; the clamp guards the
        // general case of a sample on a bucket edge.
        let palette = GlyphPalette::new(false);
        assert_eq!(palette.glyph_for(255), GLYPH_PALETTE[GLYPH_PALETTE.len() - 1]);
    }

    #[test]
    fn mapping_is_monotonic_in_brightness() {
        let palette = GlyphPalette::new(false);
        let index_of = |ch: char| {
            GLYPH_PALETTE
                .iter()
                .position(|&g| g == ch)
                .unwrap_or_else(|| panic!("glyph {ch:?} not in palette"))
        };
        for p in 0..=254u8 {
            let here = index_of(palette.glyph_for(p));
            let next = index_of(palette.glyph_for(p + 1));
            assert!(here <= next, "non-monotonic at luminance {p}");
        }
    }

    #[test]
    fn invert_is_a_pure_reversal() {
        let plain = GlyphPalette::new(false);
        let inverted = GlyphPalette::new(true);
        let mut reversed = GLYPH_PALETTE;
        reversed.reverse();
        let index_of = |ch: char| {
            GLYPH_PALETTE
                .iter()
                .position(|&g| g == ch)
                .unwrap_or_else(|| panic!("glyph {ch:?} not in palette"))
        };
        for p in 0..=255u8 {
            let idx = index_of(plain.glyph_for(p));
            assert_eq!(inverted.glyph_for(p), reversed[idx], "divergent bucketing at {p}");
        }
    }
}
