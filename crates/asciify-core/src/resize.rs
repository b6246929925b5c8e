//! Character-grid geometry for the resize stage.
//!
//! The actual pixel resampling is delegated to the image codec layer in
//! the application crate; this module owns the one design decision:
//! how tall the resized image should be.

use crate::error::CoreError;

/// Default height/width ratio of a monospaced character cell.
///
/// Distinct from the CLI default (2.0); the two constants are
/// intentionally independent.
pub const DEFAULT_CHAR_RATIO: f64 = 1.65;

/// Compute the resized height for a target character-grid width.
///
/// Character cells are taller than they are wide, so a naive
/// aspect-preserving resize renders vertically stretched; dividing the
/// scaled height by `char_ratio` compensates:
/// `H = round(W * (H0 / W0) / R)`.
///
/// # Errors
/// [`CoreError::InvalidDimensions`] for a zero-sized source,
/// [`CoreError::Config`] for a non-positive width or ratio,
/// [`CoreError::DegenerateHeight`] when the result rounds to zero.
///
/// # Example
/// ```
/// use asciify_core::resize::target_height;
/// assert_eq!(target_height(200, 100, 100, 2.0).unwrap(), 25);
/// ```
pub fn target_height(
    src_width: u32,
    src_height: u32,
    width: u32,
    char_ratio: f64,
) -> Result<u32, CoreError> {
    if src_width == 0 || src_height == 0 {
        return Err(CoreError::InvalidDimensions {
            width: src_width,
            height: src_height,
        });
    }
    if width == 0 {
        return Err(CoreError::Config(format!(
            "target width must be positive, got {width}"
        )));
    }
    if char_ratio <= 0.0 {
        return Err(CoreError::Config(format!(
            "char ratio must be positive, got {char_ratio}"
        )));
    }

    let height = (f64::from(width) * f64::from(src_height) / f64::from(src_width) / char_ratio)
        .round();
    if height < 1.0 {
        return Err(CoreError::DegenerateHeight {
            width,
            src_width,
            src_height,
        });
    }
    Ok(height as u32)
}
