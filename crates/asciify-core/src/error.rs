use thiserror::Error;

use crate::raster::PixelMode;

/// Errors originating from the rendering core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A stage that requires grayscale input received something else.
    #[error("image must be grayscale, got {mode:?}")]
    InvalidMode {
        /// Mode of the offending raster.
        mode: PixelMode,
    },

    /// Invalid width/height dimensions.
    #[error("invalid dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("buffer of {len} bytes does not hold a {width}×{height} {mode:?} raster")]
    BufferMismatch {
        /// Actual buffer length in bytes.
        len: usize,
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Declared pixel mode.
        mode: PixelMode,
    },

    /// Requested grid width shrinks the image to zero rows.
    #[error("width {width} reduces a {src_width}×{src_height} image to zero rows")]
    DegenerateHeight {
        /// Requested character-grid width.
        width: u32,
        /// Source image width.
        src_width: u32,
        /// Source image height.
        src_height: u32,
    },
}
