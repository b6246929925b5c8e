//! Pixel-to-glyph rendering pipeline for asciify.
//!
//! Everything here is a pure transform over immutable values: a raster
//! goes in, gets grayscaled, each luminance sample is quantized into a
//! glyph, and the glyph stream is folded into newline-separated lines.
//! Image decoding and file I/O live in the application crate.

pub mod error;
pub mod palette;
pub mod raster;
pub mod render;
pub mod resize;

pub use error::CoreError;
pub use palette::{GLYPH_PALETTE, GlyphPalette};
pub use raster::{PixelMode, Raster};
