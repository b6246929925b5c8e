use std::path::PathBuf;

use clap::Parser;

/// asciify — render a raster image as an ASCII art text file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    pub image_path: PathBuf,

    /// Character-grid width of the rendered output.
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height/width ratio of a character cell, compensates vertical stretch.
    #[arg(short, long, default_value_t = 2.0)]
    pub char_ratio: f64,

    /// Reverse the glyph palette (for dark-on-light source imagery).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
