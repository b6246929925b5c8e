use std::path::Path;

use anyhow::Result;
use asciify_core::palette::GlyphPalette;
use asciify_core::render;
use clap::Parser;

pub mod cli;
pub mod source;
pub mod writer;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    run(&cli)
}

/// One image in, one text file out. Every stage hands an immutable
/// value to the next; any failure aborts the run with a non-zero exit.
fn run(cli: &cli::Cli) -> Result<()> {
    // 3. Charger et redimensionner
    let img = source::load_image(&cli.image_path)?;
    let raster = source::resize_to_grid(&img, cli.width, cli.char_ratio)?;

    // 4. Grayscale puis mapping glyphes
    let gray = raster.to_grayscale();
    let palette = GlyphPalette::new(cli.invert);
    let text = render::render_text(&gray, &palette)?;

    // 5. Écrire le rendu
    let dest = writer::output_path(&cli.image_path, Path::new(writer::RENDER_DIR))?;
    writer::write_render(&text, &dest)
}
