//! Text output under the render directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Directory the rendered text files land in. Expected to exist; the
/// writer never creates it.
pub const RENDER_DIR: &str = "images/renders";

/// Destination path for a source image: `<out_dir>/<stem>.txt`.
///
/// # Errors
/// Fails when the source path has no file stem (e.g. `..`).
pub fn output_path(image_path: &Path, out_dir: &Path) -> Result<PathBuf> {
    let Some(stem) = image_path.file_stem() else {
        bail!("cannot derive an output name from {}", image_path.display());
    };
    Ok(out_dir.join(stem).with_extension("txt"))
}

/// Write the rendered text, overwriting any previous render.
///
/// # Errors
/// Surfaces filesystem errors (missing directory, permissions) with
/// the destination path in context.
pub fn write_render(text: &str, dest: &Path) -> Result<()> {
    fs::write(dest, text).with_context(|| format!("impossible d'écrire {}", dest.display()))?;
    log::info!("wrote {}", dest.display());
    Ok(())
}
