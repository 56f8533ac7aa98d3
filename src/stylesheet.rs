//! SCSS variable file generation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::palette::Palette;

/// Render the palette as SCSS variables followed by a `$theme` marker.
pub fn render(palette: &Palette) -> String {
    let mut out = String::from("@use 'sass:color';\n\n");
    for (name, hex) in palette.iter() {
        out.push_str(&format!("${name}: {hex};\n"));
    }
    out.push_str(&format!("\n$theme: '{}';\n", palette.mode()));
    out
}

/// Overwrite `path` with the rendered stylesheet, creating parent directories.
pub fn write(palette: &Palette, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Failed to create stylesheet directory at {}",
                parent.display()
            )
        })?;
    }

    let content = render(palette);
    debug!(path = %path.display(), bytes = content.len(), "stylesheet:writing");
    fs::write(path, content)
        .with_context(|| format!("Failed to write stylesheet to {}", path.display()))?;

    info!(path = %path.display(), mode = %palette.mode(), "stylesheet:written");
    println!("SCSS colors written to {}", path.display());
    Ok(())
}
