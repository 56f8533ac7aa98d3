use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Paths;
use crate::palette::{self, Mode};
use crate::stylesheet;
use crate::template::{self, WriteOutcome};

#[derive(Debug, thiserror::Error)]
#[error("Image file not found: {}", .0.display())]
pub struct ImageNotFound(pub PathBuf);

/// Everything a generation run needs: the selected mode and where to write.
#[derive(Debug, Clone)]
pub struct Job {
    pub mode: Mode,
    pub paths: Paths,
}

/// The image is only checked for existence; its contents are never read.
pub fn ensure_image(path: &Path) -> Result<(), ImageNotFound> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImageNotFound(path.to_path_buf()))
    }
}

/// Write the stylesheet, then the starship config.
///
/// The stylesheet is written even when the starship template is missing.
pub fn run(job: &Job) -> Result<WriteOutcome> {
    let palette = palette::resolve(job.mode);
    info!(mode = %job.mode, "workflow:generating colors");

    stylesheet::write(&palette, &job.paths.stylesheet)?;
    let outcome = template::write_starship(
        &palette,
        &job.paths.starship_template,
        &job.paths.starship_config,
    )?;

    info!(?outcome, "workflow:done");
    Ok(outcome)
}
