use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::palette::Mode;
use crate::workflow::{self, Job};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "extract-colors")]
#[command(about = "Write the fallback d7shell palette to SCSS and starship config")]
#[command(
    after_help = "The image is required for compatibility with the wallpaper picker but is not analysed."
)]
struct Cli {
    /// Wallpaper image the palette is generated for (must exist)
    #[arg(allow_hyphen_values = true)]
    image_path: PathBuf,

    /// Theme mode, case-insensitive
    #[arg(value_name = "dark|light")]
    mode: Mode,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and succeed; every usage error exits 1.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    debug!(image = %cli.image_path.display(), mode = %cli.mode, "cli:parsed");

    workflow::ensure_image(&cli.image_path)?;

    let job = Job {
        mode: cli.mode,
        paths: Config::load_paths()?,
    };
    workflow::run(&job)?;
    Ok(())
}
