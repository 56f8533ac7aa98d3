mod cli;
mod config;
mod logger;
mod palette;
mod stylesheet;
mod template;
mod workflow;

use anyhow::Result;
use tracing::{error, info};

fn main() -> Result<()> {
    logger::init_or_warn();
    info!(args = ?std::env::args().collect::<Vec<_>>(), "extract-colors start");

    match cli::run() {
        Ok(result) => {
            info!("extract-colors finished successfully");
            Ok(result)
        }
        Err(err) => {
            error!(error = ?err, "extract-colors failed");
            Err(err)
        }
    }
}
