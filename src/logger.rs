use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const APP_NAME: &str = "extract-colors";
const LOG_FILE: &str = "extract-colors.log";

static INIT: OnceLock<()> = OnceLock::new();
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Route `tracing` output to a log file under the XDG state directory.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init() -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    init_inner()?;
    let _ = INIT.set(());
    Ok(())
}

/// Like [`init`], but an unusable log location only prints a warning to stderr.
pub fn init_or_warn() {
    if let Err(err) = init() {
        eprintln!("warning: logging disabled: {err:#}");
    }
}

fn init_inner() -> Result<()> {
    let log_path = determine_log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory at {}", parent.display()))?;
    }

    let (directory, file_name) = split_path(&log_path)?;
    let file_appender = rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

fn determine_log_path() -> Result<PathBuf> {
    log_path_from(
        std::env::var("XDG_STATE_HOME").ok().as_deref(),
        home::home_dir().as_deref(),
    )
}

fn log_path_from(state_home: Option<&str>, home_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(state_home) = state_home
        && !state_home.is_empty()
    {
        return Ok(PathBuf::from(state_home)
            .join(APP_NAME)
            .join(LOG_FILE));
    }

    // Fall back to XDG default: ~/.local/state/extract-colors/extract-colors.log
    if let Some(home_dir) = home_dir {
        return Ok(home_dir
            .join(".local")
            .join("state")
            .join(APP_NAME)
            .join(LOG_FILE));
    }

    // Fallback to current directory if home cannot be determined
    Ok(std::env::current_dir()?.join(LOG_FILE))
}

fn split_path(path: &Path) -> Result<(PathBuf, &str)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid log file name"))?;

    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((dir, file_name))
}
