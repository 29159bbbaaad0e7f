use crate::config::LoggingConfig;
use anyhow::Context;
use std::sync::Mutex;

/// Install a global subscriber writing plain-text log lines to the file named
/// in `cfg`.  The terminal belongs to the game, so nothing is logged when no
/// file is configured.
pub(crate) fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = cfg.file.as_deref() else {
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(cfg.level)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install logger")
}
