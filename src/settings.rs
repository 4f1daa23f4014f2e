//! Shell settings and logger installation.
//!
//! Everything is read from environment variables:
//!
//! | Variable           | Meaning                                   | Default |
//! |--------------------|-------------------------------------------|---------|
//! | `MEMORY_BELL`      | `1`/`true` rings the bell on match/mismatch | off |
//! | `MEMORY_LOG_PATH`  | file to append logs to                    | none    |
//! | `MEMORY_LOG_LEVEL` | `error`..`trace`, `off`                   | `info`  |
//!
//! Round settings (`MEMORY_GRID`, `MEMORY_SEED`, ...) are read by
//! [`RoundConfig::from_lookup`].

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::core::RoundConfig;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub round: RoundConfig,
    /// `MEMORY_GRID` was given: skip the menu and deal straight away
    pub autostart: bool,
    pub bell: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            autostart: false,
            bell: false,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bell = lookup("MEMORY_BELL")
            .map(|v| {
                let v = v.trim().to_ascii_lowercase();
                matches!(v.as_str(), "1" | "true" | "yes" | "on")
            })
            .unwrap_or(false);
        let log_path = lookup("MEMORY_LOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let log_level = lookup("MEMORY_LOG_LEVEL")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            round: RoundConfig::from_lookup(&lookup),
            autostart: lookup("MEMORY_GRID").is_some(),
            bell,
            log_path,
            log_level,
        }
    }
}

/// Install a file logger when `MEMORY_LOG_PATH` is set.
///
/// The terminal is in raw mode on the alternate screen, so logs never go to
/// stdout/stderr.
pub fn init_logging(config: &ShellConfig) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let log_config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(config.log_level, log_config, file).context("installing logger")?;
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(())
}
