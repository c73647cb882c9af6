//! Common constants and logger setup

use anyhow::Context;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

pub const APP_NAME: &str = "Pharos Uninstaller";

/// Uninstall log destination, kept outside the package's own log directory
/// so it survives the uninstall itself
pub fn get_log_path() -> PathBuf {
    PathBuf::from("/tmp/pharosuninstall.log")
}

pub fn install_logger(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::default()
        .set_target_level(LevelFilter::Debug)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        filter,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    let file = File::create(get_log_path()).context("Unable to create log file")?;
    loggers.push(WriteLogger::new(filter, config, file));
    CombinedLogger::init(loggers)?;
    if debug {
        log::warn!("Debug logging enabled");
    }
    Ok(())
}
