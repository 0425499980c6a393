use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

pub fn log_file_path(log_dir: &str) -> PathBuf {
    Path::new(log_dir).join("logs/main.log")
}

/// Installs the global logger: a rolling file under `<log_dir>/logs/`, 3
/// files of 1000 lines each. Fails if a logger is already installed.
pub fn init(log_dir: &str, level: LevelFilter) -> Result<()> {
    let path = log_file_path(log_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log = FileRotate::new(
        path,
        AppendTimestamp::default(FileLimit::MaxFiles(3)),
        ContentLimit::Lines(1000),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let write_logger = WriteLogger::new(level, config, log);
    log::set_boxed_logger(write_logger)?;
    log::set_max_level(level);
    info!("logger initialized at {} level", level);
    Ok(())
}
