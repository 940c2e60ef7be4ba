use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::{AppError, Result};

/// Installs a file logger when `path` is given.
///
/// The game owns the terminal, so log output never goes to stdout or stderr.
/// Without a path the `log` macros stay no-ops.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
