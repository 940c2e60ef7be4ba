use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, error};
use snake_arcade::app::{self, RunOptions};
use snake_arcade::config::GRID;
use snake_arcade::error::AppError;
use snake_arcade::logging;
use snake_arcade::terminal_runtime::install_panic_hook;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity when --log-file is set.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logging::init(cli.log_file.as_deref(), cli.log_level) {
        eprintln!("Logging disabled: {error}");
    }

    install_panic_hook();

    let options = RunOptions {
        bounds: GRID,
        seed: cli.seed,
    };
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| app::run(options)))
        .unwrap_or_else(|payload| Err(AppError::Panic(panic_message(payload.as_ref()))));

    // The terminal session has been dropped by now, so stderr is visible again.
    if let Err(error) = outcome {
        error!("{error:?}");
        eprintln!("ERROR: {error}");
    }

    ExitCode::SUCCESS
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}
