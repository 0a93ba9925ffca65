use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod cli;
mod commands;
mod config;
mod configurator;
mod constants;
mod errors;
mod store;
mod system_file;

use cli::Args;
use store::JsonFileStore;
use system_file::KdumpToolsFile;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    debug!(
        "Using config DB {} and kdump-tools file {}",
        args.config_db.display(),
        args.kdump_tools.display()
    );

    let mut store = JsonFileStore::open(&args.config_db)?;
    let kdump_tools = KdumpToolsFile::new(&args.kdump_tools);

    let code = commands::run(&args.command, &mut store, kdump_tools, &mut io::stdout())?;
    process::exit(code);
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
