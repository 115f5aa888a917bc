//! Command-line interface entry point for `Gradebook`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::menu::{Menu, RecordLocation};
use gradebook::config::Config;
use gradebook::core::records_export::RecordFiles;
use gradebook::{info, verbose};
use gradebook::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::io;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        None | Some(Command::Menu) => run_menu(&config),
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}

fn run_menu(config: &Config) {
    let records = RecordLocation {
        dir: PathBuf::from(&config.paths.data_dir),
        files: RecordFiles::from_paths(&config.paths),
    };
    verbose!("Records directory: {}", records.dir.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), records);
    if let Err(e) = menu.run() {
        eprintln!("✗ Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}
