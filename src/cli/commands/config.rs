//! `config` subcommand handler
//!
//! Besides showing and editing persisted settings, reports where the menu's
//! save and load actions will find the record files.

use crate::args::ConfigSubcommand;
use gradebook::config::Config;
use gradebook::core::records_export::RecordFiles;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Labels for the record sets, in the order `RecordFiles::resolve` returns them
const RECORD_LABELS: [&str; 3] = ["students", "courses", "grades"];

/// Dispatch config subcommands, exiting with status 1 on failure
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match subcommand {
        None => show(config, None, &mut out),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref(), &mut out),
        Some(ConfigSubcommand::Set { key, value }) => {
            change(config, &key, &mut out, |c| c.set(&key, &value))
        }
        Some(ConfigSubcommand::Unset { key }) => {
            change(config, &key, &mut out, |c| c.unset(&key, defaults))
        }
        Some(ConfigSubcommand::Reset) => reset(config, defaults, &mut io::stdin().lock(), &mut out),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Resolved record file locations as `(label, path)` pairs
pub fn record_locations(config: &Config) -> Vec<(&'static str, PathBuf)> {
    let files = RecordFiles::from_paths(&config.paths);
    RECORD_LABELS
        .into_iter()
        .zip(files.resolve(Path::new(&config.paths.data_dir)))
        .collect()
}

/// Record sets whose location depends on `key`
fn affected_records(key: &str) -> &'static [&'static str] {
    match key {
        "data_dir" | "data-dir" => &RECORD_LABELS,
        "students_file" | "students-file" => &["students"],
        "courses_file" | "courses-file" => &["courses"],
        "grades_file" | "grades-file" => &["grades"],
        _ => &[],
    }
}

fn write_locations<W: Write>(
    config: &Config,
    labels: &[&str],
    out: &mut W,
) -> Result<(), String> {
    for (label, path) in record_locations(config) {
        if labels.contains(&label) {
            writeln!(out, "  {label:<9}-> {}", path.display()).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

/// Print one value, or everything plus the resolved record files
///
/// # Errors
/// Returns an error for unknown keys or if writing fails
pub fn show<W: Write>(config: &Config, key: Option<&str>, out: &mut W) -> Result<(), String> {
    let Some(key) = key else {
        write!(out, "\n=== Configuration ===\n\n{config}\n[records]\n").map_err(|e| e.to_string())?;
        return write_locations(config, &RECORD_LABELS, out);
    };

    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    writeln!(out, "{value}").map_err(|e| e.to_string())?;
    write_locations(config, affected_records(key), out)
}

/// Apply an edit, persist it, and report moved record files
fn change<W, F>(config: &mut Config, key: &str, out: &mut W, edit: F) -> Result<(), String>
where
    W: Write,
    F: FnOnce(&mut Config) -> Result<(), String>,
{
    edit(config)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    let value = config.get(key).unwrap_or_default();
    writeln!(out, "✓ {key} = {value}").map_err(|e| e.to_string())?;
    let moved = affected_records(key);
    if !moved.is_empty() {
        writeln!(out, "Records will now be saved to:").map_err(|e| e.to_string())?;
        write_locations(config, moved, out)?;
    }
    Ok(())
}

/// What resetting means for the data directory
pub fn reset_notice(config: &Config, defaults: &Config) -> String {
    if config.paths.data_dir == defaults.paths.data_dir {
        format!("Records stay in {}", config.paths.data_dir)
    } else {
        format!(
            "Data directory returns to {}; records already saved in {} are left in place",
            defaults.paths.data_dir, config.paths.data_dir
        )
    }
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Delete the config file after confirmation
fn reset<R: BufRead, W: Write>(
    config: &Config,
    defaults: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        return writeln!(out, "✓ Config is already at defaults").map_err(|e| e.to_string());
    }

    writeln!(out, "{}", reset_notice(config, defaults)).map_err(|e| e.to_string())?;
    write!(out, "Reset gradebook config to defaults? (y/n): ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(|e| e.to_string())?;

    if confirmed(&answer) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        writeln!(out, "✓ Config reset to defaults").map_err(|e| e.to_string())
    } else {
        writeln!(out, "✗ Reset cancelled").map_err(|e| e.to_string())
    }
}
