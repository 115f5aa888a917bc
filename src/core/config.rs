//! Configuration module for `Gradebook`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the gradebook config directory
const DIR_VARIABLE: &str = "$GRADEBOOK";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory the record files are exported to and imported from
    #[serde(default)]
    pub data_dir: String,
    /// File name for student rows
    #[serde(default)]
    pub students_file: String,
    /// File name for course rows
    #[serde(default)]
    pub courses_file: String,
    /// File name for grade rows
    #[serde(default)]
    pub grades_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override record data directory
    pub data_dir: Option<String>,
}

/// Copy `source` into `target` when `target` is empty and `source` is not
fn fill_if_empty(target: &mut String, source: &str) -> bool {
    if target.is_empty() && !source.is_empty() {
        source.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$GRADEBOOK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradebook`
    /// - macOS: `~/Library/Application Support/gradebook`
    /// - Windows: `%APPDATA%\gradebook`
    #[must_use]
    pub fn get_gradebook_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradebook")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so user settings survive upgrades that add new keys.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let results = [
            fill_if_empty(&mut self.logging.level, &defaults.logging.level),
            fill_if_empty(&mut self.logging.file, &defaults.logging.file),
            fill_if_empty(&mut self.paths.data_dir, &defaults.paths.data_dir),
            fill_if_empty(&mut self.paths.students_file, &defaults.paths.students_file),
            fill_if_empty(&mut self.paths.courses_file, &defaults.paths.courses_file),
            fill_if_empty(&mut self.paths.grades_file, &defaults.paths.grades_file),
        ];
        results.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not rewritten.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     data_dir: Some("./backup".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gradebook_dir`](Self::get_gradebook_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradebook_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADEBOOK` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let gradebook_dir = Self::get_gradebook_dir();
            value.replace(DIR_VARIABLE, gradebook_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses the string and expands any `$GRADEBOOK` variables. Missing fields
    /// use their serde defaults (empty strings or false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults, save if changed
    /// - On first run: create the config directory, save and return the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `students_file`,
    /// `courses_file`, `grades_file` (dashes are accepted in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "students_file" | "students-file" => Some(self.paths.students_file.clone()),
            "courses_file" | "courses-file" => Some(self.paths.courses_file.clone()),
            "grades_file" | "grades-file" => Some(self.paths.grades_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "students_file" | "students-file" => self.paths.students_file = value.to_string(),
            "courses_file" | "courses-file" => self.paths.courses_file = value.to_string(),
            "grades_file" | "grades-file" => self.paths.grades_file = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "students_file" | "students-file" => self
                .paths
                .students_file
                .clone_from(&defaults.paths.students_file),
            "courses_file" | "courses-file" => self
                .paths
                .courses_file
                .clone_from(&defaults.paths.courses_file),
            "grades_file" | "grades-file" => self
                .paths
                .grades_file
                .clone_from(&defaults.paths.grades_file),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  students_file = \"{}\"", self.paths.students_file)?;
        writeln!(f, "  courses_file = \"{}\"", self.paths.courses_file)?;
        writeln!(f, "  grades_file = \"{}\"", self.paths.grades_file)?;

        Ok(())
    }
}
