//! Configuration module for `learningtree`

use crate::core::geometry::PathShape;
use crate::core::layout::DEFAULT_MARKER_SPREAD;
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

/// Variable expanded to the application directory in path-like values
const DIR_VARIABLE: &str = "$LEARNING_TREE";

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

const fn default_center_x() -> f64 {
    PathShape::DEFAULT_CENTER_X
}

const fn default_amplitude() -> f64 {
    PathShape::DEFAULT_AMPLITUDE
}

const fn default_segments() -> usize {
    PathShape::DEFAULT_SEGMENTS
}

const fn default_extent() -> f64 {
    800.0
}

const fn default_marker_spread() -> f64 {
    DEFAULT_MARKER_SPREAD
}

/// Trail layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal center of the trail
    #[serde(default = "default_center_x")]
    pub center_x: f64,
    /// Maximum horizontal swing of the trail
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Number of curve segments (must be at least 1)
    #[serde(default = "default_segments")]
    pub segments: usize,
    /// Vertical span of the trail when none is given on the command line
    #[serde(default = "default_extent")]
    pub extent: f64,
    /// Horizontal scale applied to lesson marker offsets
    #[serde(default = "default_marker_spread")]
    pub marker_spread: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: default_center_x(),
            amplitude: default_amplitude(),
            segments: default_segments(),
            extent: default_extent(),
            marker_spread: default_marker_spread(),
        }
    }
}

impl LayoutConfig {
    /// Build the trail shape described by this section
    ///
    /// # Errors
    /// Returns an error if `segments` is out of range or the center or
    /// amplitude is not finite.
    pub fn shape(&self) -> Result<PathShape, String> {
        PathShape::new(self.center_x, self.amplitude, self.segments)
            .map_err(|e| format!("Invalid layout config: {e}"))
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory rendered sites are written to
    #[serde(default)]
    pub site_dir: String,
    /// Catalog file replacing the built-in lessons (empty uses built-in)
    #[serde(default)]
    pub catalog: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Trail layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
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
    /// Override trail extent
    pub extent: Option<f64>,
    /// Override site output directory
    pub site_dir: Option<String>,
    /// Override catalog file
    pub catalog: Option<String>,
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))
}

fn parse_finite(key: &str, value: &str) -> Result<f64, String> {
    let number: f64 = parse_number(key, value)?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("'{key}' must be a finite number (got '{value}')"))
    }
}

impl Config {
    /// Get the `$LEARNING_TREE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/learningtree`
    /// - macOS: `~/Library/Application Support/learningtree`
    /// - Windows: `%APPDATA%\learningtree`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("learningtree")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in the defaults are
    /// filled in. Layout numbers already fall back to defaults while parsing.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (field, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.site_dir, &defaults.paths.site_dir),
            (&mut self.paths.catalog, &defaults.paths.catalog),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for one run; they are never saved.
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
        if let Some(extent) = overrides.extent {
            self.layout.extent = extent;
        }
        if let Some(site_dir) = &overrides.site_dir {
            self.paths.site_dir.clone_from(site_dir);
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds and `dconfig.toml` for debug builds,
    /// inside [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$LEARNING_TREE` to the application directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults, and `$LEARNING_TREE` is expanded
    /// in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$LEARNING_TREE/app.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.site_dir = Self::expand_variables(&config.paths.site_dir);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The file is
    /// compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge newly added defaults, and save when anything changed
    /// - Otherwise (first run): write the defaults to disk and return them
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(e) => {
                logger::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory cannot
    /// be created, or the file cannot be written.
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
    /// Supported keys: `level`, `file`, `verbose`, `center_x`, `amplitude`,
    /// `segments`, `extent`, `marker_spread`, `site_dir`, `catalog`.
    /// Dashed spellings (`site-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "center_x" | "center-x" => Some(self.layout.center_x.to_string()),
            "amplitude" => Some(self.layout.amplitude.to_string()),
            "segments" => Some(self.layout.segments.to_string()),
            "extent" => Some(self.layout.extent.to_string()),
            "marker_spread" | "marker-spread" => Some(self.layout.marker_spread.to_string()),
            "site_dir" | "site-dir" => Some(self.paths.site_dir.clone()),
            "catalog" => Some(self.paths.catalog.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, a value does not parse, a
    /// layout number is NaN or infinite, or `segments` is out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<logger::Level>()?;
                self.logging.level = value.to_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "center_x" | "center-x" => self.layout.center_x = parse_finite(key, value)?,
            "amplitude" => self.layout.amplitude = parse_finite(key, value)?,
            "segments" => {
                let segments: usize = parse_number(key, value)?;
                if segments == 0 {
                    return Err("'segments' must be at least 1".to_string());
                }
                if segments > PathShape::MAX_SEGMENTS {
                    return Err(format!(
                        "'segments' must be at most {}",
                        PathShape::MAX_SEGMENTS
                    ));
                }
                self.layout.segments = segments;
            }
            "extent" => self.layout.extent = parse_finite(key, value)?,
            "marker_spread" | "marker-spread" => {
                self.layout.marker_spread = parse_finite(key, value)?;
            }
            "site_dir" | "site-dir" => self.paths.site_dir = value.to_string(),
            "catalog" => self.paths.catalog = value.to_string(),
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
            "center_x" | "center-x" => self.layout.center_x = defaults.layout.center_x,
            "amplitude" => self.layout.amplitude = defaults.layout.amplitude,
            "segments" => self.layout.segments = defaults.layout.segments,
            "extent" => self.layout.extent = defaults.layout.extent,
            "marker_spread" | "marker-spread" => {
                self.layout.marker_spread = defaults.layout.marker_spread;
            }
            "site_dir" | "site-dir" => self.paths.site_dir.clone_from(&defaults.paths.site_dir),
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
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

        writeln!(f, "\n[layout]")?;
        writeln!(f, "  center_x = {}", self.layout.center_x)?;
        writeln!(f, "  amplitude = {}", self.layout.amplitude)?;
        writeln!(f, "  segments = {}", self.layout.segments)?;
        writeln!(f, "  extent = {}", self.layout.extent)?;
        writeln!(f, "  marker_spread = {}", self.layout.marker_spread)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  site_dir = \"{}\"", self.paths.site_dir)?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;

        Ok(())
    }
}
