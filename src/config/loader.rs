//! Configuration file loading with precedence handling.

use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Smallest list/details split the shell accepts, in percent.
pub const MIN_SPLIT_PERCENT: u16 = 10;
/// Largest list/details split the shell accepts, in percent.
pub const MAX_SPLIT_PERCENT: u16 = 90;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A palette entry is not a color ratatui understands.
    #[error("Invalid color for palette.{key}: {value:?}")]
    InvalidColor {
        /// Palette key.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; missing fields fall back to defaults.
/// Corresponds to `~/.config/vctui/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Capture mouse events.
    #[serde(default)]
    pub mouse: Option<bool>,

    /// Event poll interval in milliseconds.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,

    /// Initial width of the list pane, in percent of the screen.
    #[serde(default)]
    pub split_percent: Option<u16>,

    /// Color overrides.
    #[serde(default)]
    pub palette: Option<PaletteSection>,
}

/// `[palette]` table. Values are color names (`"lightblue"`), hex
/// (`"#1e90ff"`) or 256-color indices (`"208"`).
///
/// ```toml
/// [palette]
/// accent = "cyan"
/// selection = "#303446"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaletteSection {
    /// Change ids, titles and the focused divider.
    #[serde(default)]
    pub accent: Option<String>,
    /// Background of the selected revision.
    #[serde(default)]
    pub selection: Option<String>,
    /// Pane borders and the idle divider.
    #[serde(default)]
    pub border: Option<String>,
    /// Secondary text.
    #[serde(default)]
    pub muted: Option<String>,
    /// Background of the context menu.
    #[serde(default)]
    pub menu: Option<String>,
}

/// Palette colors resolved from the config file. `None` keeps the built-in
/// color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteOverrides {
    /// See [`PaletteSection::accent`].
    pub accent: Option<Color>,
    /// See [`PaletteSection::selection`].
    pub selection: Option<Color>,
    /// See [`PaletteSection::border`].
    pub border: Option<Color>,
    /// See [`PaletteSection::muted`].
    pub muted: Option<Color>,
    /// See [`PaletteSection::menu`].
    pub menu: Option<Color>,
}

impl PaletteSection {
    /// Parse every present entry into a color.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidColor` for the first unparseable entry.
    pub fn resolve(&self) -> Result<PaletteOverrides, ConfigError> {
        Ok(PaletteOverrides {
            accent: parse_color("accent", self.accent.as_deref())?,
            selection: parse_color("selection", self.selection.as_deref())?,
            border: parse_color("border", self.border.as_deref())?,
            muted: parse_color("muted", self.muted.as_deref())?,
            menu: parse_color("menu", self.menu.as_deref())?,
        })
    }
}

fn parse_color(key: &str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value
        .map(|v| {
            Color::from_str(v.trim()).map_err(|_| ConfigError::InvalidColor {
                key: key.to_string(),
                value: v.to_string(),
            })
        })
        .transpose()
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Capture mouse events.
    pub mouse: bool,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Initial list pane width in percent, within
    /// `MIN_SPLIT_PERCENT..=MAX_SPLIT_PERCENT`.
    pub split_percent: u16,
    /// Palette color overrides.
    pub palette: PaletteOverrides,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            mouse: true,
            tick_rate_ms: 250,
            split_percent: 40,
            palette: PaletteOverrides::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vctui/vctui.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vctui").join("vctui.log")
    } else {
        PathBuf::from("vctui.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/vctui/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vctui").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VCTUI_CONFIG` environment variable
/// 3. Default path `~/.config/vctui/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("VCTUI_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidColor` if a palette entry does not parse.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let palette = match &config.palette {
        Some(section) => section.resolve()?,
        None => defaults.palette,
    };

    Ok(ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        mouse: config.mouse.unwrap_or(defaults.mouse),
        tick_rate_ms: config.tick_rate_ms.unwrap_or(defaults.tick_rate_ms).max(1),
        split_percent: clamp_split(config.split_percent.unwrap_or(defaults.split_percent)),
        palette,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `VCTUI_MOUSE` (`1`/`true`/`on` or `0`/`false`/`off`). Other
/// values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("VCTUI_MOUSE") {
        match parse_switch(&value) {
            Some(mouse) => config.mouse = mouse,
            None => warn!(value = %value, "ignoring unrecognized VCTUI_MOUSE value"),
        }
    }
    config
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags that were explicitly set override anything.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    mouse_override: Option<bool>,
    split_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(mouse) = mouse_override {
        config.mouse = mouse;
    }
    if let Some(split) = split_override {
        config.split_percent = clamp_split(split);
    }
    config
}

fn clamp_split(percent: u16) -> u16 {
    percent.clamp(MIN_SPLIT_PERCENT, MAX_SPLIT_PERCENT)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
