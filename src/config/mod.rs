//! Configuration management for pathhint
//!
//! This module handles loading, parsing, and managing configuration from:
//! - Configuration files (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use nu_ansi_term::{Color, Style};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ConfigError, Result};
use crate::path_style::PathStyle;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Line editing and hint configuration
    #[serde(default)]
    pub hint: HintConfig,

    /// Candidate listing configuration
    #[serde(default)]
    pub listing: ListingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Line editing and hint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintConfig {
    /// Prompt text written before the input
    #[serde(default)]
    pub prompt: String,

    /// Path style used for suggestions
    #[serde(default)]
    pub style: PathStyle,

    /// Regular expression every typed character must match
    #[serde(default = "default_accept_pattern")]
    pub accept_pattern: String,

    /// Color of the ghost suggestion text
    #[serde(default)]
    pub color: HintColor,
}

/// Candidate listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Candidate count at which the user is asked before listing
    #[serde(default = "default_confirm_threshold")]
    pub confirm_threshold: usize,

    /// Spaces added to the widest entry to form a table column
    #[serde(default = "default_table_padding")]
    pub table_padding: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Path to log file (None for stderr)
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Enable timestamps in logs
    #[serde(default)]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Console color of the ghost suggestion text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HintColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    #[default]
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

// Default value functions
fn default_accept_pattern() -> String {
    ".*".to_string()
}

fn default_confirm_threshold() -> usize {
    50
}

fn default_table_padding() -> usize {
    3
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            style: PathStyle::default(),
            accept_pattern: default_accept_pattern(),
            color: HintColor::default(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            confirm_threshold: default_confirm_threshold(),
            table_padding: default_table_padding(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
            timestamps: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// With an explicit path the file must exist. Without one the default
    /// path is tried, and a missing default file yields the defaults.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pathhint")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if Regex::new(&self.hint.accept_pattern).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "hint.accept_pattern".to_string(),
                value: self.hint.accept_pattern.clone(),
            }
            .into());
        }

        if self.listing.confirm_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.confirm_threshold".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl HintColor {
    /// Terminal style used to paint hint text in this color
    pub fn to_style(self) -> Style {
        let color = match self {
            HintColor::Black => Color::Black,
            HintColor::DarkBlue => Color::Blue,
            HintColor::DarkGreen => Color::Green,
            HintColor::DarkCyan => Color::Cyan,
            HintColor::DarkRed => Color::Red,
            HintColor::DarkMagenta => Color::Purple,
            HintColor::DarkYellow => Color::Yellow,
            HintColor::Gray => Color::LightGray,
            HintColor::DarkGray => Color::DarkGray,
            HintColor::Blue => Color::LightBlue,
            HintColor::Green => Color::LightGreen,
            HintColor::Cyan => Color::LightCyan,
            HintColor::Red => Color::LightRed,
            HintColor::Magenta => Color::LightPurple,
            HintColor::Yellow => Color::LightYellow,
            HintColor::White => Color::White,
        };
        Style::new().fg(color)
    }
}

impl fmt::Display for HintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HintColor::Black => "black",
            HintColor::DarkBlue => "dark_blue",
            HintColor::DarkGreen => "dark_green",
            HintColor::DarkCyan => "dark_cyan",
            HintColor::DarkRed => "dark_red",
            HintColor::DarkMagenta => "dark_magenta",
            HintColor::DarkYellow => "dark_yellow",
            HintColor::Gray => "gray",
            HintColor::DarkGray => "dark_gray",
            HintColor::Blue => "blue",
            HintColor::Green => "green",
            HintColor::Cyan => "cyan",
            HintColor::Red => "red",
            HintColor::Magenta => "magenta",
            HintColor::Yellow => "yellow",
            HintColor::White => "white",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HintColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['-', ' '], "_");
        let color = match normalized.as_str() {
            "black" => HintColor::Black,
            "dark_blue" | "darkblue" => HintColor::DarkBlue,
            "dark_green" | "darkgreen" => HintColor::DarkGreen,
            "dark_cyan" | "darkcyan" => HintColor::DarkCyan,
            "dark_red" | "darkred" => HintColor::DarkRed,
            "dark_magenta" | "darkmagenta" => HintColor::DarkMagenta,
            "dark_yellow" | "darkyellow" => HintColor::DarkYellow,
            "gray" | "grey" => HintColor::Gray,
            "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => HintColor::DarkGray,
            "blue" => HintColor::Blue,
            "green" => HintColor::Green,
            "cyan" => HintColor::Cyan,
            "red" => HintColor::Red,
            "magenta" => HintColor::Magenta,
            "yellow" => HintColor::Yellow,
            "white" => HintColor::White,
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "hint.color".to_string(),
                    value: s.to_string(),
                });
            }
        };
        Ok(color)
    }
}
