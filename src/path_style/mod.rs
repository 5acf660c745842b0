//! Path style classification and conversion
//!
//! Converts path strings between POSIX style (`/c/Users`) and Windows drive
//! style (`C:\Users`). The conversions are textual heuristics, not a path
//! grammar: the two directions are not inverses for every input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Path notation convention
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Drive-letter paths with backslash separators (`C:\Users`)
    Windows,
    /// Slash-separated paths (`/c/Users`)
    #[default]
    #[serde(alias = "unix", alias = "posix")]
    Linux,
}

impl PathStyle {
    /// Return the style this one converts to
    pub fn opposite(self) -> Self {
        match self {
            PathStyle::Windows => PathStyle::Linux,
            PathStyle::Linux => PathStyle::Windows,
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Windows => write!(f, "windows"),
            PathStyle::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(PathStyle::Windows),
            "linux" | "unix" | "posix" => Ok(PathStyle::Linux),
            other => Err(StyleError::InvalidArgument(format!(
                "unknown path style '{other}' (expected windows or linux)"
            ))),
        }
    }
}

/// Classify the style of a path string
///
/// A path is Windows-style when it contains `:\`; anything else,
/// including the empty string, is Linux-style.
pub fn classify_style(path: &str) -> PathStyle {
    if path.contains(":\\") {
        PathStyle::Windows
    } else {
        PathStyle::Linux
    }
}

/// Convert a path to Windows drive style
///
/// A leading `/` marks a drive path: the next character is taken as the
/// drive letter and upper-cased. Every `/` then becomes `\`.
///
/// # Arguments
/// * `path` - Path to convert
///
/// # Returns
/// * `String` - Converted path, or an empty string when the input has no
///   drive character after the leading slash (e.g. a bare `/`)
pub fn to_windows_style(path: &str) -> String {
    let rebuilt = match path.strip_prefix('/') {
        Some(rest) => {
            let mut chars = rest.chars();
            let Some(drive) = chars.next() else {
                return String::new();
            };
            let letter: String = drive.to_uppercase().collect();
            format!("{}:{}", letter, chars.as_str())
        }
        None => path.to_string(),
    };

    rebuilt.replace('/', "\\")
}

/// Convert a path to POSIX style
///
/// The first character is the drive letter. `:` is removed, `\` becomes `/`,
/// and a leading drive letter is rewritten as a `/<letter>` segment.
///
/// # Arguments
/// * `path` - Path to convert
///
/// # Returns
/// * `Result<String, StyleError>` - Converted path
///
/// # Errors
/// Returns [`StyleError::InvalidArgument`] when the drive letter is `a`
/// (case-insensitive); the `A:` drive is not supported.
pub fn to_unix_style(path: &str) -> Result<String, StyleError> {
    let Some(first) = path.chars().next() else {
        return Ok(String::new());
    };

    let drive_letter: String = first.to_lowercase().collect();
    if drive_letter == "a" {
        return Err(StyleError::InvalidArgument(
            "Drives can't have 'A' letter.".to_string(),
        ));
    }

    let converted = path.replace(':', "").replace('\\', "/");

    let mut chars = converted.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() => Ok(format!("/{}{}", drive_letter, chars.as_str())),
        _ => Ok(converted),
    }
}
