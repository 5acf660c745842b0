use std::{fmt, io};

/// Crate-wide `Result` type using [`PathHintError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, PathHintError>;

/// Top-level error type for pathhint operations.
///
/// Editing failures (missing directories, malformed paths) never reach this
/// type; they degrade to empty suggestions inside the key loop. What remains
/// is terminal I/O, configuration and explicit conversion failures.
#[derive(Debug)]
pub enum PathHintError {
    /// I/O errors from the terminal backend or log file.
    Io(io::Error),

    /// Configuration errors.
    Config(ConfigError),

    /// Path style conversion errors.
    Style(StyleError),

    /// Accepted-character pattern failed to compile.
    Pattern(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Path style conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The path cannot be expressed in the requested style.
    InvalidArgument(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for PathHintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathHintError::Io(e) => write!(f, "I/O error: {e}"),
            PathHintError::Config(e) => write!(f, "Configuration error: {e}"),
            PathHintError::Style(e) => write!(f, "Path style error: {e}"),
            PathHintError::Pattern(msg) => write!(f, "Invalid input pattern: {msg}"),
            PathHintError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for PathHintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathHintError::Io(e) => Some(e),
            PathHintError::Config(e) => Some(e),
            PathHintError::Style(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for StyleError {}

/* ========================= Conversions to PathHintError ========================= */

impl From<io::Error> for PathHintError {
    fn from(err: io::Error) -> Self {
        PathHintError::Io(err)
    }
}

impl From<ConfigError> for PathHintError {
    fn from(err: ConfigError) -> Self {
        PathHintError::Config(err)
    }
}

impl From<StyleError> for PathHintError {
    fn from(err: StyleError) -> Self {
        PathHintError::Style(err)
    }
}

impl From<regex::Error> for PathHintError {
    fn from(err: regex::Error) -> Self {
        PathHintError::Pattern(err.to_string())
    }
}

impl From<String> for PathHintError {
    fn from(msg: String) -> Self {
        PathHintError::Generic(msg)
    }
}

impl From<&str> for PathHintError {
    fn from(msg: &str) -> Self {
        PathHintError::Generic(msg.to_owned())
    }
}
