//! Error handling for pathhint.
//!
//! Errors are split by concern:
//! - Terminal and file I/O failures
//! - Configuration loading and validation failures
//! - Explicit path style conversion failures
//!
//! Filesystem errors met while listing candidates are not represented here:
//! the completion engine degrades them to an empty candidate list.
//!
//! # Example
//!
//! ```rust
//! use pathhint::error::{PathHintError, Result, StyleError};
//!
//! fn convert(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(StyleError::InvalidArgument("empty path".to_string()).into());
//!     }
//!     Ok(path.to_string())
//! }
//!
//! assert!(matches!(convert(""), Err(PathHintError::Style(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, PathHintError, Result, StyleError};
