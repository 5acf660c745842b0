//! Path hint line editor library
//!
//! Reads a line of terminal input while suggesting filesystem directories as
//! dimmed ghost text. Suggestions can be browsed, accepted one character at a
//! time, or listed as a grid; paths can be shown in POSIX (`/c/Users`) or
//! Windows (`C:\Users`) style.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Interactive completion engine
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Candidate grid formatting
//! - `path_style`: Path style classification and conversion
//! - `terminal`: Terminal collaborator and crossterm backend
//!
//! # Example
//!
//! ```no_run
//! use pathhint::{PathStyle, ReadLineOptions};
//!
//! fn main() -> pathhint::Result<()> {
//!     let options = ReadLineOptions::new()
//!         .with_prompt("directory: ")
//!         .with_style(PathStyle::Linux);
//!
//!     let line = pathhint::read_line(&options)?;
//!     println!("you chose {}", line);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod path_style;
pub mod terminal;

// Re-export commonly used types
pub use completion::{CompletionEngine, FsLister, HostPlatform, ReadLineOptions};
pub use config::{Config, HintColor};
pub use error::{PathHintError, Result};
pub use path_style::{PathStyle, classify_style, to_unix_style, to_windows_style};
pub use terminal::CrosstermTerminal;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

/// Read one line from the console with path hints
///
/// Uses the crossterm terminal and the real filesystem of the current host.
///
/// # Arguments
/// * `options` - Prompt, style, accept pattern and hint color
///
/// # Returns
/// * `Result<String>` - Entered line, or an I/O error from the terminal
pub fn read_line(options: &ReadLineOptions) -> Result<String> {
    let terminal = CrosstermTerminal::new()?;
    let mut engine = CompletionEngine::new(terminal, FsLister, HostPlatform::current());
    engine.read_line(options)
}

/// Read one line with default options: no prompt, Linux style, dark gray hints
pub fn read_line_default() -> Result<String> {
    read_line(&ReadLineOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
