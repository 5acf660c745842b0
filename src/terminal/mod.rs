//! Terminal collaborator for the line editor
//!
//! The completion engine never touches the console directly. It reads keys
//! and writes text through the [`Terminal`] trait, which keeps the key loop
//! deterministic under test and lets the crossterm backend own raw mode.

mod backend;

use nu_ansi_term::Style;

use crate::error::Result;

pub use backend::CrosstermTerminal;

/// Width assumed when the terminal size cannot be queried
pub const FALLBACK_WIDTH: usize = 80;

/// A key press as seen by the line editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Any character key
    Char(char),
    /// Keys the editor does not handle (function keys, Home, ...)
    Other,
}

/// Blocking terminal I/O used by the completion engine
pub trait Terminal {
    /// Block until the next key press
    fn read_key(&mut self) -> Result<Key>;

    /// Write text in the current color
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write text followed by a line break
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Write text painted with the given style, restoring the color afterwards
    fn write_styled(&mut self, text: &str, style: Style) -> Result<()>;

    /// Blank the current line and return the cursor to its start
    fn clear_current_line(&mut self) -> Result<()>;

    /// Current width of the terminal in columns
    fn window_width(&self) -> usize;
}
