//! Crossterm-backed terminal
//!
//! Raw mode is enabled for the lifetime of [`CrosstermTerminal`] so keys
//! arrive one at a time without echo, and restored on drop.

use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use nu_ansi_term::Style;
use std::io::{self, Stdout, Write};

use super::{FALLBACK_WIDTH, Key, Terminal};
use crate::error::Result;

/// Terminal backend writing to stdout through crossterm
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    /// Enable raw mode and take over stdout
    ///
    /// # Returns
    /// * `Result<Self>` - Terminal handle, or an I/O error if raw mode
    ///   could not be enabled
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { out: io::stdout() })
    }

    /// Translate a crossterm key event
    ///
    /// Ctrl+C is reported as an interrupted read: raw mode swallows the
    /// signal, so this is the only way out of a blocked key loop.
    fn translate(event: KeyEvent) -> Result<Key> {
        let key = match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted").into());
            }
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        };
        Ok(key)
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Self::translate(key);
                }
                _ => continue,
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        // raw mode does not translate \n into a carriage return
        queue!(self.out, Print(text), Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        queue!(self.out, Print(style.paint(text)))?;
        self.out.flush()?;
        Ok(())
    }

    fn clear_current_line(&mut self) -> Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        self.out.flush()?;
        Ok(())
    }

    fn window_width(&self) -> usize {
        terminal::size()
            .map(|(width, _)| usize::from(width))
            .unwrap_or(FALLBACK_WIDTH)
    }
}
