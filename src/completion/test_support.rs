//! In-memory collaborators for engine tests

use nu_ansi_term::Style;
use std::collections::{BTreeSet, VecDeque};
use std::io;

use super::lister::DirectoryLister;
use super::listing::parent_of;
use crate::error::Result;
use crate::terminal::{Key, Terminal};

/// Directory tree held in memory
#[derive(Debug, Clone)]
pub struct MemoryLister {
    directories: BTreeSet<String>,
    separator: char,
    roots: Vec<String>,
    failing: BTreeSet<String>,
}

impl MemoryLister {
    /// POSIX tree rooted at `/`
    pub fn unix(directories: &[&str]) -> Self {
        Self::build(directories, '/', &["/"])
    }

    /// Windows tree with a single `C:\` drive
    pub fn windows(directories: &[&str]) -> Self {
        Self::build(directories, '\\', &["C:\\"])
    }

    fn build(directories: &[&str], separator: char, roots: &[&str]) -> Self {
        Self {
            directories: directories.iter().map(|d| d.to_string()).collect(),
            separator,
            roots: roots.iter().map(|r| r.to_string()).collect(),
            failing: BTreeSet::new(),
        }
    }

    /// Replace the root list
    pub fn with_roots(mut self, roots: &[&str]) -> Self {
        self.roots = roots.iter().map(|r| r.to_string()).collect();
        self
    }

    /// Make listing `path` fail with a permission error
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    /// Strip trailing separators, keeping the one of a root
    fn normalize(&self, path: &str) -> String {
        let trimmed = path.trim_end_matches(self.separator);
        if trimmed.is_empty() || trimmed.ends_with(':') {
            format!("{}{}", trimmed, self.separator)
        } else {
            trimmed.to_string()
        }
    }
}

impl DirectoryLister for MemoryLister {
    fn list_subdirectories(&self, path: &str) -> io::Result<Vec<String>> {
        let path = self.normalize(path);
        if self.failing.contains(&path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        if !self.directory_exists(&path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not found"));
        }

        Ok(self
            .directories
            .iter()
            .filter(|dir| parent_of(dir, self.separator) == Some(path.as_str()))
            .cloned()
            .collect())
    }

    fn directory_exists(&self, path: &str) -> bool {
        let path = self.normalize(path);
        self.directories.contains(&path) || self.roots.contains(&path)
    }

    fn list_roots(&self) -> Vec<String> {
        self.roots.clone()
    }
}

/// Something the engine wrote to the terminal
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Text(String),
    Line(String),
    Styled(String, Style),
    Clear,
}

/// Terminal replaying a fixed key sequence and recording output
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    pub output: Vec<Output>,
    width: usize,
}

impl ScriptedTerminal {
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            keys: keys.into(),
            output: Vec::new(),
            width: 80,
        }
    }

    /// Keys for typing `text` character by character
    pub fn typing(text: &str) -> Vec<Key> {
        text.chars().map(Key::Char).collect()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    /// Everything written, lines terminated by `\n`
    pub fn text(&self) -> String {
        let mut text = String::new();
        for out in &self.output {
            match out {
                Output::Text(s) | Output::Styled(s, _) => text.push_str(s),
                Output::Line(s) => {
                    text.push_str(s);
                    text.push('\n');
                }
                Output::Clear => {}
            }
        }
        text
    }

    /// Contents of every `write_line` call
    pub fn lines(&self) -> Vec<String> {
        self.output
            .iter()
            .filter_map(|out| match out {
                Output::Line(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Output since the last line clear
    pub fn last_render(&self) -> &[Output] {
        match self.output.iter().rposition(|out| *out == Output::Clear) {
            Some(idx) => &self.output[idx + 1..],
            None => &self.output,
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted").into()
        })
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push(Output::Text(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.push(Output::Line(text.to_string()));
        Ok(())
    }

    fn write_styled(&mut self, text: &str, style: Style) -> Result<()> {
        self.output.push(Output::Styled(text.to_string(), style));
        Ok(())
    }

    fn clear_current_line(&mut self) -> Result<()> {
        self.output.push(Output::Clear);
        Ok(())
    }

    fn window_width(&self) -> usize {
        self.width
    }
}
