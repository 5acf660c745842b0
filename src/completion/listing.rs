//! Candidate listing for a typed path
//!
//! Turns the typed buffer into a list of directory candidates:
//! 1. Convert the input to the host's native style
//! 2. An empty path lists the roots
//! 3. An existing directory lists all its children; anything else is split
//!    into parent directory and needle, and the parent's children are
//!    filtered by the needle (case-insensitive)
//! 4. Large result sets need confirmation
//! 5. Results are converted back to the style the user typed
//!
//! Filesystem failures never escape: they produce an empty list.

use tracing::{debug, warn};

use super::lister::{DirectoryLister, HostPlatform};
use crate::error::Result;
use crate::formatter::{TableFormatter, display_name};
use crate::path_style::{PathStyle, classify_style, to_unix_style, to_windows_style};
use crate::terminal::{Key, Terminal};

/// Split a path into its parent directory
///
/// The separator is kept when the parent is a root (`/` or `C:\`).
///
/// # Arguments
/// * `path` - Path to split
/// * `separator` - Host separator
///
/// # Returns
/// * `Option<&str>` - Parent path, or None when the path has no separator
pub(crate) fn parent_of(path: &str, separator: char) -> Option<&str> {
    let idx = path.rfind(separator)?;
    let head = &path[..idx];
    if head.is_empty() || head.ends_with(':') {
        Some(&path[..idx + separator.len_utf8()])
    } else {
        Some(head)
    }
}

/// Last segment of a path, after the final separator
fn last_segment(path: &str, separator: char) -> &str {
    path.rsplit(separator).next().unwrap_or(path)
}

/// Lists candidates for typed paths
pub struct PathLister<'a, L: ?Sized> {
    /// Directory source
    lister: &'a L,

    /// Platform paths are resolved on
    platform: HostPlatform,

    /// Candidate count that triggers the confirmation prompt
    confirm_threshold: usize,

    /// Formatter for the candidate table
    table: &'a TableFormatter,
}

impl<'a, L: DirectoryLister + ?Sized> PathLister<'a, L> {
    /// Create a new path lister
    ///
    /// # Arguments
    /// * `lister` - Directory source
    /// * `platform` - Host platform
    /// * `confirm_threshold` - Candidate count that needs confirmation
    /// * `table` - Formatter used when candidates are printed
    pub fn new(
        lister: &'a L,
        platform: HostPlatform,
        confirm_threshold: usize,
        table: &'a TableFormatter,
    ) -> Self {
        Self {
            lister,
            platform,
            confirm_threshold,
            table,
        }
    }

    /// List candidates for the typed input
    ///
    /// # Arguments
    /// * `input` - Typed buffer
    /// * `style` - Requested display style for roots
    /// * `terminal` - Terminal used for the confirmation prompt and table
    /// * `show_table` - Print the candidates as a grid
    ///
    /// # Returns
    /// * `Result<Option<Vec<String>>>` - Candidates, or None when the user
    ///   declined to see a large listing. Errors only come from the terminal.
    pub fn list<T: Terminal + ?Sized>(
        &self,
        input: &str,
        style: PathStyle,
        terminal: &mut T,
        show_table: bool,
    ) -> Result<Option<Vec<String>>> {
        let typed_style = classify_style(input);
        let separator = self.platform.separator();

        let native_style = self.platform.native_style();
        let path = match native_style {
            PathStyle::Windows => to_windows_style(input),
            PathStyle::Linux => input.to_string(),
        };

        if path.is_empty() {
            let roots = self.roots(style);
            if show_table {
                self.draw_table(terminal, &roots)?;
            }
            return Ok(Some(roots));
        }

        let directories = self.matching_directories(&path, separator);
        debug!("{} candidates for '{}'", directories.len(), path);

        if directories.len() >= self.confirm_threshold
            && !Self::confirm(terminal, directories.len())?
        {
            return Ok(None);
        }

        if show_table && directories.len() > 1 {
            self.draw_table(terminal, &directories)?;
        }

        if native_style == PathStyle::Windows && typed_style == PathStyle::Linux {
            return Ok(Some(Self::to_unix_paths(directories)));
        }

        Ok(Some(directories))
    }

    /// Subdirectories of `path`, or of its parent filtered by the needle
    fn matching_directories(&self, path: &str, separator: char) -> Vec<String> {
        if self.lister.directory_exists(path) {
            return self.subdirectories(path);
        }

        let needle = last_segment(path, separator).to_lowercase();
        let Some(parent) = parent_of(path, separator) else {
            debug!("no parent directory in '{}'", path);
            return Vec::new();
        };

        self.subdirectories(parent)
            .into_iter()
            .filter(|dir| {
                last_segment(dir, separator)
                    .to_lowercase()
                    .starts_with(&needle)
            })
            .collect()
    }

    fn subdirectories(&self, path: &str) -> Vec<String> {
        match self.lister.list_subdirectories(path) {
            Ok(directories) => directories,
            Err(e) => {
                debug!("cannot list '{}': {}", path, e);
                Vec::new()
            }
        }
    }

    /// Roots, converted to POSIX style when a Windows host shows Linux paths
    fn roots(&self, style: PathStyle) -> Vec<String> {
        let roots = self.lister.list_roots();
        if self.platform.native_style() == PathStyle::Windows && style == PathStyle::Linux {
            return Self::to_unix_paths(roots);
        }
        roots
    }

    fn to_unix_paths(paths: Vec<String>) -> Vec<String> {
        paths
            .into_iter()
            .filter_map(|path| match to_unix_style(&path) {
                Ok(converted) => Some(converted),
                Err(e) => {
                    warn!("skipping '{}': {}", path, e);
                    None
                }
            })
            .collect()
    }

    /// Ask whether a large listing should be shown; repeats until y or n
    fn confirm<T: Terminal + ?Sized>(terminal: &mut T, count: usize) -> Result<bool> {
        terminal.write_line("")?;
        terminal.write(&format!("Display all {count} possibilities? (y or n)"))?;

        let answer = loop {
            match terminal.read_key()? {
                Key::Char('y' | 'Y') => break true,
                Key::Char('n' | 'N') => break false,
                _ => continue,
            }
        };

        terminal.write_line("")?;
        Ok(answer)
    }

    fn draw_table<T: Terminal + ?Sized>(&self, terminal: &mut T, paths: &[String]) -> Result<()> {
        let names: Vec<&str> = paths.iter().map(|path| display_name(path)).collect();
        let grid = self.table.format(&names, terminal.window_width());

        terminal.write_line("")?;
        for line in grid.lines() {
            terminal.write_line(line)?;
        }
        Ok(())
    }
}
