//! Column-grid formatting for candidate lists using tabled
//!
//! Candidates are laid out left-to-right, top-to-bottom in equally wide
//! columns. The column width is the widest entry plus padding, and as many
//! columns as fit in the terminal width are used.

use tabled::{
    builder::Builder,
    settings::{Modify, Padding, Style, object::Segment},
};

/// Default spaces added to the widest entry
const DEFAULT_PADDING: usize = 3;

/// Grid formatter for candidate names
#[derive(Debug, Clone)]
pub struct TableFormatter {
    /// Spaces added to the widest entry to form a column
    padding: usize,
}

impl TableFormatter {
    /// Create a new table formatter with default padding
    ///
    /// # Returns
    /// * `Self` - New table formatter
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the column padding
    ///
    /// # Arguments
    /// * `padding` - Spaces added after the widest entry
    ///
    /// # Returns
    /// * `Self` - Modified formatter
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Number of columns that fit into the given width
    ///
    /// # Arguments
    /// * `items` - Entries to lay out
    /// * `window_width` - Available terminal width
    ///
    /// # Returns
    /// * `usize` - Column count, at least one
    pub fn column_count<S: AsRef<str>>(&self, items: &[S], window_width: usize) -> usize {
        let column_width = self.column_width(items);
        if column_width == 0 {
            return 1;
        }
        (window_width / column_width).max(1)
    }

    /// Format entries as a grid
    ///
    /// # Arguments
    /// * `items` - Entries to lay out
    /// * `window_width` - Available terminal width
    ///
    /// # Returns
    /// * `String` - Grid text, one line per row; empty for no entries
    pub fn format<S: AsRef<str>>(&self, items: &[S], window_width: usize) -> String {
        if items.is_empty() {
            return String::new();
        }

        let column_width = self.column_width(items);
        let columns = self.column_count(items, window_width);

        let mut builder = Builder::default();
        for chunk in items.chunks(columns) {
            let mut row: Vec<String> = chunk
                .iter()
                .map(|item| format!("{:<column_width$}", item.as_ref()))
                .collect();
            row.resize(columns, String::new());
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::empty())
            .with(Modify::new(Segment::all()).with(Padding::zero()));

        table
            .to_string()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn column_width<S: AsRef<str>>(&self, items: &[S]) -> usize {
        items
            .iter()
            .map(|item| item.as_ref().chars().count())
            .max()
            .unwrap_or(0)
            + self.padding
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items() {
        let formatter = TableFormatter::new();
        let items: Vec<String> = Vec::new();
        assert_eq!(formatter.format(&items, 80), "");
    }

    #[test]
    fn test_column_count() {
        let formatter = TableFormatter::new();
        // widest entry 3 + padding 3 = 6 per column
        assert_eq!(formatter.column_count(&["bin", "etc", "usr"], 12), 2);
        assert_eq!(formatter.column_count(&["bin"], 80), 13);
    }

    #[test]
    fn test_narrow_window_still_has_one_column() {
        let formatter = TableFormatter::new();
        assert_eq!(formatter.column_count(&["a-very-long-directory"], 5), 1);
    }

    #[test]
    fn test_grid_rows() {
        let formatter = TableFormatter::new();
        let output = formatter.format(&["bin", "etc", "usr", "var", "opt"], 12);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("bin"));
        assert!(lines[0].contains("etc"));
        assert!(lines[1].starts_with("usr"));
        assert!(lines[1].contains("var"));
        assert_eq!(lines[2].trim(), "opt");
    }

    #[test]
    fn test_columns_are_aligned() {
        let formatter = TableFormatter::new().with_padding(1);
        let output = formatter.format(&["a", "bbb", "cc", "d"], 8);
        let lines: Vec<&str> = output.lines().collect();

        // column width = 3 + 1 = 4, two columns
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].find("bbb"), Some(4));
        assert_eq!(lines[1].find('d'), Some(4));
    }
}
