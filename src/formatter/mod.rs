//! Output formatting for candidate lists
//!
//! Only display concerns live here; nothing in this module affects the
//! completion state.

pub mod table;

pub use table::TableFormatter;

/// Display name of a listed path: its last non-empty segment
///
/// Both `/` and `\` are treated as separators, so drive roots such as
/// `C:\` keep their drive name.
///
/// # Arguments
/// * `path` - Absolute path as returned by the lister
///
/// # Returns
/// * `&str` - Last segment, or the path itself when it has none
pub fn display_name(path: &str) -> &str {
    path.split(['/', '\\'])
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("/usr/local"), "local");
        assert_eq!(display_name("/usr/local/"), "local");
        assert_eq!(display_name("C:\\Users\\me"), "me");
        assert_eq!(display_name("C:\\"), "C:");
        assert_eq!(display_name("/"), "/");
    }
}
