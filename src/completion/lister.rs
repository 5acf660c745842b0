//! Directory enumeration collaborator
//!
//! The engine asks a [`DirectoryLister`] for subdirectories, existence checks
//! and root volumes. [`FsLister`] answers from the real filesystem.

use std::fs;
use std::io;
use std::path::Path;

use crate::path_style::PathStyle;

/// Platform the paths are resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Unix,
}

impl HostPlatform {
    /// Platform of the running process
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    /// Native path separator
    pub fn separator(self) -> char {
        match self {
            HostPlatform::Windows => '\\',
            HostPlatform::Unix => '/',
        }
    }

    /// Path style the host understands natively
    pub fn native_style(self) -> PathStyle {
        match self {
            HostPlatform::Windows => PathStyle::Windows,
            HostPlatform::Unix => PathStyle::Linux,
        }
    }
}

/// Source of directory listings
pub trait DirectoryLister {
    /// Absolute paths of the immediate subdirectories of `path`
    fn list_subdirectories(&self, path: &str) -> io::Result<Vec<String>>;

    /// Whether `path` names an existing directory
    fn directory_exists(&self, path: &str) -> bool;

    /// Root paths (drives on Windows, `/` elsewhere)
    fn list_roots(&self) -> Vec<String>;
}

/// Lister backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_subdirectories(&self, path: &str) -> io::Result<Vec<String>> {
        let mut directories: Vec<String> = fs::read_dir(path)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::trace!("skipping unreadable entry in {}: {}", path, e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
            .map(|entry| entry.path().to_string_lossy().into_owned())
            .collect();

        directories.sort();
        Ok(directories)
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn list_roots(&self) -> Vec<String> {
        if cfg!(windows) {
            ('A'..='Z')
                .map(|letter| format!("{letter}:\\"))
                .filter(|drive| Path::new(drive).is_dir())
                .collect()
        } else {
            vec!["/".to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_host_platform_separator() {
        assert_eq!(HostPlatform::Windows.separator(), '\\');
        assert_eq!(HostPlatform::Unix.separator(), '/');
        assert_eq!(HostPlatform::Windows.native_style(), PathStyle::Windows);
    }

    #[test]
    fn test_lists_only_directories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        File::create(dir.path().join("gamma.txt")).unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let listed = FsLister.list_subdirectories(&root).unwrap();

        let names: Vec<String> = listed
            .iter()
            .map(|p| {
                Path::new(p)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert!(listed.iter().all(|p| p.starts_with(&root)));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").to_string_lossy().into_owned();

        assert!(FsLister.list_subdirectories(&missing).is_err());
        assert!(!FsLister.directory_exists(&missing));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");
        File::create(&file).unwrap();

        assert!(!FsLister.directory_exists(&file.to_string_lossy()));
        assert!(FsLister.directory_exists(&dir.path().to_string_lossy()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_root() {
        assert_eq!(FsLister.list_roots(), vec!["/".to_string()]);
    }
}
