//! Page storage seam: listing, reading, and writing exported pages.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Layout;
use crate::error::Error;

/// Where pages are listed from, read from, and written back to.
pub trait PageStore {
    /// Check that `dir` exists and is a directory.
    fn is_dir(&self, dir: &Path) -> bool;

    /// List the pages directly inside `dir` that should be relinked,
    /// sorted by file name. An entry named `*.md` is listed whatever its
    /// type, so a directory with that name fails when it is read.
    ///
    /// # Errors
    ///
    /// Returns `Error::ListFailed` if the directory cannot be walked.
    fn list_pages(&self, dir: &Path) -> Result<Vec<PathBuf>, Error>;

    /// Read a page as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReadFailed` on I/O failure or invalid UTF-8.
    fn read_page(&self, path: &Path) -> Result<String, Error>;

    /// Overwrite a page with `content`.
    ///
    /// # Errors
    ///
    /// Returns `Error::WriteFailed` on I/O failure.
    fn write_page(&self, path: &Path, content: &str) -> Result<(), Error>;
}

/// Pages on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl PageStore for FsStore {
    fn is_dir(&self, dir: &Path) -> bool {
        return dir.is_dir();
    }

    fn list_pages(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut pages = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| {
                return Error::ListFailed { path: dir.to_path_buf(), source };
            })?;
            if Layout::should_relink(entry.path()) {
                pages.push(entry.into_path());
            }
        }
        return Ok(pages);
    }

    fn read_page(&self, path: &Path) -> Result<String, Error> {
        return std::fs::read_to_string(path).map_err(|source| {
            return Error::ReadFailed { path: path.to_path_buf(), source };
        });
    }

    fn write_page(&self, path: &Path, content: &str) -> Result<(), Error> {
        return std::fs::write(path, content).map_err(|source| {
            return Error::WriteFailed { path: path.to_path_buf(), source };
        });
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, reason = "test code")]
mod tests {
    use super::*;

    #[test]
    fn lists_markdown_pages_sorted_without_landing_page() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2-setup.md", "README.md", "10-api.md", "1-overview.md", "logo.png"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        let pages = FsStore.list_pages(dir.path()).unwrap();
        let names: Vec<String> = pages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["1-overview.md", "10-api.md", "2-setup.md"]);
    }

    #[test]
    fn lists_directories_named_like_pages_but_not_nested_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("archive.md")).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/deep.md"), "x").unwrap();
        std::fs::write(dir.path().join("top.md"), "x").unwrap();

        let pages = FsStore.list_pages(dir.path()).unwrap();
        assert_eq!(pages, [dir.path().join("archive.md"), dir.path().join("top.md")]);
    }

    #[test]
    fn lists_page_named_only_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".md"), "x").unwrap();
        std::fs::write(dir.path().join("a.md"), "x").unwrap();

        let pages = FsStore.list_pages(dir.path()).unwrap();
        assert_eq!(pages, [dir.path().join(".md"), dir.path().join("a.md")]);
    }

    #[test]
    fn reading_a_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.md");
        std::fs::create_dir(&path).unwrap();

        let err = FsStore.read_page(&path).unwrap_err();
        assert!(matches!(err, Error::ReadFailed { .. }));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FsStore.read_page(&path).unwrap_err();
        assert!(matches!(err, Error::ReadFailed { .. }));
    }

    #[test]
    fn missing_directory_is_not_a_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!FsStore.is_dir(&dir.path().join("absent")));
        assert!(FsStore.is_dir(dir.path()));
    }
}
