//! Fixed layout of the exported pages. There is no config file: the
//! directory, the excluded landing page, and the region markers are constants.

use std::path::{Path, PathBuf};

/// Directory holding the exported pages, relative to the working directory.
pub const PAGES_DIR: &str = "docs/deepwiki";

/// Hand-maintained landing page that is never rewritten.
pub const EXCLUDED_PAGE: &str = "README.md";

/// Extension of exported pages, without the leading dot.
pub const PAGE_EXTENSION: &str = "md";

/// Line that opens the "Relevant source files" block.
pub const REGION_OPEN: &str = "<details>";

/// Line that closes the "Relevant source files" block.
pub const REGION_CLOSE: &str = "</details>";

/// Where the batch looks for pages.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Directory that `PAGES_DIR` is resolved against.
    root: PathBuf,
}

impl Layout {
    /// Layout rooted at `root`. The binary always passes `"."`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        return Self { root: root.into() };
    }

    /// Full path of the pages directory.
    pub fn pages_dir(&self) -> PathBuf {
        return self.root.join(PAGES_DIR);
    }

    /// Check whether a file in the pages directory should be processed.
    ///
    /// A page qualifies when its file name ends in `.md` (a file named just
    /// `.md` counts) and is not the excluded landing page.
    pub fn should_relink(path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        let suffix = format!(".{PAGE_EXTENSION}");
        return name.ends_with(&suffix) && name != EXCLUDED_PAGE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_dir_is_resolved_against_root() {
        let layout = Layout::at("/tmp/project");
        assert_eq!(layout.pages_dir(), PathBuf::from("/tmp/project/docs/deepwiki"));
    }

    #[test]
    fn landing_page_is_excluded() {
        assert!(!Layout::should_relink(Path::new("docs/deepwiki/README.md")));
        assert!(Layout::should_relink(Path::new("docs/deepwiki/1-overview.md")));
    }

    #[test]
    fn non_markdown_files_are_ignored() {
        assert!(!Layout::should_relink(Path::new("docs/deepwiki/diagram.svg")));
        assert!(!Layout::should_relink(Path::new("docs/deepwiki/notes.markdown")));
        assert!(!Layout::should_relink(Path::new("docs/deepwiki/md")));
    }

    #[test]
    fn bare_extension_name_is_a_page() {
        assert!(Layout::should_relink(Path::new("docs/deepwiki/.md")));
    }

    #[test]
    fn exclusion_matches_exact_name_only() {
        assert!(Layout::should_relink(Path::new("docs/deepwiki/readme.md")));
        assert!(Layout::should_relink(Path::new("docs/deepwiki/README.md.md")));
    }
}
