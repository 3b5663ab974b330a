/// Core domain types for link lines, scan state, and batch results.
use std::path::PathBuf;

/// Whether the current line sits inside a `<details>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Between a `<details>` and its `</details>`. Link lines are rewritten.
    Inside,
    /// Anywhere else. Lines pass through untouched.
    #[default]
    Outside,
}

/// A bullet-list link line split around its target.
/// `prefix + target + suffix` reproduces the original line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLine<'a> {
    /// Indentation, list marker, link text, and the opening parenthesis.
    pub prefix: &'a str,
    /// Closing parenthesis, trailing whitespace, and the line terminator.
    pub suffix: &'a str,
    /// Link destination between the parentheses.
    pub target: &'a str,
}

/// Result of relinking one page's content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relinked {
    /// Full page text after rewriting. Equal to the input when nothing changed.
    pub content: String,
    /// Number of link targets that were rewritten.
    pub links_rewritten: usize,
}

impl Relinked {
    /// True when at least one target changed and the page must be written.
    pub const fn changed(&self) -> bool {
        return self.links_rewritten > 0;
    }
}

/// What happened to one page during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// Links rewritten on this page. Zero means the page was not written.
    pub links_rewritten: usize,
    /// Page that was scanned.
    pub path: PathBuf,
}

/// Totals for a whole batch run, printed as the closing summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-page outcomes in processing order.
    pub pages: Vec<PageOutcome>,
}

impl RunSummary {
    /// Total number of rewritten links across all pages.
    pub fn links_rewritten(&self) -> usize {
        return self.pages.iter().map(|p| return p.links_rewritten).sum();
    }

    /// Number of pages that were written back.
    pub fn pages_rewritten(&self) -> usize {
        return self.pages.iter().filter(|p| return p.links_rewritten > 0).count();
    }

    /// Number of pages scanned, rewritten or not.
    pub fn pages_scanned(&self) -> usize {
        return self.pages.len();
    }
}
