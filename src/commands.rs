//! The relink batch: check the pages directory, then rewrite each page in turn.

use std::path::Path;

use tracing::{debug, info};

use crate::config::Layout;
use crate::error;
use crate::scanner::{LinkPattern, relink_content};
use crate::store::PageStore;
use crate::types::{PageOutcome, RunSummary};

/// Relink every exported page under `layout`, writing back only the pages
/// whose links changed.
///
/// The directory check happens before any page is opened. A failure on one
/// page aborts the rest of the batch; pages already written stay written.
///
/// # Errors
///
/// Returns `Error::DirectoryMissing` if the pages directory is absent,
/// or any listing, read, or write error from the store.
pub fn relink(layout: &Layout, store: &impl PageStore) -> Result<RunSummary, error::Error> {
    let dir = layout.pages_dir();
    if !store.is_dir(&dir) {
        return Err(error::Error::DirectoryMissing { path: dir });
    }

    let pattern = LinkPattern::compile()?;
    let mut summary = RunSummary::default();

    for path in store.list_pages(&dir)? {
        let outcome = relink_page(&path, &pattern, store)?;
        summary.pages.push(outcome);
    }

    return Ok(summary);
}

/// Read one page, rewrite it in memory, and write it back if anything changed.
///
/// # Errors
///
/// Returns `Error::ReadFailed` or `Error::WriteFailed` from the store.
fn relink_page(
    path: &Path,
    pattern: &LinkPattern,
    store: &impl PageStore,
) -> Result<PageOutcome, error::Error> {
    let content = store.read_page(path)?;
    let relinked = relink_content(&content, pattern);

    if relinked.changed() {
        store.write_page(path, &relinked.content)?;
        info!(page = %path.display(), links = relinked.links_rewritten, "rewrote page");
    } else {
        debug!(page = %path.display(), "page already up to date");
    }

    return Ok(PageOutcome { links_rewritten: relinked.links_rewritten, path: path.to_path_buf() });
}

/// Print the closing summary line for a finished run.
pub fn print_summary(summary: &RunSummary) {
    let links = summary.links_rewritten();
    let files = summary.pages_rewritten();
    let scanned = summary.pages_scanned();
    println!("Rewrote {links} links in {files} of {scanned} pages");
}
