use crate::config::PAGES_DIR;
use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened,
/// and how to fix it where there is a fix.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::DirectoryMissing { path } => format!("\
# Error: Pages Directory Missing

Expected `{}` to exist.

## Fix

Run deepwiki-export and move the output to `{PAGES_DIR}/` first.
", path.display()),

        Error::ReadFailed { path, source } => format!("\
# Error: Cannot Read Page

`{}`: {source}

Pages must be readable UTF-8 text. Pages before this one may already be rewritten.
", path.display()),

        Error::WriteFailed { path, source } => format!("\
# Error: Cannot Write Page

`{}`: {source}

Pages before this one may already be rewritten.
", path.display()),

        Error::ListFailed { path, source } => format!("\
# Error: Cannot List Pages

`{}`: {source}
", path.display()),

        Error::InvalidPattern(_) => format!("\
# Error: Internal

{e}
"),
    };
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_directory_tells_operator_to_export_first() {
        let md = render_error(&Error::DirectoryMissing { path: PathBuf::from("./docs/deepwiki") });
        assert!(md.starts_with("# Error: Pages Directory Missing"));
        assert!(md.contains("`./docs/deepwiki`"));
        assert!(md.contains("Run deepwiki-export and move the output to `docs/deepwiki/` first."));
    }

    #[test]
    fn read_failure_names_the_page() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let md = render_error(&Error::ReadFailed { path: PathBuf::from("docs/deepwiki/1-overview.md"), source });
        assert!(md.contains("`docs/deepwiki/1-overview.md`: permission denied"));
    }
}
