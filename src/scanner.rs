use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

use crate::config::{REGION_CLOSE, REGION_OPEN};
use crate::error::Error;
use crate::rules::rewrite_target;
use crate::types::{LinkLine, Region, Relinked};

/// A whole line body holding exactly one bullet-list link. The line
/// terminator is stripped before matching and rejoined to the suffix.
/// Blank space also covers the `\x1c`..`\x1f` separators.
const LINK_LINE: &str = r"^([\s\x1c-\x1f]*-[\s\x1c-\x1f]*\[[^\]]+\]\()([^)]+)(\)[\s\x1c-\x1f]*)$";

/// Compiled matcher for bullet-list link lines.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    /// Anchored regex with prefix, target, and suffix groups.
    regex: Regex,
}

impl LinkPattern {
    /// Compile the link-line pattern.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if the regex fails to compile.
    pub fn compile() -> Result<Self, Error> {
        return Ok(Self { regex: Regex::new(LINK_LINE)? });
    }

    /// Split `line` around its link target, or `None` if the line body is
    /// not a single bullet-list link. The suffix keeps the line terminator.
    pub fn split<'a>(&self, line: &'a str) -> Option<LinkLine<'a>> {
        let body = line.trim_end_matches(is_line_break);
        let caps = self.regex.captures(body)?;
        let suffix_start = caps.get(3)?.start();
        return Some(LinkLine {
            prefix: caps.get(1)?.as_str(),
            suffix: line.get(suffix_start..)?,
            target: caps.get(2)?.as_str(),
        });
    }
}

/// Characters that end a line. `\r\n` counts as a single terminator.
const fn is_line_break(c: char) -> bool {
    return matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    );
}

/// Blank characters around a region marker.
fn is_blank(c: char) -> bool {
    return c.is_whitespace() || matches!(c, '\x1c'..='\x1f');
}

/// Lines of a page, each with its terminator still attached.
struct PageLines<'a> {
    /// Text not yet yielded.
    rest: &'a str,
}

impl<'a> Iterator for PageLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        let end = match rest.char_indices().find(|&(_, c)| return is_line_break(c)) {
            Some((i, '\r')) if rest.get(i.saturating_add(1)..).is_some_and(|r| return r.starts_with('\n')) => {
                i.saturating_add(2)
            },
            Some((i, c)) => i.saturating_add(c.len_utf8()),
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        self.rest = tail;
        return Some(line);
    }
}

/// Split a page into lines, keeping each terminator with its line.
const fn page_lines(content: &str) -> PageLines<'_> {
    return PageLines { rest: content };
}

/// One line after scanning: the region it leaves behind and its output text.
struct LineStep<'a> {
    /// Region in effect for the following line.
    region: Region,
    /// True when the line's target was rewritten.
    rewritten: bool,
    /// Text to emit for this line, terminator included.
    text: Cow<'a, str>,
}

impl<'a> LineStep<'a> {
    /// Emit the line unchanged and move to `region`.
    const fn passthrough(region: Region, line: &'a str) -> Self {
        return Self { region, rewritten: false, text: Cow::Borrowed(line) };
    }
}

/// Rewrite the link targets inside every `<details>` block of a page.
///
/// Lines end at `\n`, `\r\n`, a lone `\r`, or any other Unicode line
/// break, and every terminator survives untouched, as does a missing final
/// newline. Unbalanced markers are not reported: a stray
/// `</details>` does nothing and an unclosed `<details>` runs to the end.
pub fn relink_content(content: &str, pattern: &LinkPattern) -> Relinked {
    let initial = (Region::default(), String::with_capacity(content.len()), 0_usize);
    let (_, output, links_rewritten) =
        page_lines(content).fold(initial, |(region, mut output, count), line| {
            let step = scan_line(region, line, pattern);
            output.push_str(&step.text);
            let count = if step.rewritten { count.saturating_add(1) } else { count };
            return (step.region, output, count);
        });

    return Relinked { content: output, links_rewritten };
}

/// Advance the region state over one line and rewrite it when eligible.
fn scan_line<'a>(region: Region, line: &'a str, pattern: &LinkPattern) -> LineStep<'a> {
    let trimmed = line.trim_matches(is_blank);
    if trimmed == REGION_OPEN {
        return LineStep::passthrough(Region::Inside, line);
    }
    if trimmed == REGION_CLOSE {
        return LineStep::passthrough(Region::Outside, line);
    }
    if region == Region::Outside {
        return LineStep::passthrough(region, line);
    }

    return match relink_line(line, pattern) {
        Some(rewritten) => LineStep { region, rewritten: true, text: Cow::Owned(rewritten) },
        None => LineStep::passthrough(region, line),
    };
}

/// Rewrite a single link line, or `None` if it is not a link line or its
/// target is already correct.
pub fn relink_line(line: &str, pattern: &LinkPattern) -> Option<String> {
    let link = pattern.split(line)?;
    let target = rewrite_target(link.target);
    if target == link.target {
        return None;
    }

    debug!(from = link.target, to = %target, "rewrote link target");
    return Some(format!("{}{target}{}", link.prefix, link.suffix));
}
