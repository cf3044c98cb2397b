//! Locating and replacing the image list declaration in the target text

use crate::error::Result;
use regex::{Captures, Regex};

/// Outcome of splicing a rendered block into a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Text after substitution (identical to the input when nothing matched)
    pub content: String,

    /// Number of declaration spans replaced
    pub replaced: usize,
}

/// Build the pattern matching `const <variable> = [ ... ];` across newlines
///
/// The bracket body is matched non-greedily, so the span ends at the first `];`.
pub fn declaration_pattern(variable: &str) -> Result<Regex> {
    let pattern = format!(r"\bconst\s+{}\s*=\s*\[[\s\S]*?\];", regex::escape(variable));
    Ok(Regex::new(&pattern)?)
}

/// Leading whitespace of the line containing byte offset `at`
fn line_indent(text: &str, at: usize) -> &str {
    let line_start = text[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &text[line_start..at];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// Line ending to render a span with
///
/// A multi-line span keeps its own line ending; a single-line span follows the
/// file, so a compact declaration in a CRLF script is expanded with CRLF.
pub fn line_ending(span: &str, text: &str) -> &'static str {
    if span.contains("\r\n") {
        "\r\n"
    } else if span.contains('\n') {
        "\n"
    } else if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Replace every (or only the first, without `replace_all`) declaration span
///
/// `render` receives the indentation of the line the span starts on and the
/// span's line ending, and returns the replacement block. Text outside the
/// spans is kept as-is.
pub fn splice_declaration<F>(
    content: &str,
    pattern: &Regex,
    replace_all: bool,
    mut render: F,
) -> Splice
where
    F: FnMut(&str, &str) -> String,
{
    let limit = if replace_all { 0 } else { 1 };
    let mut replaced = 0;

    let spliced = pattern.replacen(content, limit, |caps: &Captures| {
        replaced += 1;
        let (start, span) = caps
            .get(0)
            .map(|m| (m.start(), m.as_str()))
            .unwrap_or((0, ""));
        render(line_indent(content, start), line_ending(span, content))
    });

    Splice {
        content: spliced.into_owned(),
        replaced,
    }
}
