//! Rendering of the image list declaration

use crate::scan::ImageEntry;

/// Quote a path as a single-quoted script string
fn quote(path: &str) -> String {
    let escaped = path.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Render `const <variable> = [ ... ];` for the given entries
///
/// The header carries no leading whitespace since it replaces a span that
/// starts at `const`. Entries sit at `base_indent + indent`, the closing `];`
/// at `base_indent`. Every line break is `newline`, so a CRLF script stays
/// CRLF. An empty list renders as the header directly followed by the
/// terminator line.
pub fn render_declaration(
    variable: &str,
    entries: &[ImageEntry],
    base_indent: &str,
    indent: &str,
    newline: &str,
) -> String {
    let mut block = format!("const {} = [{}", variable, newline);

    for (i, entry) in entries.iter().enumerate() {
        let comma = if i + 1 < entries.len() { "," } else { "" };
        block.push_str(&format!(
            "{}{}{}{}{}",
            base_indent,
            indent,
            quote(&entry.web_path),
            comma,
            newline
        ));
    }

    block.push_str(base_indent);
    block.push_str("];");
    block
}
