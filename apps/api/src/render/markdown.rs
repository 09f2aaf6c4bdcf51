//! Lightly-marked text to inline HTML.
//!
//! Generated drafts arrive with markdown-ish decoration: leading bullet
//! dashes, `**bold**` spans, hard line breaks. This converts them to the
//! fragment dialect the renderers use. Callers escape the text first
//! ([`crate::render::html::esc`]); this pass only rewrites the markers.

/// Strips leading `- ` bullets per line, converts `**text**` to
/// `<b>text</b>`, and turns line breaks into `<br/>`.
///
/// Idempotent over its own output: converted text contains no `**` pairs
/// left to re-wrap. An unmatched `**` is kept verbatim.
pub fn sanitize_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br/>");
        }
        let trimmed = line.trim_start();
        let line = match trimmed.strip_prefix('-') {
            Some(rest) => rest.trim_start(),
            None => line,
        };
        convert_bold(line, &mut out);
    }
    out
}

/// Rewrites non-overlapping `**…**` pairs, shortest match first.
fn convert_bold(line: &str, out: &mut String) {
    let mut rest = line;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        match after.find("**") {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str("<b>");
                out.push_str(&after[..end]);
                out.push_str("</b>");
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
}
