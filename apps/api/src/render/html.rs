//! Minimal deterministic HTML writer.
//!
//! User-supplied text always passes through [`esc`] before it is pushed;
//! the only unescaped markup in a fragment is what the renderers emit
//! themselves. Same input, identical bytes out.

/// Push-order string builder for one fragment.
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Html {
            buf: String::with_capacity(4 * 1024),
        }
    }

    /// Appends raw markup verbatim.
    pub fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends user text, escaped.
    pub fn text(&mut self, s: &str) {
        self.buf.push_str(&esc(s));
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes `&`, `<`, `>` and `"` for element and attribute contexts.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc_covers_markup_chars() {
        assert_eq!(esc("a & b"), "a &amp; b");
        assert_eq!(esc("<script>\"x\"</script>"), "&lt;script&gt;&quot;x&quot;&lt;/script&gt;");
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn test_writer_mixes_raw_and_escaped() {
        let mut w = Html::new();
        w.push("<p>");
        w.text("1 < 2");
        w.push("</p>");
        assert_eq!(w.finish(), "<p>1 &lt; 2</p>");
    }
}
