//! Indented markup output

/// Builds an HTML fragment line by line with two-space indentation
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    lines: Vec<String>,
    indent: usize,
}

impl MarkupBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    /// Add a single line at the current depth
    pub fn line(&mut self, content: impl AsRef<str>) {
        let content = content.as_ref();
        if content.is_empty() {
            return;
        }
        self.lines.push(format!("{}{}", self.indent_str(), content));
    }

    /// Add an opening tag and nest everything after it
    pub fn open(&mut self, tag: impl AsRef<str>) {
        self.line(tag);
        self.indent += 1;
    }

    /// Close the innermost open tag
    pub fn close(&mut self, tag: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(tag);
    }

    /// Join all lines into one fragment
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// `<tag class="...">text</tag>` with the text escaped
pub fn text_element(tag: &str, class: Option<&str>, text: &str) -> String {
    match class {
        Some(class) => format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape_html(text)),
        None => format!("<{tag}>{}</{tag}>", escape_html(text)),
    }
}

/// `<span class="tech-tag">...</span>` for each label, concatenated
pub fn badges<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| text_element("span", Some("tech-tag"), label.as_ref()))
        .collect()
}

/// Escape special HTML characters in text and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
