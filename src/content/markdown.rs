//! Excerpt extraction and rendering

use pulldown_cmark::{html, Options, Parser};

/// Renders the leading snippet of a post body to HTML
#[derive(Debug, Clone)]
pub struct ExcerptRenderer {
    separator: String,
}

impl ExcerptRenderer {
    /// Create a renderer that ends excerpts at a line equal to `separator`
    pub fn new(separator: &str) -> Self {
        Self {
            separator: separator.trim().to_string(),
        }
    }

    /// Markdown before the separator line, or `None` when the body has no separator
    pub fn split<'a>(&self, body: &'a str) -> Option<&'a str> {
        if self.separator.is_empty() {
            return None;
        }

        let mut offset = 0;
        for line in body.split_inclusive('\n') {
            if line.trim() == self.separator {
                let excerpt = body[..offset].trim();
                return (!excerpt.is_empty()).then_some(excerpt);
            }
            offset += line.len();
        }
        None
    }

    /// Extract and render the excerpt of `body`
    pub fn excerpt(&self, body: &str) -> Option<String> {
        self.split(body).map(render)
    }
}

impl Default for ExcerptRenderer {
    fn default() -> Self {
        Self::new("---")
    }
}

/// Render markdown to HTML
pub fn render(markdown: &str) -> String {
    // Front matter is stripped before rendering, so no metadata blocks here
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
