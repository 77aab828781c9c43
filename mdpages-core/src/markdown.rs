//! Markdown rendering with GitHub-flavored extensions.

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer configured for GitHub-flavored input.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }

    /// Convert a markdown document to an HTML fragment.
    ///
    /// The output carries no `<html>`/`<head>` wrapper; wrapping a fragment
    /// into a full document is the presentation layer's job.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
