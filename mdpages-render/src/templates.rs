//! Askama template definitions.

use askama::Template;

/// Display convention for modification times across all templates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One row in the index listing.
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub name: String,
    pub href: String,
    /// Pre-formatted with [`DATE_FORMAT`].
    pub modified: String,
}

/// Index page template: every page in the store, newest first.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub pages: Vec<PageEntry>,
}

/// Single page template.
///
/// `content` is trusted, pre-rendered HTML produced by the converter and is
/// injected without escaping (the template uses the `safe` filter).
/// Escaping here would mangle every converted page, so callers must never
/// route user-controlled markup through this field.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub name: String,
    pub modified: String,
    pub content: String,
}
