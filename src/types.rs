//! Article types shared by every part of the catalog.
//!
//! Records are authored in `posts.toml` and deserialized straight into
//! [`ArticleRecord`]. They are never mutated after the store is built.

use pulldown_cmark::{Parser, html as md_html};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable article identifier, assigned when the article is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        ArticleId(id)
    }
}

/// One content item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub title: String,
    /// Short summary shown on cards; searched together with the title.
    pub excerpt: String,
    /// Markdown body, rendered by [`ArticleRecord::content_html`].
    pub content: String,
    /// Free-form category label. Matching is exact and case-sensitive.
    pub category: String,
    pub author: String,
    /// Publication date as authored (e.g. `2024-07-15` or `July 15, 2024`).
    pub date: String,
    /// Image reference (URL or site-relative path).
    pub image: String,
}

impl ArticleRecord {
    /// Render the markdown body to HTML.
    pub fn content_html(&self) -> String {
        let parser = Parser::new(&self.content);
        let mut out = String::new();
        md_html::push_html(&mut out, parser);
        out
    }
}

/// On-disk shape of `posts.toml`: a list of `[[posts]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleFile {
    #[serde(default)]
    pub posts: Vec<ArticleRecord>,
}
