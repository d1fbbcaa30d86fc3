//! Filter and search over the content store.
//!
//! Both predicates must pass for a record to be included:
//!
//! - **Category**: [`Category::All`] passes everything; a named category passes
//!   records whose `category` equals it exactly (case-sensitive).
//! - **Text**: an empty query passes everything; otherwise the query must be a
//!   case-insensitive substring of the title or the excerpt.
//!
//! Output keeps store order. An unknown category is not an error, it simply
//! matches nothing.

use crate::types::ArticleRecord;
use std::fmt;

/// Name of the catch-all category selector.
pub const ALL_CATEGORIES: &str = "All";

/// Category selector chosen by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn matches(&self, record: &ArticleRecord) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => record.category == *name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL_CATEGORIES,
            Category::Named(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(s.to_string())
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(s)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (query, category) pair driving a listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Category,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    /// Whether `record` passes both the category and the text predicate.
    pub fn matches(&self, record: &ArticleRecord) -> bool {
        self.category.matches(record) && matches_query(record, &self.query.to_lowercase())
    }
}

/// `needle` must already be lowercased.
fn matches_query(record: &ArticleRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.excerpt.to_lowercase().contains(needle)
}

/// Records passing `criteria`, in store order.
pub fn filter<'a>(records: &'a [ArticleRecord], criteria: &FilterCriteria) -> Vec<&'a ArticleRecord> {
    let needle = criteria.query.to_lowercase();
    records
        .iter()
        .filter(|r| criteria.category.matches(r) && matches_query(r, &needle))
        .collect()
}

/// Categories offered for selection: `All` first, then each distinct
/// category in first-seen order.
pub fn categories(records: &[ArticleRecord]) -> Vec<Category> {
    let mut out = vec![Category::All];
    for record in records {
        let category = Category::from(record.category.as_str());
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}
