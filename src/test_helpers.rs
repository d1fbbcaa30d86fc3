//! Shared test utilities for the blog-catalog test suite.
//!
//! Builders for small in-memory stores plus id extractors, so tests can
//! state expectations as plain id lists:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = store_of(&[(1, "AI"), (2, "Design"), (3, "AI")]);
//! let out = filter(store.all(), &FilterCriteria::new("", "AI"));
//! assert_eq!(id_refs(&out), vec![1, 3]);
//! ```

use crate::store::ContentStore;
use crate::types::{ArticleId, ArticleRecord};

// =========================================================================
// Record builders
// =========================================================================

/// An article with placeholder text fields.
pub fn article(id: i64, category: &str) -> ArticleRecord {
    titled(id, category, &format!("Post {id}"), &format!("Excerpt {id}"))
}

pub fn titled(id: i64, category: &str, title: &str, excerpt: &str) -> ArticleRecord {
    ArticleRecord {
        id: ArticleId(id),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: format!("Body of post {id}."),
        category: category.to_string(),
        author: "Test Author".to_string(),
        date: "2024-01-01".to_string(),
        image: format!("/images/{id}.jpg"),
    }
}

// =========================================================================
// Store builders — panic on invalid input
// =========================================================================

pub fn store_of(entries: &[(i64, &str)]) -> ContentStore {
    let records = entries.iter().map(|&(id, cat)| article(id, cat)).collect();
    ContentStore::new(records).unwrap()
}

/// Articles `1..=count`, all in `category`.
pub fn numbered_store(count: i64, category: &str) -> ContentStore {
    let records = (1..=count).map(|id| article(id, category)).collect();
    ContentStore::new(records).unwrap()
}

// =========================================================================
// Extractors and assertions
// =========================================================================

pub fn ids(records: &[ArticleRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id.0).collect()
}

pub fn id_refs(records: &[&ArticleRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id.0).collect()
}

/// Assert `subset` appears in `all` in the same relative order.
pub fn assert_subsequence(all: &[ArticleRecord], subset: &[&ArticleRecord]) {
    let mut remaining = all.iter();
    for wanted in subset {
        assert!(
            remaining.any(|r| r.id == wanted.id),
            "{} is out of store order in {:?}",
            wanted.id,
            id_refs(subset)
        );
    }
}
