//! The content store: an immutable, ordered collection of articles.
//!
//! Built once at startup from `posts.toml` in the content directory and never
//! mutated afterwards. Insertion order is authoring order, and every derived
//! view (filtering, related posts, the home page preview) preserves it.
//!
//! ## Validation
//!
//! The store rejects:
//! - Duplicate article ids
//! - Empty or blank categories
//!
//! A category literally named `All` is accepted but logged, since the
//! category filter reserves that name for "no filter".
//!
//! ## Lookup
//!
//! [`ContentStore::by_id`] and [`ContentStore::resolve_param`] return a
//! [`LookupError`] on a miss. Callers render a "not found" state; a miss is
//! never fatal.

use crate::filter::ALL_CATEGORIES;
use crate::types::{ArticleFile, ArticleId, ArticleRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the article list inside the content directory.
pub const POSTS_FILENAME: &str = "posts.toml";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate article id {0}")]
    DuplicateId(ArticleId),
    #[error("Article {0} has an empty category")]
    EmptyCategory(ArticleId),
}

/// Failure to resolve a focal article. Every variant renders as "not found".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no article with id {0}")]
    NotFound(ArticleId),
    #[error("article id parameter is missing")]
    MissingId,
    #[error("article id parameter is not a number: {0:?}")]
    InvalidId(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    records: Vec<ArticleRecord>,
    index: HashMap<ArticleId, usize>,
}

impl ContentStore {
    /// Build a store from records in authoring order.
    pub fn new(records: Vec<ArticleRecord>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if record.category.trim().is_empty() {
                return Err(StoreError::EmptyCategory(record.id));
            }
            if record.category == ALL_CATEGORIES {
                tracing::warn!(
                    id = %record.id,
                    "article category `{ALL_CATEGORIES}` collides with the no-filter selector"
                );
            }
            if index.insert(record.id, pos).is_some() {
                return Err(StoreError::DuplicateId(record.id));
            }
        }
        tracing::debug!(articles = records.len(), "content store built");
        Ok(Self { records, index })
    }

    /// Load `posts.toml` from the content directory.
    ///
    /// A missing file yields an empty store; a blog with no posts is valid.
    pub fn load(content_dir: &Path) -> Result<Self, StoreError> {
        let path = content_dir.join(POSTS_FILENAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no posts file, starting with an empty store");
            return Self::new(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let file: ArticleFile = toml::from_str(&content)?;
        Self::new(file.posts)
    }

    /// Every article, in authoring order.
    pub fn all(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_id(&self, id: ArticleId) -> Result<&ArticleRecord, LookupError> {
        self.index
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(LookupError::NotFound(id))
    }

    /// Resolve the page-level `id` parameter of the article detail page.
    pub fn resolve_param(&self, param: Option<&str>) -> Result<&ArticleRecord, LookupError> {
        let raw = param.ok_or(LookupError::MissingId)?;
        let id = parse_id_param(raw).ok_or_else(|| LookupError::InvalidId(raw.to_string()))?;
        self.by_id(id)
    }

    /// The first `count` articles, used by the home page preview.
    pub fn recent(&self, count: usize) -> &[ArticleRecord] {
        &self.records[..count.min(self.records.len())]
    }
}

/// Parse an id parameter the way a browser's `parseInt(s, 10)` does.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit. `"12abc"` is 12, `"abc"` is `None`.
pub fn parse_id_param(raw: &str) -> Option<ArticleId> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(ArticleId(if negative { -value } else { value }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn all_preserves_authoring_order() {
        let store = store_of(&[(3, "AI"), (1, "Design"), (2, "AI")]);
        assert_eq!(ids(store.all()), vec![3, 1, 2]);
    }

    #[test]
    fn by_id_finds_record() {
        let store = store_of(&[(1, "AI"), (2, "Design")]);
        assert_eq!(store.by_id(ArticleId(2)).unwrap().category, "Design");
    }

    #[test]
    fn by_id_unknown_is_not_found() {
        let store = store_of(&[(1, "AI")]);
        assert_eq!(
            store.by_id(ArticleId(9999)),
            Err(LookupError::NotFound(ArticleId(9999)))
        );
    }

    #[test]
    fn duplicate_id_rejected() {
        let records = vec![article(1, "AI"), article(1, "Design")];
        let err = ContentStore::new(records).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ArticleId(1))));
    }

    #[test]
    fn blank_category_rejected() {
        let records = vec![article(1, "  ")];
        let err = ContentStore::new(records).unwrap_err();
        assert!(matches!(err, StoreError::EmptyCategory(ArticleId(1))));
    }

    #[test]
    fn recent_is_bounded_prefix() {
        let store = store_of(&[(1, "AI"), (2, "AI"), (3, "AI"), (4, "AI")]);
        assert_eq!(ids(store.recent(3)), vec![1, 2, 3]);
        assert_eq!(ids(store.recent(10)).len(), 4);
        assert!(store.recent(0).is_empty());
    }

    #[test]
    fn parse_id_param_like_parse_int() {
        assert_eq!(parse_id_param("12"), Some(ArticleId(12)));
        assert_eq!(parse_id_param("  7"), Some(ArticleId(7)));
        assert_eq!(parse_id_param("12abc"), Some(ArticleId(12)));
        assert_eq!(parse_id_param("-3"), Some(ArticleId(-3)));
        assert_eq!(parse_id_param("+4"), Some(ArticleId(4)));
        assert_eq!(parse_id_param("abc"), None);
        assert_eq!(parse_id_param(""), None);
        assert_eq!(parse_id_param("-"), None);
    }

    #[test]
    fn resolve_param_outcomes() {
        let store = store_of(&[(1, "AI")]);
        assert_eq!(store.resolve_param(Some("1")).unwrap().id, ArticleId(1));
        assert_eq!(store.resolve_param(None), Err(LookupError::MissingId));
        assert_eq!(
            store.resolve_param(Some("x")),
            Err(LookupError::InvalidId("x".to_string()))
        );
        assert_eq!(
            store.resolve_param(Some("9999")),
            Err(LookupError::NotFound(ArticleId(9999)))
        );
    }

    #[test]
    fn load_missing_file_is_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = ContentStore::load(tmp.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_reads_posts_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(POSTS_FILENAME),
            r#"
[[posts]]
id = 1
title = "First"
excerpt = "one"
content = "body"
category = "AI"
author = "A"
date = "2024-01-01"
image = "/1.jpg"

[[posts]]
id = 2
title = "Second"
excerpt = "two"
content = "body"
category = "Design"
author = "A"
date = "2024-01-02"
image = "/2.jpg"
"#,
        )
        .unwrap();
        let store = ContentStore::load(tmp.path()).unwrap();
        assert_eq!(ids(store.all()), vec![1, 2]);
    }

    #[test]
    fn load_rejects_duplicate_ids_in_file() {
        let tmp = TempDir::new().unwrap();
        let post = r#"
[[posts]]
id = 5
title = "t"
excerpt = "e"
content = "c"
category = "AI"
author = "a"
date = "d"
image = "i"
"#;
        fs::write(tmp.path().join(POSTS_FILENAME), format!("{post}{post}")).unwrap();
        let err = ContentStore::load(tmp.path()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ArticleId(5))));
    }

    #[test]
    fn load_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(POSTS_FILENAME), "[[posts]\nid = ").unwrap();
        assert!(matches!(
            ContentStore::load(tmp.path()),
            Err(StoreError::Toml(_))
        ));
    }
}
