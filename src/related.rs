//! Related-post selection for the article detail page.
//!
//! Candidates share the focal article's category and exclude the focal
//! article itself. The first `limit` candidates in store order win; there is
//! no relevance or recency ranking. An empty result means the "Related Posts"
//! region is omitted.

use crate::store::ContentStore;
use crate::types::ArticleRecord;

/// Default number of related posts shown under an article.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

pub fn related<'s>(
    store: &'s ContentStore,
    focal: &ArticleRecord,
    limit: usize,
) -> Vec<&'s ArticleRecord> {
    store
        .all()
        .iter()
        .filter(|r| r.category == focal.category && r.id != focal.id)
        .take(limit)
        .collect()
}
