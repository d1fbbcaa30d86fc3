//! "Load more" pagination for filtered listings.
//!
//! A [`Paginator`] only tracks how many results are revealed. [`Listing`] ties
//! it to the reader's [`FilterCriteria`]: any change to the query or category
//! recomputes the filtered view and restarts pagination at the first page.

use crate::filter::{self, Category, FilterCriteria};
use crate::store::ContentStore;
use crate::types::ArticleRecord;

/// Default number of articles revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    visible_count: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// `page_size` of zero is clamped to one so "load more" always advances.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    pub fn expand(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    /// The revealed prefix of `filtered`.
    pub fn view<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.visible_count.min(filtered.len())]
    }

    /// Whether a "load more" affordance should be offered for `total` results.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }
}

/// What a listing page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'s> {
    pub items: Vec<&'s ArticleRecord>,
    /// Size of the whole filtered set, not just the revealed prefix.
    pub total: usize,
    pub has_more: bool,
}

impl ListingPage<'_> {
    /// Zero matches renders as "no posts found".
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Blog listing state: criteria, pagination and the memoised filtered view.
#[derive(Debug, Clone)]
pub struct Listing<'s> {
    store: &'s ContentStore,
    criteria: FilterCriteria,
    paginator: Paginator,
    filtered: Vec<&'s ArticleRecord>,
}

impl<'s> Listing<'s> {
    pub fn new(store: &'s ContentStore, page_size: usize) -> Self {
        let criteria = FilterCriteria::default();
        let filtered = filter::filter(store.all(), &criteria);
        Self {
            store,
            criteria,
            paginator: Paginator::new(page_size),
            filtered,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.criteria.query {
            self.criteria.query = query;
            self.refilter();
        }
    }

    pub fn set_category(&mut self, category: impl Into<Category>) {
        let category = category.into();
        if category != self.criteria.category {
            self.criteria.category = category;
            self.refilter();
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.refilter();
        }
    }

    pub fn load_more(&mut self) {
        self.paginator.expand();
        tracing::debug!(
            visible = self.paginator.visible_count(),
            total = self.filtered.len(),
            "listing expanded"
        );
    }

    /// Every record matching the current criteria.
    pub fn filtered(&self) -> &[&'s ArticleRecord] {
        &self.filtered
    }

    pub fn page(&self) -> ListingPage<'s> {
        ListingPage {
            items: self.paginator.view(&self.filtered).to_vec(),
            total: self.filtered.len(),
            has_more: self.paginator.has_more(self.filtered.len()),
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter::filter(self.store.all(), &self.criteria);
        self.paginator.reset();
        tracing::debug!(
            query = %self.criteria.query,
            category = %self.criteria.category,
            matches = self.filtered.len(),
            "listing criteria changed"
        );
    }
}
