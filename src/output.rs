//! CLI output formatting.
//!
//! Every entity is shown the same way: a header line with a positional index
//! and title, then indented context lines (category, excerpt, link).
//!
//! ```text
//! Posts: showing 6 of 8 (category: AI)
//! 001 Chatbots for support [AI]
//!     business automation tips
//!     Link: /blog-details.html?id=1
//! ...
//! Load more: 2 remaining
//! ```
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::{SiteConfig, SiteIdentity};
use crate::filter::{Category, FilterCriteria};
use crate::metadata::{self, SharePreview};
use crate::pagination::ListingPage;
use crate::store::{ContentStore, LookupError};
use crate::types::ArticleRecord;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Card lines for one article: header, excerpt, link.
fn article_card(index: usize, article: &ArticleRecord, site: &SiteIdentity) -> Vec<String> {
    vec![
        format!("{} {} [{}]", format_index(index), article.title, article.category),
        format!("{}{}", indent(1), article.excerpt),
        format!("{}Link: {}", indent(1), site.detail_path(article.id)),
    ]
}

fn describe_criteria(criteria: &FilterCriteria) -> Option<String> {
    let mut parts = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(format!("query: {:?}", criteria.query));
    }
    if criteria.category != Category::All {
        parts.push(format!("category: {}", criteria.category));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

// ============================================================================
// Listing
// ============================================================================

pub fn format_listing(
    page: &ListingPage<'_>,
    criteria: &FilterCriteria,
    site: &SiteIdentity,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut header = format!("Posts: showing {} of {}", page.items.len(), page.total);
    if let Some(desc) = describe_criteria(criteria) {
        header.push_str(&format!(" ({desc})"));
    }
    lines.push(header);

    if page.is_empty() {
        lines.push("No posts found".to_string());
        lines.push(format!(
            "{}Try adjusting your search or filter criteria.",
            indent(1)
        ));
        return lines;
    }

    for (i, article) in page.items.iter().enumerate() {
        lines.extend(article_card(i + 1, article, site));
    }
    if page.has_more {
        lines.push(format!(
            "Load more: {} remaining",
            page.total - page.items.len()
        ));
    }
    lines
}

pub fn print_listing(page: &ListingPage<'_>, criteria: &FilterCriteria, site: &SiteIdentity) {
    for line in format_listing(page, criteria, site) {
        println!("{}", line);
    }
}

// ============================================================================
// Categories and home page preview
// ============================================================================

/// Category selector; the selected entry is marked with `*`.
pub fn format_categories(categories: &[Category], selected: &Category) -> Vec<String> {
    categories
        .iter()
        .map(|c| {
            let mark = if c == selected { "*" } else { " " };
            format!("{mark} {c}")
        })
        .collect()
}

pub fn print_categories(categories: &[Category], selected: &Category) {
    for line in format_categories(categories, selected) {
        println!("{}", line);
    }
}

pub fn format_preview(recent: &[ArticleRecord], site: &SiteIdentity) -> Vec<String> {
    let mut lines = vec!["Latest from the Blog".to_string()];
    for (i, article) in recent.iter().enumerate() {
        lines.extend(article_card(i + 1, article, site));
    }
    lines.push(format!("View all: {}", site.listing_path()));
    lines
}

pub fn print_preview(recent: &[ArticleRecord], site: &SiteIdentity) {
    for line in format_preview(recent, site) {
        println!("{}", line);
    }
}

// ============================================================================
// Article detail
// ============================================================================

/// Article detail with its related posts. The "Related Posts" block is
/// omitted entirely when there are none.
pub fn format_article(
    article: &ArticleRecord,
    related: &[&ArticleRecord],
    site: &SiteIdentity,
) -> Vec<String> {
    let mut lines = vec![
        article.title.clone(),
        format!("{}Category: {}", indent(1), article.category),
        format!("{}By {} on {}", indent(1), article.author, article.date),
        format!("{}Image: {}", indent(1), article.image),
        String::new(),
    ];
    lines.extend(article.content.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(format!("Back to All Posts: {}", site.listing_path()));

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related Posts".to_string());
        for (i, r) in related.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), r.title));
            lines.push(format!("{}Link: {}", indent(1), site.detail_path(r.id)));
        }
    }
    lines
}

pub fn print_article(article: &ArticleRecord, related: &[&ArticleRecord], site: &SiteIdentity) {
    for line in format_article(article, related, site) {
        println!("{}", line);
    }
}

pub fn format_not_found(err: &LookupError, site: &SiteIdentity) -> Vec<String> {
    vec![
        metadata::not_found_title(site),
        format!("{}{}", indent(1), err),
        format!(
            "{}The blog post you are looking for does not exist or could not be loaded.",
            indent(1)
        ),
        format!("Back to Blog: {}", site.listing_path()),
    ]
}

pub fn print_not_found(err: &LookupError, site: &SiteIdentity) {
    for line in format_not_found(err, site) {
        println!("{}", line);
    }
}

// ============================================================================
// Share preview
// ============================================================================

pub fn format_share(preview: &SharePreview) -> Vec<String> {
    let mut lines = vec![
        format!("title: {}", preview.document_title),
        format!("og:title: {}", preview.share_title),
        format!("description: {}", preview.description),
        format!("og:image: {}", preview.image),
        format!("canonical: {}", preview.canonical_url),
        "ld+json:".to_string(),
    ];
    let json = serde_json::to_string_pretty(&preview.json_ld).unwrap_or_default();
    lines.extend(json.lines().map(|l| format!("{}{}", indent(1), l)));
    lines
}

pub fn print_share(preview: &SharePreview) {
    for line in format_share(preview) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Content inventory: article count per category, then effective settings.
pub fn format_check(store: &ContentStore, config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![format!("Articles: {}", store.len())];
    for category in crate::filter::categories(store.all()).iter().skip(1) {
        let count = store.all().iter().filter(|r| category.matches(r)).count();
        lines.push(format!("{}{} ({})", indent(1), category, count));
    }
    lines.push("Config".to_string());
    lines.push(format!("{}page_size: {}", indent(1), config.catalog.page_size));
    lines.push(format!(
        "{}related_limit: {}",
        indent(1),
        config.catalog.related_limit
    ));
    lines.push(format!("{}reveal.threshold: {}", indent(1), config.reveal.threshold));
    lines
}

pub fn print_check(store: &ContentStore, config: &SiteConfig) {
    for line in format_check(store, config) {
        println!("{}", line);
    }
}
