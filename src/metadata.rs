//! Share-preview metadata for article pages.
//!
//! The detail page updates its document title, Open Graph / Twitter tags,
//! canonical link and a JSON-LD `BlogPosting` from the focal article. This
//! module computes those values; writing them into the page is up to the
//! caller.

use crate::config::SiteIdentity;
use crate::types::ArticleRecord;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

/// Date formats accepted for `datePublished`, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Everything the detail page writes into `<head>` for one article.
#[derive(Debug, Clone, Serialize)]
pub struct SharePreview {
    /// `<title>`: `"{title} - {owner}"`.
    pub document_title: String,
    /// `og:title` and `twitter:title`.
    pub share_title: String,
    /// `description`, `og:description` and `twitter:description`.
    pub description: String,
    /// `og:image` and `twitter:image`.
    pub image: String,
    /// `og:url` and `<link rel="canonical">`.
    pub canonical_url: String,
    /// Body of the `application/ld+json` script.
    pub json_ld: Value,
}

impl SharePreview {
    pub fn for_article(article: &ArticleRecord, site: &SiteIdentity) -> Self {
        let canonical_url = site.detail_url(article.id);
        Self {
            document_title: format!("{} - {}", article.title, site.owner),
            share_title: format!("{} | {} Blog", article.title, site.name),
            description: article.excerpt.clone(),
            image: article.image.clone(),
            json_ld: blog_posting(article, site),
            canonical_url,
        }
    }
}

/// Document title of the detail page when the article can't be resolved.
pub fn not_found_title(site: &SiteIdentity) -> String {
    format!("Post Not Found - {}", site.owner)
}

/// schema.org `BlogPosting` for an article.
///
/// `datePublished` is omitted when the authored date can't be parsed.
pub fn blog_posting(article: &ArticleRecord, site: &SiteIdentity) -> Value {
    let mut posting = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": article.title,
        "description": article.excerpt,
        "image": article.image,
        "author": {
            "@type": "Person",
            "name": article.author,
            "url": site.base_url,
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "logo": {
                "@type": "ImageObject",
                "url": site.logo_url,
            },
        },
    });
    match iso_date(&article.date) {
        Some(date) => posting["datePublished"] = Value::String(date),
        None => tracing::warn!(
            id = %article.id,
            date = %article.date,
            "unrecognised article date, datePublished omitted"
        ),
    }
    posting
}

/// Midnight UTC of the authored date, as ISO-8601 with milliseconds.
pub fn iso_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}
