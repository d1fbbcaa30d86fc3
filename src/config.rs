//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The user file in
//! the content directory is sparse: its values are merged on top of the
//! stock defaults, and the merged result is validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "ProbSolv"
//! owner = "Mehdi Hassan"
//! base_url = "https://www.probsolv.online"
//! logo_url = "https://www.probsolv.online/assets/logo.png"
//! detail_page = "blog-details.html"
//! listing_page = "blog.html"
//!
//! [catalog]
//! page_size = 6        # Articles revealed per "load more"
//! related_limit = 3    # Related posts under an article
//! preview_count = 3    # Latest posts on the home page
//!
//! [reveal]
//! threshold = 0.1      # Visible fraction that reveals a region (0, 1]
//! stagger_ms = 100     # Delay step between cards in a grid
//!
//! [contact]
//! notice_secs = 5      # How long the "message sent" notice stays up
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::related::DEFAULT_RELATED_LIMIT;
use crate::reveal::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File name of the site configuration inside the content directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity and URLs used for titles, canonical links and JSON-LD.
    pub site: SiteIdentity,
    /// Listing, related-post and preview sizes.
    pub catalog: CatalogConfig,
    /// Scroll reveal settings.
    pub reveal: RevealConfig,
    /// Simulated contact form settings.
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.page_size == 0 {
            return Err(ConfigError::Validation(
                "catalog.page_size must be at least 1".into(),
            ));
        }
        if self.catalog.related_limit == 0 {
            return Err(ConfigError::Validation(
                "catalog.related_limit must be at least 1".into(),
            ));
        }
        let t = self.reveal.threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(ConfigError::Validation(
                "reveal.threshold must be in (0, 1]".into(),
            ));
        }
        if self.site.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    /// Brand name, used in share titles (`"{title} | {name} Blog"`).
    pub name: String,
    /// Site owner, used in document titles and as the JSON-LD author.
    pub owner: String,
    /// Absolute origin, without trailing slash.
    pub base_url: String,
    pub logo_url: String,
    /// Article detail page, addressed with `?id=N`.
    pub detail_page: String,
    pub listing_page: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "ProbSolv".to_string(),
            owner: "Mehdi Hassan".to_string(),
            base_url: "https://www.probsolv.online".to_string(),
            logo_url: "https://www.probsolv.online/assets/logo.png".to_string(),
            detail_page: "blog-details.html".to_string(),
            listing_page: "blog.html".to_string(),
        }
    }
}

impl SiteIdentity {
    /// Site-relative link to an article, e.g. `/blog-details.html?id=3`.
    pub fn detail_path(&self, id: impl std::fmt::Display) -> String {
        format!("/{}?id={}", self.detail_page, id)
    }

    /// Absolute canonical URL of an article.
    pub fn detail_url(&self, id: impl std::fmt::Display) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.detail_path(id)
        )
    }

    pub fn listing_path(&self) -> String {
        format!("/{}", self.listing_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub page_size: usize,
    pub related_limit: usize,
    pub preview_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            related_limit: DEFAULT_RELATED_LIMIT,
            preview_count: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of a region that must be visible before it is revealed.
    pub threshold: f64,
    /// Delay step between consecutive cards, in milliseconds.
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            stagger_ms: 100,
        }
    }
}

impl RevealConfig {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Seconds the success notice stays visible after a submission.
    pub notice_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { notice_secs: 5 }
    }
}

impl ContactConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content directory.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Blog Catalog Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Brand name used in share titles: "<post title> | <name> Blog".
name = "ProbSolv"

# Site owner, used in page titles and as the article author in JSON-LD.
owner = "Mehdi Hassan"

# Absolute origin for canonical links (no trailing slash).
base_url = "https://www.probsolv.online"

# Publisher logo in JSON-LD.
logo_url = "https://www.probsolv.online/assets/logo.png"

# Article detail page, addressed with ?id=N, and the full listing page.
detail_page = "blog-details.html"
listing_page = "blog.html"

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
[catalog]
# Articles revealed initially and per "Load More" click.
page_size = 6

# Maximum related posts under an article (same category, store order).
related_limit = 3

# Latest posts shown on the home page.
preview_count = 3

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Fraction of a region that must be on screen before it fades in, (0, 1].
threshold = 0.1

# Delay step in milliseconds between cards of a grid.
stagger_ms = 100

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Seconds the "message sent" notice stays visible.
notice_secs = 5
"##
}
