//! # Blog Catalog
//!
//! The content catalog engine behind a marketing site's blog: an immutable
//! article store, category/search filtering, "load more" pagination, related
//! posts, and the scroll-reveal controller that fades page sections in.
//!
//! Presentation is someone else's job. Pages feed reader input (search text,
//! category clicks, "Load More" clicks, visibility measurements) into the
//! engine and render what comes back.
//!
//! # Data Flow
//!
//! ```text
//! posts.toml ──▶ ContentStore ──▶ filter(criteria) ──▶ Paginator::view ──▶ page
//!                     │
//!                     └──▶ related(focal) ──────────────────────────────▶ page
//!
//! page regions ──register──▶ RevealController ◀──notify── viewport observer
//!                                  │
//!                                  └──dispatch──▶ Hidden → Visible
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `ArticleId`, `ArticleRecord`, and the `posts.toml` file shape |
//! | [`store`] | The immutable content store, id lookup, id-parameter parsing |
//! | [`filter`] | Category and search predicates, derived category list |
//! | [`pagination`] | `Paginator` and the `Listing` state that resets on filter changes |
//! | [`related`] | Same-category related posts |
//! | [`reveal`] | One-way reveal of registered regions, scoped page mounting |
//! | [`metadata`] | Share-preview tags and JSON-LD for an article |
//! | [`contact`] | Contact form with a simulated submission |
//! | [`config`] | `config.toml` loading, validation and merging |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Derivations, Not Steps
//!
//! Filtering and paging are plain functions of their inputs:
//! `filter(records, criteria)` and `Paginator::view(filtered)`. Any UI layer
//! can recompute them on every keystroke without synchronisation. [`Listing`]
//! memoises the filtered view and is the one place where a criteria change
//! resets pagination.
//!
//! ## Permissive Input
//!
//! The engine never rejects reader input. An unknown category or a query that
//! matches nothing yields an empty listing; an unknown article id yields a
//! [`LookupError`] that the page renders as "not found".
//!
//! ## Page-Owned Reveal Controller
//!
//! There is no global observer registry. Each mounted page owns a
//! [`RevealController`] and registers its regions through a [`RevealScope`]
//! guard that releases them when the page goes away. Release also cancels
//! events already queued, so a removed region is never revealed.
//!
//! [`Listing`]: pagination::Listing
//! [`LookupError`]: store::LookupError
//! [`RevealController`]: reveal::RevealController
//! [`RevealScope`]: reveal::RevealScope

pub mod config;
pub mod contact;
pub mod filter;
pub mod metadata;
pub mod output;
pub mod pagination;
pub mod related;
pub mod reveal;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
