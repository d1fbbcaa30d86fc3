//! End-to-end checks against `fixtures/content/`, through the public API only.

use blog_catalog::config::{self, SiteConfig};
use blog_catalog::filter::{self, Category, FilterCriteria};
use blog_catalog::metadata::SharePreview;
use blog_catalog::pagination::Listing;
use blog_catalog::related::related;
use blog_catalog::reveal::{RevealController, RevealState, VisibilityEvent, stagger_delay};
use blog_catalog::store::{ContentStore, LookupError};
use blog_catalog::types::{ArticleId, ArticleRecord};
use std::path::PathBuf;
use std::time::Duration;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn load() -> (ContentStore, SiteConfig) {
    let dir = fixtures();
    let store = ContentStore::load(&dir).expect("fixture posts load");
    let config = config::load_config(&dir).expect("fixture config loads");
    (store, config)
}

fn ids(records: &[&ArticleRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id.0).collect()
}

#[test]
fn fixture_config_overrides_page_size_only() {
    let (_, config) = load();
    assert_eq!(config.catalog.page_size, 3);
    assert_eq!(config.catalog.related_limit, 3);
    assert_eq!(config.reveal.threshold, 0.1);
}

#[test]
fn categories_in_first_seen_order() {
    let (store, _) = load();
    let names: Vec<String> = filter::categories(store.all())
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["All", "AI Automation", "Web Design", "Business Growth"]
    );
}

#[test]
fn category_listing_pages_with_load_more() {
    let (store, config) = load();
    let mut listing = Listing::new(&store, config.catalog.page_size);
    listing.set_category("AI Automation");

    let page = listing.page();
    assert_eq!(ids(&page.items), vec![1, 3, 6]);
    assert_eq!(page.total, 4);
    assert!(page.has_more);

    listing.load_more();
    let page = listing.page();
    assert_eq!(ids(&page.items), vec![1, 3, 6, 8]);
    assert!(!page.has_more);

    listing.set_category("Web Design");
    assert_eq!(listing.paginator().visible_count(), 3);
    assert_eq!(ids(&listing.page().items), vec![2, 4, 7]);
}

#[test]
fn search_is_case_insensitive_over_title_and_excerpt() {
    let (store, _) = load();
    let lower = filter::filter(store.all(), &FilterCriteria::new("automat", Category::All));
    let upper = filter::filter(store.all(), &FilterCriteria::new("AUTOMAT", Category::All));
    assert_eq!(ids(&lower), vec![1, 3, 8]);
    assert_eq!(ids(&lower), ids(&upper));
}

#[test]
fn unmatched_search_is_empty_not_error() {
    let (store, config) = load();
    let mut listing = Listing::new(&store, config.catalog.page_size);
    listing.set_query("quantum");
    let page = listing.page();
    assert!(page.is_empty());
    assert!(!page.has_more);
}

#[test]
fn related_posts_for_detail_page() {
    let (store, config) = load();
    let focal = store.resolve_param(Some("1")).unwrap();
    let rel = related(&store, focal, config.catalog.related_limit);
    assert_eq!(ids(&rel), vec![3, 6, 8]);

    let lone = store.by_id(ArticleId(5)).unwrap();
    assert!(related(&store, lone, config.catalog.related_limit).is_empty());
}

#[test]
fn unknown_id_is_not_found() {
    let (store, _) = load();
    assert_eq!(
        store.resolve_param(Some("9999")),
        Err(LookupError::NotFound(ArticleId(9999)))
    );
    assert_eq!(store.resolve_param(None), Err(LookupError::MissingId));
}

#[test]
fn home_page_preview_is_first_three() {
    let (store, config) = load();
    let recent: Vec<i64> = store
        .recent(config.catalog.preview_count)
        .iter()
        .map(|r| r.id.0)
        .collect();
    assert_eq!(recent, vec![1, 2, 3]);
}

#[test]
fn share_preview_parses_long_form_date() {
    let (store, config) = load();
    let article = store.by_id(ArticleId(3)).unwrap();
    let preview = SharePreview::for_article(article, &config.site);
    assert_eq!(
        preview.share_title,
        "Automating Invoices with No-Code Tools | ProbSolv Blog"
    );
    assert_eq!(preview.json_ld["datePublished"], "2024-06-20T00:00:00.000Z");
}

#[test]
fn content_renders_to_html() {
    let (store, _) = load();
    let html = store.by_id(ArticleId(2)).unwrap().content_html();
    assert!(html.contains("<h2>Designing Landing Pages That Convert</h2>"));
}

#[test]
fn listing_page_reveals_cards_as_they_scroll_in() {
    let (store, config) = load();
    let listing = Listing::new(&store, config.catalog.page_size);
    let page = listing.page();

    let mut controller: RevealController<ArticleId> =
        RevealController::new(config.reveal.threshold);
    let mut revealed = Vec::new();
    {
        let mut mounted = controller.mount();
        let handles: Vec<_> = page.items.iter().map(|a| mounted.register(a.id)).collect();

        // First card scrolls in; the second is only peeking.
        mounted.notify(VisibilityEvent::new(handles[0], 0.6));
        mounted.notify(VisibilityEvent::new(handles[1], 0.05));
        mounted.dispatch(|_, id| revealed.push(*id));
        assert_eq!(mounted.state(handles[0]), Some(RevealState::Visible));
        assert_eq!(mounted.state(handles[1]), Some(RevealState::Hidden));

        // Scrolling back out does not hide a revealed card.
        mounted.notify(VisibilityEvent::new(handles[0], 0.0));
        mounted.notify(VisibilityEvent::new(handles[1], 0.1));
        mounted.dispatch(|_, id| revealed.push(*id));
        assert_eq!(mounted.state(handles[0]), Some(RevealState::Visible));

        // Queued just before the page goes away: must never fire.
        mounted.notify(VisibilityEvent::new(handles[2], 1.0));
    }
    assert_eq!(controller.dispatch(|_, id| revealed.push(*id)), 0);
    assert_eq!(revealed, vec![ArticleId(1), ArticleId(2)]);

    let step = config.reveal.stagger_step();
    let delays: Vec<Duration> = (0..5)
        .map(|i| stagger_delay(i, config.catalog.page_size, step))
        .collect();
    assert_eq!(
        delays,
        vec![
            Duration::ZERO,
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(200),
            Duration::from_millis(200),
        ]
    );
}
