use clap::{Parser, Subcommand};
use blog_catalog::config::{self, SiteConfig};
use blog_catalog::filter::{self, Category};
use blog_catalog::metadata::SharePreview;
use blog_catalog::pagination::Listing;
use blog_catalog::related::related;
use blog_catalog::store::ContentStore;
use blog_catalog::output;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(about = "Browse and check the blog catalog of a marketing site")]
#[command(long_about = "\
Browse and check the blog catalog of a marketing site

The content directory holds the article list and optional site config:

  content/
  ├── config.toml      # Site config (optional, sparse overrides)
  └── posts.toml       # [[posts]] tables, in display order

Listings filter by category (exact match) and by a search term matched
case-insensitively against titles and excerpts.

Run 'blog-catalog gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List articles, filtered and paginated like the blog page
    List {
        /// Search term matched against titles and excerpts
        #[arg(long, short, default_value = "")]
        query: String,
        /// Category to show ("All" for every category)
        #[arg(long, short, default_value = "All")]
        category: String,
        /// Number of pages to reveal ("Load More" clicks + 1)
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show one article with its related posts
    Show {
        /// Article id, as passed in the detail page's ?id= parameter
        id: String,
    },
    /// Print share-preview metadata and JSON-LD for an article
    Share {
        /// Article id, as passed in the detail page's ?id= parameter
        id: String,
    },
    /// List the categories offered by the category filter
    Categories,
    /// Show the latest posts as on the home page
    Recent,
    /// Validate the content directory and config
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let source = cli.source;

    match cli.command {
        Command::List {
            query,
            category,
            pages,
        } => {
            let (store, site_config) = load_content(&source)?;
            let mut listing = Listing::new(&store, site_config.catalog.page_size);
            listing.set_query(query);
            listing.set_category(category);
            for _ in 1..pages.max(1) {
                listing.load_more();
            }
            output::print_listing(&listing.page(), listing.criteria(), &site_config.site);
        }
        Command::Show { id } => {
            let (store, site_config) = load_content(&source)?;
            match store.resolve_param(Some(&id)) {
                Ok(article) => {
                    let rel = related(&store, article, site_config.catalog.related_limit);
                    output::print_article(article, &rel, &site_config.site);
                }
                Err(err) => output::print_not_found(&err, &site_config.site),
            }
        }
        Command::Share { id } => {
            let (store, site_config) = load_content(&source)?;
            match store.resolve_param(Some(&id)) {
                Ok(article) => {
                    output::print_share(&SharePreview::for_article(article, &site_config.site))
                }
                Err(err) => output::print_not_found(&err, &site_config.site),
            }
        }
        Command::Categories => {
            let (store, _) = load_content(&source)?;
            output::print_categories(&filter::categories(store.all()), &Category::All);
        }
        Command::Recent => {
            let (store, site_config) = load_content(&source)?;
            output::print_preview(
                store.recent(site_config.catalog.preview_count),
                &site_config.site,
            );
        }
        Command::Check => {
            println!("==> Checking {}", source.display());
            let (store, site_config) = load_content(&source)?;
            output::print_check(&store, &site_config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_content(source: &Path) -> Result<(ContentStore, SiteConfig), Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let store = ContentStore::load(source)?;
    Ok((store, site_config))
}
