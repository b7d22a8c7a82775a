//! Sunovels CLI - query sunovels.com and print the extracted records as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sunovels::config::Config;
use sunovels::scrapers::sunovels::query::{FilterOption, FilterSchema};
use sunovels::{FilterSelection, NovelSource, SunovelsScraper};
use tracing_subscriber::EnvFilter;

/// Sunovels web novel scraper.
#[derive(Parser, Debug)]
#[command(name = "sunovels")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List one catalog page, optionally filtered.
    Popular {
        /// Page number (1-based).
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Category value; repeat for several.
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Status value (Completed, New, Ongoing); empty means all.
        #[arg(long, default_value = "")]
        status: String,
    },

    /// Search novels by title.
    Search {
        /// Title term, sent as given.
        term: String,

        /// Page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a novel's metadata.
    Novel {
        /// Novel path relative to the site, e.g. `novel/123`.
        path: String,
    },

    /// List one page of a novel's chapter index.
    Chapters {
        /// Novel path relative to the site.
        path: String,

        /// Index page (1-based).
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Print a chapter's text as paragraph markup.
    Chapter {
        /// Chapter path relative to the site.
        path: String,
    },

    /// Print the catalog filter schema.
    Filters {
        /// Category option as `label=value`; repeat for several.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("Failed to load configuration")?;
    init_tracing(args.verbose, config.scraping.debug);
    config.validate().context("Invalid configuration")?;

    let scraper = SunovelsScraper::new(&config).context("Failed to create scraper")?;
    tracing::debug!(source = scraper.name(), site = scraper.site(), "scraper ready");

    match args.command {
        Command::Popular {
            page,
            categories,
            status,
        } => {
            let filters = FilterSelection { categories, status };
            let novels = scraper
                .popular_novels(page, Some(&filters))
                .await
                .context("Failed to fetch catalog page")?;
            print_json(&novels)
        }
        Command::Search { term, page } => {
            let novels = scraper
                .search_novels(&term, page)
                .await
                .context("Failed to search novels")?;
            print_json(&novels)
        }
        Command::Novel { path } => {
            let novel = scraper
                .novel_detail(&path)
                .await
                .with_context(|| format!("Failed to fetch novel {path}"))?;
            print_json(&novel)
        }
        Command::Chapters { path, page } => {
            let chapters = scraper
                .chapter_page(&path, page)
                .await
                .with_context(|| format!("Failed to fetch chapter index page {page} of {path}"))?;
            print_json(&chapters)
        }
        Command::Chapter { path } => {
            let text = scraper
                .chapter_content(&path)
                .await
                .with_context(|| format!("Failed to fetch chapter {path}"))?;
            println!("{text}");
            Ok(())
        }
        Command::Filters { categories } => {
            let options = categories
                .iter()
                .map(|raw| parse_category_option(raw))
                .collect::<Result<Vec<_>>>()?;
            print_json(&FilterSchema::new(options))
        }
    }
}

/// Installs the tracing subscriber; `RUST_LOG` wins over flags.
fn init_tracing(verbose: u8, debug: bool) {
    let filter = match (verbose, debug) {
        (0, false) => "sunovels=warn",
        (0, true) | (1, _) => "sunovels=debug",
        _ => "sunovels=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a `label=value` category option; a bare value is its own label.
fn parse_category_option(raw: &str) -> Result<FilterOption> {
    let (label, value) = raw.split_once('=').unwrap_or((raw, raw));
    if value.is_empty() {
        anyhow::bail!("Category option '{}' has an empty value", raw);
    }

    Ok(FilterOption {
        label: label.to_string(),
        value: value.to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
