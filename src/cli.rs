// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Three ways to run a crawl, one per data source:
// - demo:    the built-in fake Go website, no network needed
// - fixture: a fake website loaded from a JSON file
// - site:    a real website over HTTP
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "link-crawler",
    version = "0.1.0",
    about = "Crawl a website in parallel, fetching every page at most once",
    long_about = "link-crawler follows links from a starting URL up to a maximum depth, \
                  crawling pages concurrently and never fetching the same URL twice."
)]
pub struct Cli {
    /// Show debug logs (claims, skips, spawned tasks) on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// Options every subcommand shares
#[derive(Args, Debug, Clone, Copy)]
pub struct CrawlOptions {
    /// Maximum crawl depth
    ///
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + all pages it links to
    /// Depth 0 or less = nothing is fetched
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub max_depth: i32,

    /// Output the crawl report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl the built-in fake Go website starting at https://golang.org/
    ///
    /// Example: link-crawler demo --max-depth 4
    Demo {
        #[command(flatten)]
        options: CrawlOptions,
    },

    /// Crawl a fake website described by a JSON file
    ///
    /// The file maps each URL to { "body": "...", "links": [...] }.
    ///
    /// Example: link-crawler fixture site.json https://example.com/
    Fixture {
        /// Path to the JSON fixture
        path: PathBuf,

        /// URL to start crawling from
        root: String,

        #[command(flatten)]
        options: CrawlOptions,
    },

    /// Crawl a real website over HTTP
    ///
    /// Example: link-crawler site https://example.com --max-depth 2
    Site {
        /// Website URL to start crawling from
        website_url: String,

        /// Also follow links to other hosts
        #[arg(long)]
        allow_external: bool,

        #[command(flatten)]
        options: CrawlOptions,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[command(flatten)] do?
//    - It copies the fields of CrawlOptions into each subcommand
//    - So every subcommand gets --max-depth and --json without repeating them
//
// 2. Why i32 for max_depth instead of usize?
//    - A depth of 0 or less means "crawl nothing", so negatives are valid
//    - allow_negative_numbers stops clap from reading "-1" as a flag
//
// 3. What is global = true on --verbose?
//    - The flag is accepted before or after the subcommand name
// -----------------------------------------------------------------------------
