// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Build the right fetcher for the subcommand and run one crawl
// 4. Print the report (text or JSON) on stdout
// 5. Exit with proper code (0 = every fetch worked, 1 = some failed, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - concurrent crawl + visited set
mod error; // src/error.rs - the FetchFailed error
mod fetch; // src/fetch/ - the fetch capability and its implementations
mod logging; // src/logging.rs - tracing setup

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Commands, CrawlOptions};
use crawl::{CrawlReport, Crawler};
use fetch::{CannedFetcher, Fetcher, HttpFetcher};
use tracing::info;

const DEMO_ROOT: &str = "https://golang.org/";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every page fetched
//   Ok(1) = at least one fetch failed
//   Err = unexpected error (bad fixture, bad URL, logging setup)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let (fetcher, root, options): (Arc<dyn Fetcher>, String, CrawlOptions) = match cli.command {
        Commands::Demo { options } => (
            Arc::new(CannedFetcher::go_tour()),
            DEMO_ROOT.to_string(),
            options,
        ),
        Commands::Fixture {
            path,
            root,
            options,
        } => {
            let fetcher = CannedFetcher::from_path(&path)?;
            if fetcher.is_empty() {
                bail!("fixture {} has no pages", path.display());
            }
            info!(pages = fetcher.len(), path = %path.display(), "fixture loaded");
            (Arc::new(fetcher), root, options)
        }
        Commands::Site {
            website_url,
            allow_external,
            options,
        } => {
            let mut fetcher = HttpFetcher::new()?;
            if !allow_external {
                fetcher = fetcher.same_host_as(&website_url)?;
            }
            (Arc::new(fetcher), website_url, options)
        }
    };

    let report = Crawler::new(fetcher).crawl(&root, options.max_depth).await;
    print_report(&report, options.json)?;

    if report.is_clean() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_text(report);
    }
    Ok(())
}

fn print_text(report: &CrawlReport) {
    for page in &report.pages {
        println!("found: {} {:?}", page.url, truncate(&page.body, 60));
    }
    for failure in &report.failures {
        println!("{}", failure.error);
    }

    println!();
    println!("Summary for {} (max depth {}):", report.root, report.max_depth);
    println!("   Attempted: {}", report.fetched());
    println!("   Fetched:   {}", report.pages.len());
    println!("   Failed:    {}", report.failures.len());
}

// Real pages can be huge; keep the text output to one line per page
fn truncate(body: &str, max_chars: usize) -> String {
    let line = body.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > max_chars {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Arc<dyn Fetcher>?
//    - dyn Fetcher = "some type that implements Fetcher", chosen at runtime
//    - Arc = shared ownership that works across threads
//    - Each subcommand builds a different fetcher, the crawler doesn't care which
//
// 2. Why do logs go to stderr and results to stdout?
//    - So `link-crawler demo --json > report.json` only captures the report
//
// 3. What does {:#} do when printing an anyhow error?
//    - It prints the whole chain of context, e.g.
//      "failed to load fixture site.json: invalid fixture JSON: ..."
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_body() {
        assert_eq!(truncate("Package fmt", 60), "Package fmt");
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(100);
        assert_eq!(truncate(&body, 10), format!("{}...", "x".repeat(10)));
    }

    #[test]
    fn test_truncate_skips_blank_lines() {
        assert_eq!(truncate("\n\n  <html>\n<body>", 60), "<html>");
    }

    #[tokio::test]
    async fn test_demo_report_as_json() {
        let report = Crawler::new(Arc::new(CannedFetcher::go_tour()))
            .crawl(DEMO_ROOT, 4)
            .await;
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(&report).unwrap()).unwrap();

        assert_eq!(json["root"], DEMO_ROOT);
        assert_eq!(json["max_depth"], 4);
        assert_eq!(json["pages"].as_array().unwrap().len(), 4);
        assert_eq!(json["failures"][0]["error"], "not found: https://golang.org/cmd/");
    }
}
