// src/fetch/html.rs
// =============================================================================
// This module extracts the outgoing links of an HTML page.
//
// The HTTP fetcher uses it to turn a downloaded page into the "links" half of
// a FetchResult. Links come back absolute, in document order, without
// fragments and without duplicates.
//
// We use:
// - scraper: parses HTML into a DOM and lets us query it with CSS selectors
// - url: resolves relative hrefs against the page URL, compares hosts
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

// Extracts all crawlable links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL of the page (for resolving relative links)
//   host: when Some, only links on this exact host are kept
//
// Example:
//   html = "<a href='/docs#intro'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_html_links(html: &str, base_url: &str, host: Option<&str>) -> Vec<String> {
    let mut links = Vec::new();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            debug!(base_url, error = %e, "invalid base URL, no links extracted");
            return links;
        }
    };

    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_link(&base, href) else {
            continue;
        };
        if !is_crawlable(&url, host) {
            continue;
        }

        let url = url.to_string();
        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    links
}

// Resolves a possibly-relative href to an absolute URL without its fragment
//
// Anchors and non-navigational schemes are skipped before parsing:
//   "#section", "mailto:...", "tel:...", "javascript:..." -> None
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // join() handles both absolute hrefs and relative ones
    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}

// Only http(s) links are crawlable, optionally restricted to one host.
// host_str() rather than domain() so IP hosts (local test servers) match too.
fn is_crawlable(url: &Url, host: Option<&str>) -> bool {
    let http = matches!(url.scheme(), "http" | "https");
    match host {
        Some(host) => http && url.host_str() == Some(host),
        None => http,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. What does base.join(href) do?
//    - Resolves href the way a browser would
//    - "https://example.com/page/" + "../about" = "https://example.com/about"
//    - An absolute href simply replaces the base
//
// 3. What is let-else?
//    - let Some(x) = value else { continue; };
//    - Binds x if the pattern matches, otherwise runs the else block
//    - The else block must leave the current scope (return, continue, ...)
// -----------------------------------------------------------------------------
