// src/fetch/canned.rs
// =============================================================================
// A deterministic fetcher that serves pages from a fixed map.
//
// Any URL that is not in the map fails with "not found: <url>". This is what
// the demo command crawls, and what the crawler tests use so they never touch
// the network.
//
// Fixtures can also be loaded from JSON:
//
//   {
//     "https://example.com/": { "body": "Home", "links": ["https://example.com/a"] },
//     "https://example.com/a": { "body": "A", "links": [] }
//   }
// =============================================================================

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{FetchError, FetchResult, Fetcher};

// One page in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedPage {
    pub body: String,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CannedFetcher {
    pages: HashMap<String, CannedPage>,
}

impl CannedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds (or replaces) a page, builder style
    pub fn insert(mut self, url: &str, body: &str, links: &[&str]) -> Self {
        self.pages.insert(
            url.to_string(),
            CannedPage {
                body: body.to_string(),
                links: links.iter().map(|link| link.to_string()).collect(),
            },
        );
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid fixture JSON")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load fixture {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    // The Go tour's fake site: four pages reachable from https://golang.org/
    //
    // https://golang.org/cmd/ is linked from two pages but has no entry, so
    // crawling it always fails with "not found".
    pub fn go_tour() -> Self {
        Self::new()
            .insert(
                "https://golang.org/",
                "The Go Programming Language",
                &["https://golang.org/pkg/", "https://golang.org/cmd/"],
            )
            .insert(
                "https://golang.org/pkg/",
                "Packages",
                &[
                    "https://golang.org/",
                    "https://golang.org/cmd/",
                    "https://golang.org/pkg/fmt/",
                    "https://golang.org/pkg/os/",
                ],
            )
            .insert(
                "https://golang.org/pkg/fmt/",
                "Package fmt",
                &["https://golang.org/", "https://golang.org/pkg/"],
            )
            .insert(
                "https://golang.org/pkg/os/",
                "Package os",
                &["https://golang.org/", "https://golang.org/pkg/"],
            )
    }
}

#[async_trait]
impl Fetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        match self.pages.get(url) {
            Some(page) => Ok(FetchResult {
                body: page.body.clone(),
                links: page.links.clone(),
            }),
            None => Err(FetchError::NotFound(url.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_page() {
        let fetcher = CannedFetcher::go_tour();
        let result = fetcher.fetch("https://golang.org/pkg/fmt/").await.unwrap();
        assert_eq!(result.body, "Package fmt");
        assert_eq!(
            result.links,
            vec!["https://golang.org/", "https://golang.org/pkg/"]
        );
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let fetcher = CannedFetcher::go_tour();
        let err = fetcher.fetch("https://golang.org/cmd/").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
        assert_eq!(err.to_string(), "not found: https://golang.org/cmd/");
    }

    #[tokio::test]
    async fn test_from_json() {
        let json = r#"{
            "https://example.com/": { "body": "Home", "links": ["https://example.com/a"] },
            "https://example.com/a": { "body": "A" }
        }"#;
        let fetcher = CannedFetcher::from_json(json).unwrap();
        assert_eq!(fetcher.len(), 2);

        let page = fetcher.fetch("https://example.com/a").await.unwrap();
        assert_eq!(page.body, "A");
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CannedFetcher::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_from_missing_path() {
        let err = CannedFetcher::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read fixture"));
    }
}
