// src/fetch/mod.rs
// =============================================================================
// This module defines the "fetch capability" the crawler depends on.
//
// The crawler never talks to the network directly. It only knows about the
// Fetcher trait: give it a URL, get back the page body and the links found on
// that page. Two implementations live here:
// - canned: a fixed map of URL -> page, used by the demo and the tests
// - http: real HTTP GET + HTML link extraction
//
// Rust concepts:
// - Traits: Shared behaviour that different types can implement
// - Trait objects (Arc<dyn Fetcher>): Pick the implementation at runtime
// - thiserror: Derive std::error::Error for our own error enum
// =============================================================================

mod canned;
mod html;
mod http;

pub use canned::CannedFetcher;
pub use html::extract_html_links;
pub use http::HttpFetcher;

use async_trait::async_trait;
use thiserror::Error;

// What one successful fetch produces: the page content and its outgoing links,
// in the order they appeared on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub body: String,
    pub links: Vec<String>,
}

// Every way a single fetch can fail.
//
// None of these are fatal to a crawl: the crawler records them and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The data source has no page for this URL
    #[error("not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status code
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request itself failed (timeout, DNS, TLS, ...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The URL could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

// The fetch capability: maps a URL to its body and outgoing links.
//
// Implementations must be shareable across tasks, because every crawl task
// holds a handle to the same fetcher.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - We want to store fetchers as Arc<dyn Fetcher> and swap them at runtime
//    - Trait objects need a known return type, and async fn hides its future type
//    - async_trait boxes the future for us so the trait stays object-safe
//
// 2. Why Send + Sync on the trait?
//    - tokio may run crawl tasks on different threads
//    - Send = can be moved to another thread, Sync = can be shared between threads
//
// 3. What does #[from] do in the error enum?
//    - It generates From<reqwest::Error> for FetchError
//    - So `?` converts a reqwest error into FetchError::Request automatically
// -----------------------------------------------------------------------------
