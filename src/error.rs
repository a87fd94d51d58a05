// src/error.rs
// =============================================================================
// The one error a crawl can run into: fetching some URL failed.
//
// A FetchFailed never stops the crawl. The task that hit it logs it, records
// it in its report and simply does not expand that page.
// =============================================================================

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
#[error("failed to fetch {url}: {source}")]
pub struct FetchFailed {
    pub url: String,
    #[source]
    pub source: FetchError,
}

impl FetchFailed {
    pub fn new(url: &str, source: FetchError) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }
}
