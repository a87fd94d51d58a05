// src/fetch/http.rs
// =============================================================================
// The real fetcher: downloads a page over HTTP and extracts its links.
//
// How it works:
// 1. Validate the URL
// 2. GET it with a shared reqwest client (10 s timeout, up to 5 redirects)
// 3. Treat any non-2xx status as a failed fetch
// 4. Body = response text, links = <a href> targets resolved against the page
//
// Optionally the fetcher only reports links on the same host as the page the
// crawl started from, so a site crawl never wanders off to other websites.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{extract_html_links, FetchError, FetchResult, Fetcher};

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    // When set, links to other hosts are dropped from every FetchResult
    host: Option<String>,
}

impl HttpFetcher {
    // Creates a fetcher that follows links to any host
    pub fn new() -> Result<Self, FetchError> {
        // One client for the whole crawl (connection pooling)
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, host: None })
    }

    // Restricts reported links to the host of `root`
    pub fn same_host_as(mut self, root: &str) -> Result<Self, FetchError> {
        let url = parse_url(root)?;
        let host = url.host_str().ok_or_else(|| FetchError::InvalidUrl {
            url: root.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        self.host = Some(host.to_string());
        Ok(self)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        parse_url(url)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Relative links resolve against where redirects ended up, not the request
        let final_url = response.url().to_string();
        let body = response.text().await?;
        let links = extract_html_links(&body, &final_url, self.host.as_deref());
        debug!(url, final_url = %final_url, links = links.len(), "page downloaded");

        Ok(FetchResult { body, links })
    }
}

fn parse_url(url: &str) -> Result<Url, FetchError> {
    Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why read response.url() before response.text()?
//    - text() consumes the response, so we can't ask it anything afterwards
//    - After redirects, response.url() is where the page really lives
//    - Relative links must be resolved against that URL
//
// 2. What does the `?` after .send().await do?
//    - send() returns Result<Response, reqwest::Error>
//    - `?` returns early on Err, converting it with From into FetchError
//
// 3. Why is same_host_as() taking `mut self`?
//    - It's a builder method: it takes the fetcher, changes it, gives it back
//    - HttpFetcher::new()?.same_host_as(url)? reads top to bottom
// -----------------------------------------------------------------------------
