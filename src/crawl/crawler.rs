// src/crawl/crawler.rs
// =============================================================================
// The concurrent, depth-bounded crawl.
//
// How one crawl task works (one task per URL):
// 1. depth <= 0: stop right away, nothing is claimed or fetched
// 2. Claim the URL in the VisitedSet; if someone else already has it, stop
// 3. Fetch it; on failure, log + record the error and stop expanding here
// 4. For every link not yet claimed, spawn a child task at depth - 1
// 5. Wait for every child before returning (the whole subtree is done)
//
// The check in step 4 only saves spawning tasks that would lose anyway. The
// claim in step 2 is what actually guarantees a URL is fetched at most once,
// even when two pages link to it at the same moment.
//
// Rust concepts:
// - tokio::task::JoinSet: owns the handles of all spawned children
// - BoxFuture: an async fn can't call itself directly, so the recursive step
//   returns a boxed future
// - Arc: the fetcher and the visited set are shared by every task
// =============================================================================

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::report::{CrawlReport, FailedPage, PageRecord};
use super::visited::VisitedSet;
use crate::error::FetchFailed;
use crate::fetch::Fetcher;

#[derive(Clone)]
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    // Crawls everything reachable from `root` within `depth` levels
    //
    // Parameters:
    //   root: the URL to start from
    //   depth: 1 = only the root, 2 = root + its links, <= 0 = nothing
    //
    // Returns only after every task has finished. Each call starts from an
    // empty VisitedSet.
    pub async fn crawl(&self, root: &str, depth: i32) -> CrawlReport {
        self.crawl_with(root, depth, Arc::new(VisitedSet::new())).await
    }

    // Same as crawl(), but claims URLs in a caller-provided set.
    // URLs already in `visited` are treated as done and never fetched.
    pub async fn crawl_with(
        &self,
        root: &str,
        depth: i32,
        visited: Arc<VisitedSet>,
    ) -> CrawlReport {
        info!(root, depth, "starting crawl");

        let mut report = crawl_page(
            Arc::clone(&self.fetcher),
            Arc::clone(&visited),
            root.to_string(),
            depth,
            0,
        )
        .await;
        report.root = root.to_string();
        report.max_depth = depth;
        report.sort();

        info!(
            root,
            pages = report.pages.len(),
            failures = report.failures.len(),
            claimed = visited.len(),
            "crawl finished"
        );
        report
    }
}

// One crawl task. Returns the report of the subtree rooted at `url`.
fn crawl_page(
    fetcher: Arc<dyn Fetcher>,
    visited: Arc<VisitedSet>,
    url: String,
    depth: i32,
    hops: u32,
) -> BoxFuture<'static, CrawlReport> {
    let span = info_span!("crawl", url = %url, depth);

    async move {
        let mut report = CrawlReport::default();

        if depth <= 0 {
            return report;
        }
        if !visited.try_claim(&url) {
            debug!("already claimed by another task");
            return report;
        }

        let result = match fetcher.fetch(&url).await {
            Ok(result) => result,
            Err(source) => {
                let failure = FetchFailed::new(&url, source);
                warn!(error = %failure, "fetch failed, not expanding");
                report.failures.push(FailedPage {
                    url,
                    hops,
                    error: failure.source.to_string(),
                });
                return report;
            }
        };
        info!(links = result.links.len(), "found");

        let mut children = JoinSet::new();
        for link in &result.links {
            if visited.contains(link) {
                continue;
            }
            debug!(link = %link, "spawning");
            children.spawn(crawl_page(
                Arc::clone(&fetcher),
                Arc::clone(&visited),
                link.clone(),
                depth - 1,
                hops + 1,
            ));
        }

        report.pages.push(PageRecord {
            url,
            hops,
            body: result.body,
            links: result.links,
        });

        while let Some(joined) = children.join_next().await {
            match joined {
                Ok(child) => report.merge(child),
                // A panicking fetcher takes down its own subtree only
                Err(e) => error!(error = %e, "crawl task failed"),
            }
        }

        report
    }
    .instrument(span)
    .boxed()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a JoinSet?
//    - A collection of spawned tasks that you can wait on together
//    - spawn() starts a task, join_next() waits for the next one to finish
//    - Waiting until join_next() returns None means every child is done
//
// 2. Why does crawl_page() return BoxFuture instead of being an async fn?
//    - An async fn that calls itself would have an infinitely sized future
//    - Boxing the future puts it on the heap, so its size is known
//    - .boxed() (from futures::FutureExt) does the boxing for us
//
// 3. Why Arc::clone() before every spawn?
//    - Each spawned task must own its data ('static)
//    - Arc::clone() only bumps a reference count, nothing is copied
//
// 4. What is .instrument(span)?
//    - It attaches a tracing span to the future
//    - Every log line inside the task then carries the url and depth
// -----------------------------------------------------------------------------
