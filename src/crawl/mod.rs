// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - One concurrent task per page, all running in parallel
// - Depth limit (depth 1 = just the starting page)
// - Every URL fetched at most once, no matter how many pages link to it
// - A crawl only returns after every task it started has finished
//
// Submodules:
// - visited: the thread-safe "already claimed" set
// - crawler: the recursive task driver
// - report: what a crawl returns
// =============================================================================

mod crawler;
mod report;
mod visited;

pub use crawler::Crawler;
pub use report::CrawlReport;
