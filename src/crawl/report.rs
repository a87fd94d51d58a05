// src/crawl/report.rs
// =============================================================================
// What a crawl hands back to its caller.
//
// Every crawl task builds the report for its own subtree and merges in the
// reports of the children it joined, so the root task ends up holding the
// whole crawl without any shared result buffer.
// =============================================================================

use serde::{Deserialize, Serialize};

// A page that was fetched successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    // Distance from the root along the path that claimed this page
    pub hops: u32,
    pub body: String,
    pub links: Vec<String>,
}

// A page whose fetch failed; its links were never discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedPage {
    pub url: String,
    pub hops: u32,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlReport {
    pub root: String,
    pub max_depth: i32,
    pub pages: Vec<PageRecord>,
    pub failures: Vec<FailedPage>,
}

impl CrawlReport {
    // Number of fetch attempts, successful or not
    pub fn fetched(&self) -> usize {
        self.pages.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn merge(&mut self, child: CrawlReport) {
        self.pages.extend(child.pages);
        self.failures.extend(child.failures);
    }

    // Completion order is arbitrary; sort by (hops, url) for stable output
    pub(crate) fn sort(&mut self) {
        self.pages.sort_by(|a, b| (a.hops, &a.url).cmp(&(b.hops, &b.url)));
        self.failures.sort_by(|a, b| (a.hops, &a.url).cmp(&(b.hops, &b.url)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, hops: u32) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            hops,
            body: String::new(),
            links: Vec::new(),
        }
    }

    #[test]
    fn test_merge_and_sort() {
        let mut report = CrawlReport {
            pages: vec![page("b", 1), page("root", 0)],
            ..Default::default()
        };
        report.merge(CrawlReport {
            pages: vec![page("a", 1)],
            failures: vec![FailedPage {
                url: "c".to_string(),
                hops: 2,
                error: "not found: c".to_string(),
            }],
            ..Default::default()
        });
        report.sort();

        let urls: Vec<_> = report.pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["root", "a", "b"]);
        assert_eq!(report.fetched(), 4);
        assert!(!report.is_clean());
        assert_eq!(report.pages[1].hops, 1);
    }
}
