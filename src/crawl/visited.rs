// src/crawl/visited.rs
// =============================================================================
// The set of URLs that have already been claimed by some crawl task.
//
// "Claiming" a URL means: check whether anybody has it already, and if not,
// take it. Both halves happen under ONE lock acquisition, so when many tasks
// race for the same URL exactly one of them wins and gets to fetch it.
//
// URLs are only ever added, never removed. A fresh VisitedSet is created for
// every crawl, so separate crawls never see each other's URLs.
//
// The lock is a std Mutex, not a tokio one: it is held for a single HashSet
// operation and never across an .await.
// =============================================================================

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct VisitedSet {
    entries: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Atomically claims a URL
    //
    // Returns:
    //   true  = nobody had it; the caller now owns it and should fetch it
    //   false = another caller got there first; do nothing
    pub fn try_claim(&self, url: &str) -> bool {
        let mut entries = self.lock();
        if entries.contains(url) {
            return false;
        }
        entries.insert(url.to_string())
    }

    // Whether a URL has been claimed. Only a hint: the answer can be stale by
    // the time the caller acts on it, so it never replaces try_claim()
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock can't leave a HashSet half-inserted,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Mutex around the HashSet?
//    - Many tasks read and write the set at the same time
//    - A Mutex lets only one of them touch it at a time
//    - lock() returns a guard; the lock is released when the guard is dropped
//
// 2. Why not contains() followed by insert()?
//    - Two tasks could both see "not there" before either inserts
//    - Then both would fetch the same URL
//    - try_claim() does both steps while holding the lock once
//
// 3. std::sync::Mutex vs tokio::sync::Mutex?
//    - tokio's Mutex can be held across .await, std's should not be
//    - We never await while holding this lock, so the cheaper std one is fine
// -----------------------------------------------------------------------------
