//! Search-frequency accounting.

use std::collections::BTreeMap;

use parking_lot::Mutex;

/// How many entries [`SearchTracker::top_searches`] reports at most.
const TOP_LIMIT: usize = 10;

/// Records every raw query string and reports the most frequent ones.
///
/// Queries are counted verbatim, case and punctuation preserved. The count
/// map is the only engine structure mutated after startup and is shared
/// across concurrently handled requests, so increments are serialized
/// through a mutex; an unsynchronized read-modify-write would lose counts.
#[derive(Debug, Default)]
pub struct SearchTracker {
    counts: Mutex<BTreeMap<String, u64>>,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `query`.
    pub fn track(&self, query: &str) {
        let mut counts = self.counts.lock();
        *counts.entry(query.to_string()).or_insert(0) += 1;
    }

    /// The most frequent queries, count descending, at most ten.
    ///
    /// Equal counts keep the key order of the backing map, so the output is
    /// deterministic.
    pub fn top_searches(&self) -> Vec<(String, u64)> {
        let counts = self.counts.lock();
        let mut entries: Vec<(String, u64)> = counts
            .iter()
            .map(|(term, count)| (term.clone(), *count))
            .collect();
        // Stable sort: ties stay in key order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(TOP_LIMIT);
        entries
    }
}
