//! Softly-bounded min-heap with tie-fair eviction

use crate::error::{HeapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Index;
use tracing::{debug, trace};

/// A min-priority collection of `(score, item)` entries with a soft size
/// limit.
///
/// The limit is "soft" or "fair": the heap tries to keep at most
/// `soft_limit` entries, but refuses to evict only *some* of a group of
/// entries tied at the current minimum score. When a push takes the heap
/// over the limit, the whole tied-minimum group is evicted if doing so still
/// leaves at least `soft_limit` entries; otherwise nothing is evicted and
/// the heap stays over-size. Across repeated pushes this means the heap
/// grows one entry at a time past the limit until the tied group becomes
/// evictable as a whole, at which point it is removed in a single push.
///
/// Entries are kept in a binary min-heap ordered by the `(score, item)`
/// tuple, so items tie-break score collisions. This is why `T: Ord` is
/// required: with equal scores, the items themselves are compared to keep
/// the internal ordering deterministic. Insertion order is not preserved
/// among same-scored entries.
///
/// Scores can be any `Ord` type; for `f64` priorities use [`Score`], which
/// provides the total order floats lack natively.
///
/// [`Score`]: crate::Score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairLimitedHeap<S, T> {
    soft_limit: usize,
    data: Vec<(S, T)>,
}

impl<S: Ord, T: Ord> FairLimitedHeap<S, T> {
    /// Create an empty heap targeting at most `soft_limit` entries.
    ///
    /// # Panics
    ///
    /// Panics if `soft_limit` is zero.
    pub fn new(soft_limit: usize) -> Self {
        assert!(soft_limit > 0, "soft_limit must be positive");
        Self {
            soft_limit,
            data: Vec::new(),
        }
    }

    /// Create a heap and fill it from `initial`, pushing each `(item, score)`
    /// pair in iteration order. The fairness rule applies during filling, so
    /// the result is identical to constructing an empty heap and pushing the
    /// same pairs one by one.
    pub fn with_initial<I>(soft_limit: usize, initial: I) -> Self
    where
        I: IntoIterator<Item = (T, S)>,
    {
        let mut heap = Self::new(soft_limit);
        for (item, score) in initial {
            heap.push(item, score);
        }
        heap
    }

    /// Insert an entry, then apply the fair eviction rule if the heap has
    /// grown past its soft limit.
    ///
    /// Eviction scans the front of the backing array for the run of entries
    /// sharing the minimum entry's exact score (no epsilon tolerance). The
    /// run is evicted only if removing all of it leaves at least
    /// `soft_limit` entries. One consequence to be aware of: a heap in
    /// which *every* entry shares one score never shrinks through this
    /// mechanism, no matter how large it grows.
    pub fn push(&mut self, item: T, score: S) {
        self.data.push((score, item));
        self.sift_up(self.data.len() - 1);
        if self.data.len() <= self.soft_limit {
            return;
        }

        // Run-length of entries at the front of the array tied with the
        // minimum score. Exact equality, even if scores differ by a hair.
        let mut run = 1;
        while run < self.data.len() && self.data[run].0 == self.data[0].0 {
            run += 1;
        }

        if self.data.len() - run >= self.soft_limit {
            debug!(
                "over soft limit {}: evicting {} tied minimum entries",
                self.soft_limit, run
            );
            for _ in 0..run {
                self.pop_min();
            }
        } else {
            trace!(
                "over soft limit {} with {} entries, but the {} tied minimums cannot be evicted together",
                self.soft_limit,
                self.data.len(),
                run
            );
        }
    }

    /// Remove and return the minimum-scored item.
    pub fn pop(&mut self) -> Result<T> {
        self.pop_min().map(|(_, item)| item).ok_or(HeapError::Empty)
    }

    /// Remove and return the minimum entry as a `(score, item)` pair.
    pub fn pop_with_score(&mut self) -> Result<(S, T)> {
        self.pop_min().ok_or(HeapError::Empty)
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<&(S, T)> {
        self.data.first()
    }

    /// All items, ascending by `(score, item)`. Does not mutate the heap.
    pub fn sorted_items(&self) -> Vec<&T> {
        self.sorted_entries().into_iter().map(|(_, item)| item).collect()
    }

    /// All `(score, item)` entries, ascending. Does not mutate the heap.
    pub fn sorted_entries(&self) -> Vec<(&S, &T)> {
        let mut entries: Vec<&(S, T)> = self.data.iter().collect();
        entries.sort();
        entries.into_iter().map(|(score, item)| (score, item)).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn soft_limit(&self) -> usize {
        self.soft_limit
    }

    /// Iterate over entries in the heap's internal array order.
    ///
    /// This is NOT sorted order; use [`sorted_entries`] for that.
    ///
    /// [`sorted_entries`]: FairLimitedHeap::sorted_entries
    pub fn iter(&self) -> std::slice::Iter<'_, (S, T)> {
        self.data.iter()
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos] < self.data[parent] {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.data[right] < self.data[left] {
                child = right;
            }
            if self.data[child] < self.data[pos] {
                self.data.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }

    fn pop_min(&mut self) -> Option<(S, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let entry = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        entry
    }
}

/// Strict representation equality: both backing arrays must match
/// element-for-element in the same order, not merely hold the same entries.
/// The soft limit does not participate.
impl<S: PartialEq, T: PartialEq> PartialEq for FairLimitedHeap<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<S: Eq, T: Eq> Eq for FairLimitedHeap<S, T> {}

/// Positional access to the *item* at a raw heap-array index.
///
/// Exposes internal layout: indices follow the backing array, not priority
/// order. There is no `IndexMut`; the only mutation paths are `push` and
/// `pop`.
impl<S, T> Index<usize> for FairLimitedHeap<S, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index].1
    }
}

impl<'a, S, T> IntoIterator for &'a FairLimitedHeap<S, T> {
    type Item = &'a (S, T);
    type IntoIter = std::slice::Iter<'a, (S, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<S: Display, T> Display for FairLimitedHeap<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.data.first(), self.data.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "< FairLimitedHeap with {} entries having priorities from {} to {} >",
                self.data.len(),
                first.0,
                last.0
            ),
            _ => write!(f, "< FairLimitedHeap, empty >"),
        }
    }
}
