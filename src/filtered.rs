//! Float-scored heap that drops NaN entries on the way in

use crate::error::Result;
use crate::heap::FairLimitedHeap;
use crate::score::Score;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Index;
use tracing::trace;

/// A [`FairLimitedHeap`] over `f64` scores that silently refuses to push
/// entries whose score is NaN.
///
/// Everything except `push` delegates to the base heap. A NaN score makes
/// the push a no-op: nothing is inserted, no eviction check runs, and the
/// caller is not told. Infinities are ordinary scores and pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NanFilteringHeap<T> {
    inner: FairLimitedHeap<Score, T>,
}

impl<T: Ord> NanFilteringHeap<T> {
    /// Create an empty heap targeting at most `soft_limit` entries.
    ///
    /// # Panics
    ///
    /// Panics if `soft_limit` is zero.
    pub fn new(soft_limit: usize) -> Self {
        Self {
            inner: FairLimitedHeap::new(soft_limit),
        }
    }

    /// Create a heap and fill it from `(item, score)` pairs in iteration
    /// order. NaN-scored pairs are dropped, the same as with [`push`].
    ///
    /// [`push`]: NanFilteringHeap::push
    pub fn with_initial<I>(soft_limit: usize, initial: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut heap = Self::new(soft_limit);
        for (item, score) in initial {
            heap.push(item, score);
        }
        heap
    }

    /// Insert an entry unless its score is NaN.
    pub fn push(&mut self, item: T, score: f64) {
        if score.is_nan() {
            trace!("discarding push with NaN score");
            return;
        }
        self.inner.push(item, Score(score));
    }

    /// Remove and return the minimum-scored item.
    pub fn pop(&mut self) -> Result<T> {
        self.inner.pop()
    }

    /// Remove and return the minimum entry as a `(score, item)` pair.
    pub fn pop_with_score(&mut self) -> Result<(f64, T)> {
        let (score, item) = self.inner.pop_with_score()?;
        Ok((score.into(), item))
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<&(Score, T)> {
        self.inner.peek()
    }

    /// All items, ascending by `(score, item)`. Does not mutate the heap.
    pub fn sorted_items(&self) -> Vec<&T> {
        self.inner.sorted_items()
    }

    /// All `(score, item)` entries, ascending. Does not mutate the heap.
    pub fn sorted_entries(&self) -> Vec<(f64, &T)> {
        self.inner
            .sorted_entries()
            .into_iter()
            .map(|(score, item)| (score.0, item))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn soft_limit(&self) -> usize {
        self.inner.soft_limit()
    }

    /// Iterate over entries in internal array order (not sorted order).
    pub fn iter(&self) -> std::slice::Iter<'_, (Score, T)> {
        self.inner.iter()
    }

    /// Read-only access to the underlying heap.
    pub fn inner(&self) -> &FairLimitedHeap<Score, T> {
        &self.inner
    }
}

impl<T: Eq> Eq for NanFilteringHeap<T> {}

impl<T> Index<usize> for NanFilteringHeap<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<'a, T> IntoIterator for &'a NanFilteringHeap<T> {
    type Item = &'a (Score, T);
    type IntoIter = std::slice::Iter<'a, (Score, T)>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<T> Display for NanFilteringHeap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
