//! Total-order wrapper for float scores

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// An `f64` priority score with a total order.
///
/// `f64` itself is only `PartialOrd`, so it cannot key a heap directly. This
/// wrapper orders via [`f64::total_cmp`], which places NaN after positive
/// infinity instead of making comparisons fall apart. That keeps the heap
/// invariant intact even if a NaN slips into a [`FairLimitedHeap`] used
/// without the filtering front-end.
///
/// [`FairLimitedHeap`]: crate::FairLimitedHeap
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Score(pub f64);

impl Score {
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Score {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Score> for f64 {
    fn from(value: Score) -> Self {
        value.0
    }
}
