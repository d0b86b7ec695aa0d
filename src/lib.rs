//! fair_heap - softly-bounded min-priority collections with tie-fair eviction
//!
//! A `FairLimitedHeap` keeps roughly `soft_limit` entries, but will break the
//! limit rather than evict only some of a group of entries tied at the lowest
//! score. The heap grows past the limit until the whole tied-minimum group
//! can be evicted together, then removes it in one step.
//!
//! `NanFilteringHeap` layers NaN rejection over the base heap for `f64`
//! scores; `Score` supplies the total order that raw floats lack.

mod error;
mod filtered;
mod heap;
mod score;

pub use error::{HeapError, Result};
pub use filtered::NanFilteringHeap;
pub use heap::FairLimitedHeap;
pub use score::Score;
