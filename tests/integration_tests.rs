//! Integration tests for the fair limited heap

use fair_heap::{FairLimitedHeap, HeapError, NanFilteringHeap};

/// Build a heap of `soft_limit` 100 holding 96 distinct high scores plus
/// four entries tied at score 1, pushed tied-first so the tied group sits at
/// the front of the backing array.
fn heap_with_four_tied_minimums() -> FairLimitedHeap<i32, usize> {
    let mut heap = FairLimitedHeap::new(100);
    for item in 0..4 {
        heap.push(item, 1);
    }
    for item in 4..100 {
        heap.push(item, 1000 + item as i32);
    }
    assert_eq!(heap.len(), 100);
    heap
}

#[test]
fn test_push_over_limit_keeps_tied_minimums() {
    let mut heap = heap_with_four_tied_minimums();

    // Evicting the four tied 1s would leave 97 < 100 entries, so the heap
    // grows to 101 instead.
    heap.push(100, 50);
    assert_eq!(heap.len(), 101);
}

#[test]
fn test_tied_group_collapses_once_evictable() {
    let mut heap = heap_with_four_tied_minimums();

    heap.push(100, 50);
    assert_eq!(heap.len(), 101);
    heap.push(101, 50);
    assert_eq!(heap.len(), 102);
    heap.push(102, 50);
    assert_eq!(heap.len(), 103);

    // This push takes the heap to 104, where evicting all four tied
    // minimums leaves exactly 100. The whole group goes at once.
    heap.push(103, 50);
    assert_eq!(heap.len(), 100);
    assert!(heap.iter().all(|(score, _)| *score != 1));
}

#[test]
fn test_all_tied_heap_grows_without_bound() {
    // Six entries all scoring 3 with soft_limit 5: the tied group is the
    // whole heap, so nothing is ever evictable and the heap keeps growing.
    // Documented behavior of the eviction rule, not a bug.
    let mut heap = FairLimitedHeap::new(5);
    for item in 0..6 {
        heap.push(item, 3);
    }
    assert_eq!(heap.len(), 6);

    for item in 6..50 {
        heap.push(item, 3);
    }
    assert_eq!(heap.len(), 50);
}

#[test]
fn test_pop_with_score_returns_global_minimum() {
    let mut heap = FairLimitedHeap::new(10);
    heap.push("mid", 5);
    heap.push("low", 2);
    heap.push("high", 9);

    assert_eq!(heap.pop_with_score(), Ok((2, "low")));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_nan_push_on_empty_heap() {
    let mut heap: NanFilteringHeap<&str> = NanFilteringHeap::new(10);
    heap.push("x", f64::NAN);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_constructor_and_pushes_build_equal_heaps() {
    let pairs: Vec<(usize, i32)> = (0..40).map(|i| (i, (i as i32 * 7) % 5)).collect();

    let from_initial = FairLimitedHeap::with_initial(25, pairs.clone());
    let mut pushed = FairLimitedHeap::new(25);
    for (item, score) in pairs {
        pushed.push(item, score);
    }

    // Strict representation equality: identical backing arrays.
    assert_eq!(from_initial, pushed);
    let a: Vec<_> = from_initial.iter().collect();
    let b: Vec<_> = pushed.iter().collect();
    assert_eq!(a, b);
}

#[test]
fn test_draining_pops_ascending() {
    let mut heap = FairLimitedHeap::new(64);
    let mut state = 0x2545f49_u64;
    for item in 0..60_usize {
        // xorshift, scores confined to 0..10 to force plenty of ties
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        heap.push(item, (state % 10) as i32);
    }

    let expected: Vec<(i32, usize)> = heap
        .sorted_entries()
        .into_iter()
        .map(|(score, item)| (*score, *item))
        .collect();

    let mut drained = Vec::new();
    while let Ok(entry) = heap.pop_with_score() {
        drained.push(entry);
    }
    assert_eq!(drained, expected);
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn test_minimum_and_size_floor_hold_under_churn() {
    let soft_limit = 8;
    let mut heap = FairLimitedHeap::new(soft_limit);
    let mut state = 0x9e3779b9_u64;
    for item in 0..200_usize {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        heap.push(item, (state % 6) as i32);

        // Front of the heap is the true minimum of the contents.
        let front = heap.peek().unwrap();
        let min = heap.iter().min().unwrap();
        assert_eq!(front, min);

        // Eviction never cuts below the soft limit.
        assert!(heap.len() >= soft_limit.min(item + 1));
    }
}

#[test]
fn test_sorted_views_agree_and_do_not_mutate() {
    let mut heap = FairLimitedHeap::new(16);
    for (item, score) in [("d", 4), ("a", 1), ("c", 3), ("b", 2), ("e", 1)] {
        heap.push(item, score);
    }

    let entries = heap.sorted_entries();
    let items = heap.sorted_items();
    assert_eq!(
        entries.iter().map(|(_, item)| *item).collect::<Vec<_>>(),
        items
    );
    assert_eq!(items, vec![&"a", &"e", &"b", &"c", &"d"]);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.sorted_items(), items);
}

#[test]
fn test_serde_round_trip_preserves_representation() {
    let mut heap = FairLimitedHeap::new(10);
    for (item, score) in [("a", 3), ("b", 1), ("c", 2)] {
        heap.push(item.to_string(), score);
    }

    let json = serde_json::to_string(&heap).unwrap();
    let restored: FairLimitedHeap<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, heap);
    assert_eq!(restored.soft_limit(), heap.soft_limit());
}

#[test]
fn test_filtered_heap_mixed_workload() {
    let mut heap = NanFilteringHeap::new(4);
    heap.push("keep-1", 10.0);
    heap.push("nan-1", f64::NAN);
    heap.push("keep-2", 20.0);
    heap.push("keep-3", 30.0);
    heap.push("nan-2", -f64::NAN);
    heap.push("keep-4", 40.0);
    assert_eq!(heap.len(), 4);

    // One more real push evicts the lone minimum.
    heap.push("keep-5", 50.0);
    assert_eq!(heap.len(), 4);
    assert_eq!(
        heap.sorted_items(),
        vec![&"keep-2", &"keep-3", &"keep-4", &"keep-5"]
    );
}
