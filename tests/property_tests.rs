//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check every
//! intermediate state against a plain sorted reference.

use pairing_pq::binary::ArrayHeap;
use pairing_pq::compare::Less;
use pairing_pq::pairing::PairingHeap;
use pairing_pq::{AddressableQueue, PriorityQueue};
use proptest::prelude::*;

/// Test that push and pop keep the top equal to the reference maximum
fn test_push_pop_invariant<H: PriorityQueue<i32, Compare = Less>>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut reference: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let popped = heap.pop();
            let expected = reference.iter().copied().max();
            prop_assert_eq!(popped, expected);
            if let Some(pos) = reference.iter().position(|&v| Some(v) == expected) {
                reference.swap_remove(pos);
            }
        } else {
            heap.push(value);
            reference.push(value);
        }

        prop_assert_eq!(heap.peek().copied(), reference.iter().copied().max());
    }

    Ok(())
}

/// Test that len tracks pushes minus pops and is_empty agrees with it
fn test_len_invariant<H: PriorityQueue<i32, Compare = Less>>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut expected_len = 0usize;

    for (should_pop, value) in ops {
        if should_pop {
            if heap.pop().is_some() {
                expected_len -= 1;
            }
        } else {
            heap.push(value);
            expected_len += 1;
        }
        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Test that draining yields a descending sequence equal to the sorted input
fn test_pop_order_invariant<H: PriorityQueue<i32, Compare = Less>>(
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    for &value in &values {
        heap.push(value);
    }

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(heap.into_sorted_vec(), expected);

    Ok(())
}

/// Test that bulk construction drains the same as individual pushes
fn test_from_iter_invariant<H: PriorityQueue<i32, Compare = Less>>(
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let built = H::from_iter_with(values.iter().copied(), Less);
    let mut pushed = H::new();
    for &value in &values {
        pushed.push(value);
    }

    prop_assert_eq!(built.into_sorted_vec(), pushed.into_sorted_vec());

    Ok(())
}

/// Test merge keeps every element and the ordering
fn test_merge_invariant<H: PriorityQueue<i32, Compare = Less>>(
    heap1_values: Vec<i32>,
    heap2_values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut heap1 = H::from_iter_with(heap1_values.iter().copied(), Less);
    let heap2 = H::from_iter_with(heap2_values.iter().copied(), Less);

    heap1.merge(heap2);

    let mut expected: Vec<i32> = heap1_values.into_iter().chain(heap2_values).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(heap1.len(), expected.len());
    prop_assert_eq!(heap1.into_sorted_vec(), expected);

    Ok(())
}

/// Test that handle updates keep the top equal to the reference maximum
fn test_update_invariant(
    initial: Vec<i32>,
    updates: Vec<(usize, i32)>,
    pops: usize,
) -> Result<(), TestCaseError> {
    let mut heap = PairingHeap::new();
    let mut handles = Vec::new();
    let mut values: Vec<Option<i32>> = Vec::new();

    for &value in &initial {
        handles.push(heap.push_with_handle(value));
        values.push(Some(value));
    }

    // Pop a few first so updates also hit restructured trees.
    for _ in 0..pops.min(initial.len()) {
        let Some(top) = heap.pop() else { break };
        let freed = (0..handles.len()).find(|&i| values[i].is_some() && !heap.contains(&handles[i]));
        prop_assert!(freed.is_some(), "pop must free a live handle");
        if let Some(i) = freed {
            prop_assert_eq!(values[i], Some(top));
            values[i] = None;
        }
    }

    for (idx, new_value) in updates {
        let idx = idx % handles.len();
        let result = heap.update(&handles[idx], new_value);
        match values[idx] {
            None => prop_assert!(result.is_err()),
            Some(old) if new_value > old => {
                prop_assert!(result.is_ok());
                values[idx] = Some(new_value);
            }
            Some(_) => prop_assert!(result.is_err()),
        }

        prop_assert_eq!(heap.peek().copied(), values.iter().flatten().copied().max());
        prop_assert_eq!(heap.len(), values.iter().flatten().count());
    }

    let mut expected: Vec<i32> = values.into_iter().flatten().collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(heap.into_sorted_vec(), expected);

    Ok(())
}

/// Applies push, pop and push-then-improve operations to a pairing heap
fn apply_mixed_ops(heap: &mut PairingHeap<i32>, ops: &[(u8, i32)]) -> Result<(), TestCaseError> {
    for &(kind, value) in ops {
        match kind % 3 {
            0 => heap.push(value),
            1 => {
                heap.pop();
            }
            _ => {
                let handle = heap.push_with_handle(value);
                prop_assert!(heap.update(&handle, value + 1_000).is_ok());
            }
        }
    }
    Ok(())
}

/// Test that a clone and its original never observe each other's mutations
fn test_clone_independence(
    values: Vec<i32>,
    copy_ops: Vec<(u8, i32)>,
    original_ops: Vec<(u8, i32)>,
) -> Result<(), TestCaseError> {
    let mut original: PairingHeap<i32> = values.iter().copied().collect();
    // Issued before cloning, so it addresses the same element in both heaps.
    let shared = original.push_with_handle(-1_000);
    let original_before = original.clone().into_sorted_vec();

    // Mutating the copy leaves the original alone.
    let mut copy = original.clone();
    apply_mixed_ops(&mut copy, &copy_ops)?;
    if copy.contains(&shared) {
        prop_assert!(copy.update(&shared, 5_000).is_ok());
    }

    prop_assert_eq!(original.len(), values.len() + 1);
    prop_assert_eq!(original.get(&shared), Some(&-1_000));
    prop_assert_eq!(original.clone().into_sorted_vec(), original_before);

    // And the other way around.
    let copy_len = copy.len();
    let copy_before = copy.clone().into_sorted_vec();
    apply_mixed_ops(&mut original, &original_ops)?;
    if original.contains(&shared) {
        prop_assert!(original.update(&shared, 9_000).is_ok());
    }

    prop_assert_eq!(copy.len(), copy_len);
    prop_assert_eq!(copy.into_sorted_vec(), copy_before);

    Ok(())
}

proptest! {
    #[test]
    fn test_array_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<ArrayHeap<i32>>(ops)?;
    }

    #[test]
    fn test_array_len_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_len_invariant::<ArrayHeap<i32>>(ops)?;
    }

    #[test]
    fn test_array_pop_order_invariant(values in prop::collection::vec(any::<i32>(), 0..200)) {
        test_pop_order_invariant::<ArrayHeap<i32>>(values)?;
    }

    #[test]
    fn test_array_from_iter_invariant(values in prop::collection::vec(-50i32..50, 0..200)) {
        test_from_iter_invariant::<ArrayHeap<i32>>(values)?;
    }

    #[test]
    fn test_array_merge_invariant(
        heap1 in prop::collection::vec(-100i32..100, 0..80),
        heap2 in prop::collection::vec(-100i32..100, 0..80)
    ) {
        test_merge_invariant::<ArrayHeap<i32>>(heap1, heap2)?;
    }

    #[test]
    fn test_pairing_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<PairingHeap<i32>>(ops)?;
    }

    #[test]
    fn test_pairing_len_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_len_invariant::<PairingHeap<i32>>(ops)?;
    }

    #[test]
    fn test_pairing_pop_order_invariant(values in prop::collection::vec(any::<i32>(), 0..200)) {
        test_pop_order_invariant::<PairingHeap<i32>>(values)?;
    }

    #[test]
    fn test_pairing_from_iter_invariant(values in prop::collection::vec(-50i32..50, 0..200)) {
        test_from_iter_invariant::<PairingHeap<i32>>(values)?;
    }

    #[test]
    fn test_pairing_merge_invariant(
        heap1 in prop::collection::vec(-100i32..100, 0..80),
        heap2 in prop::collection::vec(-100i32..100, 0..80)
    ) {
        test_merge_invariant::<PairingHeap<i32>>(heap1, heap2)?;
    }

    #[test]
    fn test_pairing_update_invariant(
        initial in prop::collection::vec(-100i32..100, 1..60),
        updates in prop::collection::vec((0usize..60, -100i32..200), 0..60),
        pops in 0usize..10
    ) {
        test_update_invariant(initial, updates, pops)?;
    }

    #[test]
    fn test_pairing_clone_independence(
        values in prop::collection::vec(-100i32..100, 0..60),
        copy_ops in prop::collection::vec((0u8..3, -100i32..100), 0..60),
        original_ops in prop::collection::vec((0u8..3, -100i32..100), 0..60)
    ) {
        test_clone_independence(values, copy_ops, original_ops)?;
    }
}
