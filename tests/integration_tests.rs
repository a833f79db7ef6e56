use quickslice::prelude::*;
use std::collections::VecDeque;

#[test]
fn test_slice_middle_ranks() {
    let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.slice(3, 6).unwrap(), vec![3, 3, 4]);

    // The window is also sorted in place in the backing store.
    assert_eq!(data[3..6], [3, 3, 4]);
}

#[test]
fn test_select_single_rank() {
    let mut data = vec![5, 1, 4];
    let mut selector = Selector::new(&mut data);

    // Fully sorted would be [1, 4, 5].
    assert_eq!(*selector.select(1).unwrap(), 4);
    assert_eq!(data[1], 4);
}

#[test]
fn test_select_empty() {
    let mut data: Vec<i32> = vec![];
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.select(0), Err(SelectError::EmptyCollection));
}

#[test]
fn test_select_out_of_range() {
    let mut data = vec![1, 2, 3];
    let mut selector = Selector::new(&mut data);

    assert_eq!(
        selector.select(3),
        Err(SelectError::OutOfRange { rank: 3, len: 3 })
    );

    // Never clamped, and the store is untouched by the failing call.
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_slice_invalid_range() {
    let mut data = vec![3, 1, 2];
    let mut selector = Selector::new(&mut data);

    assert_eq!(
        selector.slice(2, 1),
        Err(SelectError::InvalidRange { start: 2, stop: 1 })
    );
}

#[test]
fn test_slice_stop_past_end() {
    let mut data = vec![3, 1, 2];
    let mut selector = Selector::new(&mut data);

    assert_eq!(
        selector.slice(0, 4),
        Err(SelectError::OutOfRange { rank: 4, len: 3 })
    );
}

#[test]
fn test_single_element() {
    let mut data = vec![7];
    let mut selector = Selector::new(&mut data);

    assert_eq!(*selector.select(0).unwrap(), 7);
    assert_eq!(selector.slice(0, 1).unwrap(), vec![7]);
}

#[test]
fn test_all_equal() {
    let mut data = vec![3, 3, 3];
    let mut selector = Selector::new(&mut data);

    assert_eq!(*selector.select(1).unwrap(), 3);
    assert_eq!(data, vec![3, 3, 3]);
}

#[test]
fn test_duplicates_and_negatives() {
    let mut data = vec![-5, 0, -5, 2, -1];
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.slice(0, 3).unwrap(), vec![-5, -5, -1]);
}

#[test]
fn test_empty_slice() {
    let mut data = vec![3, 1, 2];
    let original = data.clone();
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.slice(2, 2).unwrap(), Vec::<i32>::new());

    // An empty request performs no selection at all.
    assert_eq!(data, original);
}

#[test]
fn test_empty_slice_on_empty_store() {
    let mut data: Vec<i32> = vec![];
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.slice(0, 0).unwrap(), Vec::<i32>::new());
}

#[test]
fn test_full_slice_is_a_sort() {
    let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
    let len = data.len();
    let mut selector = Selector::new(&mut data);

    let all = selector.slice(0, len).unwrap();
    assert_eq!(all, vec![0, 1, 2, 3, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(data, all);
}

#[test]
fn test_iteration_ascending() {
    let mut data = vec![4, 1, 3, 2];
    let mut selector = Selector::new(&mut data);

    let ranks: Vec<i32> = selector.iter().collect();

    // Yields the first len - 1 ranks; the last is committed for free.
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(data, vec![1, 2, 3, 4]);
}

#[test]
fn test_iteration_size_hint() {
    let mut data = vec![4, 1, 3, 2];
    let mut selector = Selector::new(&mut data);

    let mut iter = selector.iter();
    assert_eq!(iter.len(), 3);
    let _ = iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_iteration_degenerate_lengths() {
    let mut empty: Vec<i32> = vec![];
    assert_eq!(Selector::new(&mut empty).iter().next(), None);

    let mut single = vec![7];
    assert_eq!(Selector::new(&mut single).iter().next(), None);
}

#[test]
fn test_vec_deque_store() {
    let mut data: VecDeque<i32> = VecDeque::from(vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7]);
    let mut selector = Selector::new(&mut data);

    assert_eq!(selector.slice(3, 6).unwrap(), vec![3, 3, 4]);
}

#[test]
fn test_slice_store() {
    let mut data = [5, 1, 4, 2, 3];
    let mut selector = Selector::new(&mut data[..]);

    assert_eq!(selector.slice(1, 4).unwrap(), vec![2, 3, 4]);
}

#[test]
fn test_first_index_policy() {
    // Already sorted input is the worst case for the fixed pivot; the result
    // must still be exact.
    let mut data: Vec<u32> = (0..200).collect();
    let mut selector = Selector::with_policy(&mut data, FirstIndex);

    assert_eq!(*selector.select(150).unwrap(), 150);
    assert_eq!(selector.slice(10, 20).unwrap(), (10..20).collect::<Vec<_>>());
}

#[test]
fn test_closure_policy() {
    let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
    let mut selector = Selector::with_policy(
        &mut data,
        PivotFn(|left: usize, right: usize| left + (right - left) / 2),
    );

    assert_eq!(selector.slice(3, 6).unwrap(), vec![3, 3, 4]);
}

#[test]
fn test_seeded_policy_is_deterministic() {
    let input = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];

    let mut a = input.clone();
    let mut b = input.clone();
    Selector::with_policy(&mut a, RandomIndex::seeded(42))
        .select(5)
        .unwrap();
    Selector::with_policy(&mut b, RandomIndex::seeded(42))
        .select(5)
        .unwrap();

    // Identical seeds partition identically, element for element.
    assert_eq!(a, b);
}

#[test]
fn test_selector_accessors() {
    let mut data = vec![3, 1, 2];
    let selector = Selector::new(&mut data);

    assert_eq!(selector.len(), 3);
    assert!(!selector.is_empty());

    let store = selector.into_inner();
    store.push(4);
    assert_eq!(data.len(), 4);
}

#[test]
fn test_repeated_queries_refine_in_place() {
    let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
    let sorted = {
        let mut s = data.clone();
        s.sort_unstable();
        s
    };
    let mut selector = Selector::new(&mut data);

    assert_eq!(*selector.select(2).unwrap(), sorted[2]);
    assert_eq!(selector.slice(4, 8).unwrap(), sorted[4..8]);
    assert_eq!(*selector.select(9).unwrap(), sorted[9]);

    // Nothing was lost or duplicated along the way.
    data.sort_unstable();
    assert_eq!(data, sorted);
}
