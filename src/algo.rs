//! Core selection algorithms (quickselect and slice materialization).
//!
//! This module implements the selection engine:
//! - **Quickselect**: iterative single-pivot partitioning that commits one
//!   requested rank to its final sorted position in expected O(n) time.
//! - **Slice materialization**: two selection calls box in the requested rank
//!   window, then a swap-only heapsort orders exactly that window.
//! - **Sorted traversal**: rank-at-a-time iteration, one selection per step.
//!
//! The main entry point is [`Selector`].

use crate::core::{PivotPolicy, RandomIndex, SelectError, Store};
use log::trace;

/// Lazy partial sorter over a mutable backing collection.
///
/// A `Selector` holds an exclusive borrow of a [`Store`] and answers rank
/// queries by partially sorting it in place: [`select`](Selector::select)
/// commits a single rank, [`slice`](Selector::slice) materializes a sorted
/// sub-range, and [`iter`](Selector::iter) walks ranks in ascending order.
/// No copy of the collection is ever made; every query permanently refines
/// the ordering of the backing store.
///
/// The exclusive borrow is the concurrency boundary: the borrow checker rules
/// out concurrent access to the store for the selector's lifetime, and callers
/// that need sharing must serialize whole calls externally.
///
/// # Examples
///
/// ```
/// use quickslice::Selector;
///
/// let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
/// let mut selector = Selector::new(&mut data);
///
/// // Ranks 3, 4 and 5 of the sorted ordering, without a full sort.
/// assert_eq!(selector.slice(3, 6).unwrap(), vec![3, 3, 4]);
/// ```
pub struct Selector<'a, S: ?Sized, P = RandomIndex> {
    store: &'a mut S,
    policy: P,
}

impl<'a, S: Store + ?Sized> Selector<'a, S, RandomIndex> {
    /// Creates a selector over `store` with the default random pivot policy.
    pub fn new(store: &'a mut S) -> Self {
        Self::with_policy(store, RandomIndex::new())
    }
}

impl<'a, S: Store + ?Sized, P: PivotPolicy> Selector<'a, S, P> {
    /// Creates a selector with an explicit pivot policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickslice::{FirstIndex, Selector};
    ///
    /// let mut data = vec![5, 1, 4];
    /// let mut selector = Selector::with_policy(&mut data, FirstIndex);
    /// assert_eq!(*selector.select(2).unwrap(), 5);
    /// ```
    pub fn with_policy(store: &'a mut S, policy: P) -> Self {
        Self { store, policy }
    }

    /// Returns the number of items in the backing store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the backing store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Releases the selector, handing back the borrow of the store.
    pub fn into_inner(self) -> &'a mut S {
        self.store
    }
}

impl<'a, S, P> Selector<'a, S, P>
where
    S: Store + ?Sized,
    S::Item: Ord,
    P: PivotPolicy,
{
    /// Returns the element at `rank` of the sorted ordering.
    ///
    /// Reorders the backing store in place so that index `rank` holds the
    /// element it would hold after a full sort, every element before it
    /// compares less than or equal, and every element after it greater than
    /// or equal. The rest of the store is left only partially ordered.
    ///
    /// Runs in expected O(n) under the default random pivot policy.
    ///
    /// # Errors
    ///
    /// [`SelectError::EmptyCollection`] on an empty store,
    /// [`SelectError::OutOfRange`] when `rank >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickslice::Selector;
    ///
    /// let mut data = vec![5, 1, 4];
    /// let mut selector = Selector::new(&mut data);
    ///
    /// assert_eq!(*selector.select(1).unwrap(), 4);
    /// ```
    pub fn select(&mut self, rank: usize) -> Result<&S::Item, SelectError> {
        let len = self.store.len();
        if len == 0 {
            return Err(SelectError::EmptyCollection);
        }
        if rank >= len {
            return Err(SelectError::OutOfRange { rank, len });
        }
        trace!("selecting rank {rank} of {len}");
        self.quickselect(rank, 0, len - 1);
        Ok(self.store.get(rank))
    }

    /// Returns the elements at ranks `start..stop` of the sorted ordering,
    /// in ascending order.
    ///
    /// The range is half-open: `start` is included, `stop` is excluded.
    /// Two selection calls box in the window: the right boundary first, then
    /// the left boundary with the search space truncated at the already
    /// resolved right. A heapsort then orders exactly the window in between.
    /// On return the backing store holds the same sorted run in place at
    /// indices `start..stop`; elements outside keep only the weaker
    /// partial-order guarantee.
    ///
    /// Expected cost is O(n + m log m) for m requested ranks, which beats a
    /// full sort whenever m is small relative to the collection.
    ///
    /// # Errors
    ///
    /// [`SelectError::InvalidRange`] when `start > stop`,
    /// [`SelectError::OutOfRange`] when `stop > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickslice::Selector;
    ///
    /// let mut data = vec![-5, 0, -5, 2, -1];
    /// let mut selector = Selector::new(&mut data);
    ///
    /// assert_eq!(selector.slice(0, 3).unwrap(), vec![-5, -5, -1]);
    /// ```
    pub fn slice(&mut self, start: usize, stop: usize) -> Result<Vec<S::Item>, SelectError>
    where
        S::Item: Clone,
    {
        let len = self.store.len();
        if start > stop {
            return Err(SelectError::InvalidRange { start, stop });
        }
        if stop > len {
            return Err(SelectError::OutOfRange { rank: stop, len });
        }
        if start == stop {
            return Ok(Vec::new());
        }
        trace!("materializing ranks {start}..{stop} of {len}");

        // Put the right bound on position, then the left bound; the second
        // search never re-scans the resolved right partition.
        self.quickselect(stop - 1, 0, len - 1);
        self.quickselect(start, 0, stop - 1);

        // All remaining disorder is now confined to the window.
        heap_sort_range(self.store, start, stop);

        Ok((start..stop).map(|i| self.store.get(i).clone()).collect())
    }

    /// Returns an iterator over elements in ascending rank order.
    ///
    /// Each step selects one more rank, with the search window's left edge
    /// advancing past the already committed prefix. The iterator yields the
    /// first `len - 1` ranks; once it is exhausted the single remaining
    /// element is already in place and the whole store is sorted ascending.
    ///
    /// Full traversal costs O(n²) worst case, the same degeneration as
    /// selection sort. This is a convenience for when complete iteration is
    /// needed anyway, not a performance feature; prefer
    /// [`slice`](Selector::slice) for bounded rank ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickslice::Selector;
    ///
    /// let mut data = vec![4, 1, 3, 2];
    /// let mut selector = Selector::new(&mut data);
    ///
    /// let ranks: Vec<i32> = selector.iter().collect();
    /// assert_eq!(ranks, vec![1, 2, 3]);
    /// assert_eq!(data, vec![1, 2, 3, 4]);
    /// ```
    pub fn iter(&mut self) -> Ranks<'_, 'a, S, P> {
        Ranks {
            selector: self,
            next: 0,
        }
    }

    /// Commits `rank` to its final sorted position within the inclusive
    /// window `[left, right]`, leaving both partitions around it in place.
    ///
    /// Iterative with tail elimination: each round either returns or narrows
    /// the window to the partition holding `rank`.
    fn quickselect(&mut self, rank: usize, mut left: usize, mut right: usize) {
        debug_assert!(left <= rank && rank <= right && right < self.store.len());
        loop {
            if left == right {
                return;
            }

            // Park the proposed pivot at the window head.
            let pivot = self.policy.pick(left, right);
            debug_assert!(
                left <= pivot && pivot <= right,
                "pivot policy left the window"
            );
            self.store.swap(left, pivot);

            let mut lp = left + 1;
            let mut rp = right;
            loop {
                // Advance over elements already on the correct side, each
                // scan clamped so it cannot cross the opposite bound.
                while lp < right && self.store.get(lp) < self.store.get(left) {
                    lp += 1;
                }
                while rp > left && self.store.get(rp) >= self.store.get(left) {
                    rp -= 1;
                }
                if lp >= rp {
                    break;
                }
                self.store.swap(lp, rp);
            }

            // The pivot lands at its final rank.
            self.store.swap(left, rp);

            if rp == rank {
                return;
            } else if rank < rp {
                right = lp;
            } else {
                left = lp;
            }
        }
    }
}

/// Iterator yielding elements in ascending rank order, one selection per step.
///
/// Created by [`Selector::iter`]. Single-pass: it borrows the selector
/// exclusively and every `next` permanently commits one more position of the
/// backing store to its sorted order.
pub struct Ranks<'s, 'a, S: ?Sized, P> {
    selector: &'s mut Selector<'a, S, P>,
    next: usize,
}

impl<S, P> Iterator for Ranks<'_, '_, S, P>
where
    S: Store + ?Sized,
    S::Item: Ord + Clone,
    P: PivotPolicy,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let len = self.selector.store.len();
        // The last rank is committed for free once all others are.
        if self.next + 1 >= len {
            return None;
        }
        let rank = self.next;
        self.selector.quickselect(rank, rank, len - 1);
        self.next += 1;
        Some(self.selector.store.get(rank).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .selector
            .store
            .len()
            .saturating_sub(1)
            .saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S, P> ExactSizeIterator for Ranks<'_, '_, S, P>
where
    S: Store + ?Sized,
    S::Item: Ord + Clone,
    P: PivotPolicy,
{
}

/// Sorts the window `[start, stop)` of `store` with a binary heapsort.
///
/// Guarantees O(m log m) worst case and needs nothing beyond `get`/`swap`,
/// so it works on any [`Store`]. The heap respects `parent >= child` over
/// window-relative indices.
fn heap_sort_range<S>(store: &mut S, start: usize, stop: usize)
where
    S: Store + ?Sized,
    S::Item: Ord,
{
    fn sift_down<S>(store: &mut S, start: usize, limit: usize, mut node: usize)
    where
        S: Store + ?Sized,
        S::Item: Ord,
    {
        loop {
            // Children of `node`.
            let mut child = 2 * node + 1;
            if child >= limit {
                break;
            }

            // Choose the greater child.
            if child + 1 < limit && store.get(start + child) < store.get(start + child + 1) {
                child += 1;
            }

            // Stop if the invariant holds at `node`.
            if store.get(start + node) >= store.get(start + child) {
                break;
            }

            store.swap(start + node, start + child);
            node = child;
        }
    }

    let len = stop - start;

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(store, start, len, node);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        store.swap(start, start + i);
        sift_down(store, start, i, 0);
    }
}
