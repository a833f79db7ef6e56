//! Core traits and types for Quickslice.
//!
//! This module defines:
//! - [`Store`]: the main trait backing collections implement to be selectable in place.
//! - [`PivotPolicy`]: the pluggable pivot-selection seam, with [`RandomIndex`] and [`FirstIndex`].
//! - [`SelectError`]: the error taxonomy for caller contract violations.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A trait for mutable, randomly-indexable backing storage.
///
/// Everything the selection algorithms need is random read access and the
/// ability to exchange two positions; `quickslice` reorders the collection
/// exclusively through [`swap`](Store::swap), so implementors are free to keep
/// satellite data (ids, payload columns) in step with the keyed column.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use quickslice::core::Store;
///
/// struct MyCollection {
///     data: Vec<u32>,
/// }
///
/// impl Store for MyCollection {
///     type Item = u32;
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.data[index]
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.data.swap(a, b);
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait Store {
    /// The element type held by the collection.
    type Item;

    /// Returns a reference to the element at the given index.
    fn get(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at indices `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for slices.
impl<T> Store for [T] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Store for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access and swap, so it is suitable for selection.
impl<T> Store for VecDeque<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Chooses the pivot position for one partitioning round.
///
/// `pick` receives the inclusive window `[left, right]` currently being
/// partitioned and must return an index within it. The choice only affects
/// performance, never correctness: any in-window pivot keeps selection exact,
/// but a policy that consistently proposes an extreme element degrades the
/// expected O(n) search to O(n²).
///
/// Closures become policies through the [`PivotFn`] adapter:
///
/// ```
/// use quickslice::{PivotFn, Selector};
///
/// let mut data = vec![3, 1, 2];
/// // Midpoint pivot.
/// let mut selector = Selector::with_policy(
///     &mut data,
///     PivotFn(|left: usize, right: usize| left + (right - left) / 2),
/// );
/// assert_eq!(*selector.select(0).unwrap(), 1);
/// ```
pub trait PivotPolicy {
    /// Returns a pivot index in `left..=right`.
    fn pick(&mut self, left: usize, right: usize) -> usize;
}

/// Adapter turning any `FnMut(usize, usize) -> usize` into a [`PivotPolicy`].
pub struct PivotFn<F>(pub F);

impl<F: FnMut(usize, usize) -> usize> PivotPolicy for PivotFn<F> {
    fn pick(&mut self, left: usize, right: usize) -> usize {
        (self.0)(left, right)
    }
}

/// Uniformly random pivot selection, the default policy.
///
/// Driven by a [`SmallRng`]; use [`seeded`](RandomIndex::seeded) when a run
/// must be reproducible. The selected element is identical either way, only
/// the placement of elements away from the requested rank differs.
pub struct RandomIndex {
    rng: SmallRng,
}

impl RandomIndex {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a policy with a fixed seed for deterministic partitioning.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PivotPolicy for RandomIndex {
    fn pick(&mut self, left: usize, right: usize) -> usize {
        self.rng.random_range(left..=right)
    }
}

/// Fixed first-element pivot selection.
///
/// Deterministic and state-free, but degrades to O(n²) on sorted or
/// adversarial input where the window head is the worst possible pivot.
pub struct FirstIndex;

impl PivotPolicy for FirstIndex {
    fn pick(&mut self, left: usize, _right: usize) -> usize {
        left
    }
}

/// Errors raised on caller contract violations.
///
/// The algorithms are deterministic; none of these conditions is transient and
/// no operation retries or clamps. Bounds are validated before any mutation,
/// so a returned error means the failing call did not touch the backing store.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// A rank or slice bound outside `[0, len)`. Never clamped or wrapped,
    /// since clamping would corrupt the partial-order guarantee silently.
    #[error("rank {rank} out of range for collection of length {len}")]
    OutOfRange {
        /// The offending rank or bound.
        rank: usize,
        /// Length of the backing store at the time of the call.
        len: usize,
    },
    /// A slice request with `start > stop`.
    #[error("invalid range: start {start} is greater than stop {stop}")]
    InvalidRange {
        /// Requested start rank.
        start: usize,
        /// Requested stop rank.
        stop: usize,
    },
    /// Selection on a zero-length backing store, where no pivot exists.
    #[error("selection on an empty collection")]
    EmptyCollection,
}
