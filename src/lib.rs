//! # Quickslice
//!
//! `quickslice` is a lazy partial-sorting library: it answers "which element is
//! at rank k" and "which elements occupy ranks `[start, stop)`" over a large
//! unsorted collection without paying for a full sort.
//!
//! It combines in-place **quickselect** partitioning with a bounded fallback
//! sort: a single rank costs expected O(n), and a sorted slice of m elements
//! costs expected O(n + m log m), since two selections box in the requested
//! window and only that window is sorted. Every query permanently refines the
//! order of the backing collection, so repeated queries get cheaper over time.
//!
//! ## Key Features
//!
//! - **Lazy slicing**: [`Selector::slice`] materializes just the requested rank
//!   range in sorted order, leaving the rest of the collection partially
//!   ordered.
//! - **In-Place Mutation**: all reordering happens through swaps on the
//!   caller-owned collection; no copy is made except for returned results.
//! - **Zero-copy abstraction**: the [`Store`] trait lets any mutable,
//!   randomly-indexable storage be selected in place (e.g. parallel arrays,
//!   ring buffers) without converting to a `Vec`.
//! - **Pluggable pivots**: pivot choice is a [`PivotPolicy`]; the default is
//!   random-index selection, which avoids the classic quickselect O(n²)
//!   degradation on sorted input.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections like `Vec<T>`, borrow the data mutably and query
//! ranks or rank ranges.
//!
//! ```rust
//! use quickslice::Selector;
//!
//! let mut data = vec![9, 2, 1, 3, 3, 0, 8, 4, 5, 6, 7];
//! let mut selector = Selector::new(&mut data);
//!
//! // The median, in expected linear time.
//! assert_eq!(*selector.select(5).unwrap(), 4);
//!
//! // Ranks 3..6 of the sorted ordering, in order.
//! assert_eq!(selector.slice(3, 6).unwrap(), vec![3, 3, 4]);
//! ```
//!
//! ### Custom Backing Storage
//!
//! To select over data that is not a slice (columnar layouts, records kept in
//! step with a key column), implement the [`Store`] trait.
//!
//! ```rust
//! use quickslice::{Selector, Store};
//!
//! struct Readings {
//!     sensor_ids: Vec<u32>,
//!     values: Vec<u64>,
//! }
//!
//! impl Store for Readings {
//!     type Item = u64;
//!
//!     fn get(&self, index: usize) -> &u64 {
//!         &self.values[index]
//!     }
//!
//!     fn swap(&mut self, a: usize, b: usize) {
//!         // Keep the id column in step with the key column.
//!         self.sensor_ids.swap(a, b);
//!         self.values.swap(a, b);
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.values.len()
//!     }
//! }
//!
//! let mut readings = Readings {
//!     sensor_ids: vec![7, 3, 9],
//!     values: vec![250, 100, 175],
//! };
//!
//! let mut selector = Selector::new(&mut readings);
//! assert_eq!(*selector.select(0).unwrap(), 100);
//! assert_eq!(readings.sensor_ids[0], 3);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Single rank**: expected O(n), in place.
//! - **Sorted slice of m ranks**: expected O(n + m log m); degrades towards a
//!   plain sort as m approaches n, so ask for slices small relative to the
//!   collection.
//! - **Full traversal** ([`Selector::iter`]): O(n²) worst case; a
//!   convenience, not a fast path.
//!
//! The selector is single-threaded by design: it holds the backing storage
//! exclusively and interleaved partitioning from two threads of control would
//! corrupt the partial order. Callers needing shared access must serialize
//! whole `select`/`slice` calls behind their own lock.

pub mod algo;
pub mod core;
pub use algo::{Ranks, Selector};
pub use core::{FirstIndex, PivotFn, PivotPolicy, RandomIndex, SelectError, Store};

pub mod prelude {
    pub use crate::algo::{Ranks, Selector};
    pub use crate::core::{FirstIndex, PivotFn, PivotPolicy, RandomIndex, SelectError, Store};
}
