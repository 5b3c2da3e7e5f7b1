// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! A Packed Memory Array (PMA): an ordered, in-memory associative container
//! that stores a sorted sequence of unique, comparable keys in a gapped
//! array, leaving calibrated empty slots between elements to keep updates
//! local. Supports point lookup, predecessor search, insertion, and
//! deletion, with amortized polylogarithmic work per update thanks to
//! density-bounded local rebalances and occasional global resizes.
//!
//! The container is single-threaded and owns its backing store exclusively;
//! there is no persistence, iteration, bulk-load, or duplicate-key support.
//!
//! ```
//! use pma::Pma;
//!
//! let mut pma: Pma<i32> = Pma::new();
//! assert!(pma.insert(5).unwrap());
//! assert!(pma.insert(3).unwrap());
//! assert!(pma.insert(8).unwrap());
//!
//! let (found, _index) = pma.find(3);
//! assert!(found);
//! assert!(!pma.insert(3).unwrap()); // duplicate, not an error
//! ```

#![warn(missing_docs)]

pub mod bits;
pub mod element;
mod error;
mod find;
mod geometry;
mod pack_spread;
mod pma;
mod rebalance;
mod resize;
pub mod store;

pub use element::PmaElement;
pub use error::PmaError;
pub use geometry::{Geometry, LARGEST_MAX_SPARSITY, MAX_SIZE};
pub use pma::Pma;
pub use store::{BackingStore, CountingStore, VecStore};
