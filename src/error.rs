// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Failure modes for PMA operations.

/// Errors that can arise from a [`crate::Pma`] operation.
///
/// `DuplicateKey` and `NotFound` are deliberately not represented here: they
/// are ordinary, expected outcomes of `insert`/`delete` and are surfaced as
/// `Ok(false)` instead, the way the original boolean-return API treated them.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmaError {
    /// An index passed to a checked accessor fell outside `[0, size)`.
    #[error("index {index} out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The store's capacity at the time of the access.
        capacity: usize,
    },

    /// A resize would require more than `2^56` slots.
    #[error("resize would require {requested} slots, exceeding the maximum of {max}")]
    CapacityExceeded {
        /// The capacity the resize computed.
        requested: u64,
        /// The ceiling (`2^56`).
        max: u64,
    },

    /// A `pack`/`spread` postcondition failed to hold; indicates a bug in
    /// the rebalance machinery rather than a caller error.
    #[error("pack/spread postcondition violated in window [{from}, {to}): expected {expected} occupied slots, found {found}")]
    InternalInvariantViolation {
        /// Window start (inclusive).
        from: usize,
        /// Window end (exclusive).
        to: usize,
        /// The occupied-slot count the caller expected.
        expected: usize,
        /// The occupied-slot count actually produced.
        found: usize,
    },

    /// The backing store refused to (re)allocate.
    #[error("backing store allocation failed for {requested} slots")]
    AllocationFailure {
        /// The capacity that failed to allocate.
        requested: usize,
    },
}

static_assertions::const_assert!(std::mem::size_of::<PmaError>() <= 64);
