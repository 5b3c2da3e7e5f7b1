// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! The `Pma` container (C7 entry points) tying together Geometry, the
//! Backing Store, and the Pack/Spread/Rebalance/Resize/Find primitives.

use crate::element::PmaElement;
use crate::error::PmaError;
use crate::find::find;
use crate::geometry::Geometry;
use crate::rebalance::rebalance;
use crate::store::{BackingStore, VecStore};

/// A Packed Memory Array: an ordered, in-memory associative container over
/// unique keys of type `T`, stored in a gapped backing array `S`.
///
/// `S` defaults to [`VecStore`]; swap in [`crate::store::CountingStore`] to
/// instrument reads/writes for benchmarking, as the teacher crate's
/// `LinearTimeOram<DB>` does by varying `DB`.
#[derive(Debug, Clone)]
pub struct Pma<T: PmaElement, S: BackingStore<T> = VecStore<T>> {
    pub(crate) store: S,
    pub(crate) geometry: Geometry,
    pub(crate) count: usize,
}

impl<T: PmaElement, S: BackingStore<T>> Pma<T, S> {
    /// Creates a PMA at the default initial capacity (16 slots).
    pub fn new() -> Self {
        let geometry = Geometry::initial();
        Self {
            store: S::init_size_fixed(geometry.capacity()),
            geometry,
            count: 0,
        }
    }

    /// Creates a PMA, notionally sized for `requested_size` elements.
    ///
    /// Per §4.1 of the spec (see Resolved Open Question 1 in `DESIGN.md`),
    /// the initial geometry is always the fixed minimum — segment size 4,
    /// 4 segments, capacity 16 — regardless of `requested_size`. The
    /// parameter is accepted for API-table fidelity with the original
    /// `new_size`, and so callers migrating from it keep compiling, but it
    /// has no effect on the constructed geometry: the original C computes
    /// `num_segments`/`height` from its fixed `1 << PMA_LARGEST_EMPTY_SEGMENT`
    /// regardless of the argument passed to `init_size`, and following that
    /// literally for small `requested_size` would allocate a store smaller
    /// than the geometry it was sized for, breaking invariant 2.
    pub fn new_size(_requested_size: usize) -> Self {
        Self::new()
    }

    /// Total backing-store capacity.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Binary searches for `key`; see [`find`] for the exact contract.
    pub fn find(&self, key: T) -> (bool, i64) {
        find(&self.store, key)
    }

    /// Inserts `key`. Returns `Ok(false)` if `key` is already present
    /// (§6.1: "false on duplicate"), `Ok(true)` on success, or `Err` if a
    /// rebalance/resize invariant is violated or a resize would exceed the
    /// maximum capacity.
    pub fn insert(&mut self, key: T) -> Result<bool, PmaError> {
        let (found, pred) = self.find(key);
        if found {
            return Ok(false);
        }
        self.insert_after(pred, key)?;
        Ok(true)
    }

    /// Inserts `key` immediately after slot `i` (`i == -1` means "before
    /// everything"). Precondition: slot `i`, if `i >= 0`, is occupied.
    ///
    /// Searches rightward from `i+1` for the nearest empty slot; if found,
    /// shifts `[i+1, j)` one slot right and writes `key` at `i+1`. Otherwise
    /// searches leftward from `i-1`; if found, shifts `(j, i]` one slot left
    /// and writes `key` at `i`. If the store is entirely full, neither
    /// direction finds a gap — Resolved Open Question 2 treats this as a
    /// defensive capacity error rather than silently skipping the write,
    /// since the density invariants should make it unreachable in practice.
    pub fn insert_after(&mut self, i: i64, key: T) -> Result<(), PmaError> {
        debug_assert!(i >= -1 && i < self.store.size() as i64);

        let n = self.store.size();
        let mut logical_index = i;

        let mut j = i + 1;
        while (j as usize) < n && !self.store.get_unchecked(j as usize).is_empty() {
            j += 1;
        }

        if (j as usize) < n {
            while j > i + 1 {
                let v = self.store.get_unchecked((j - 1) as usize);
                self.store.set_unchecked(j as usize, v);
                j -= 1;
            }
            self.store.set_unchecked((i + 1) as usize, key);
            logical_index = i + 1;
        } else {
            let mut j = i - 1;
            while j >= 0 && !self.store.get_unchecked(j as usize).is_empty() {
                j -= 1;
            }
            if j >= 0 {
                while j < i {
                    let next = self.store.get_unchecked((j + 1) as usize);
                    self.store.set_unchecked(j as usize, next);
                    j += 1;
                }
                self.store.set_unchecked(i as usize, key);
            } else {
                return Err(PmaError::CapacityExceeded {
                    requested: self.store.size() as u64,
                    max: crate::geometry::MAX_SIZE,
                });
            }
        }

        self.count += 1;
        rebalance(self, logical_index as usize)
    }

    /// Deletes `key`. Returns `Ok(false)` if `key` is not present.
    pub fn delete(&mut self, key: T) -> Result<bool, PmaError> {
        let (found, i) = self.find(key);
        if !found {
            return Ok(false);
        }
        self.delete_at(i as usize)?;
        Ok(true)
    }

    /// Empties slot `i`, decrements `count`, and rebalances around `i`.
    pub fn delete_at(&mut self, i: usize) -> Result<(), PmaError> {
        if !self.store.set(i, T::EMPTY) {
            return Err(PmaError::OutOfBounds {
                index: i,
                capacity: self.store.size(),
            });
        }
        self.count -= 1;
        rebalance(self, i)
    }

    /// Releases the backing store. Equivalent to dropping the `Pma`; kept
    /// as an explicit method for parity with the C source's `destroy`.
    pub fn destroy(mut self) {
        self.store.destroy_data();
    }

    /// Returns the key at slot `i` if occupied, `None` if empty or out of
    /// bounds. Exposed crate-private for property tests that need to walk
    /// the gapped array directly.
    #[cfg(test)]
    pub(crate) fn store_for_test(&self, i: usize) -> Option<T> {
        self.store.get(i).filter(|v| !v.is_empty())
    }
}

impl<T: PmaElement, S: BackingStore<T>> Default for Pma<T, S> {
    fn default() -> Self {
        Self::new()
    }
}
