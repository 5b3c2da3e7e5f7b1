// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Geometry (C2): derives segment size, segment count, tree height, and
//! per-level density thresholds from `count` and `capacity`.

use crate::bits::{ceil_div, floor_log2, next_pow2};
use crate::error::PmaError;

/// `1 / DENSITY_LOW_LEAF`: the sparsest a leaf is ever allowed to get,
/// expressed as an integer multiplier. Also doubles as the number of slots
/// in the smallest possible leaf segment (`PMA_LARGEST_EMPTY_SEGMENT` in the
/// C source).
pub const LARGEST_MAX_SPARSITY: usize = 4;

const DENSITY_HIGH_ROOT: f64 = 0.75;
const DENSITY_HIGH_LEAF: f64 = 1.0;
const DENSITY_LOW_ROOT: f64 = 0.5;
const DENSITY_LOW_LEAF: f64 = 0.25;

/// Maximum backing-store capacity, `2^56` slots.
pub const MAX_SIZE: u64 = 1u64 << 56;

static_assertions::const_assert!(LARGEST_MAX_SPARSITY.is_power_of_two());
static_assertions::const_assert!(MAX_SIZE < u64::MAX / LARGEST_MAX_SPARSITY as u64);

/// The PMA's geometry: segment/tree shape and the per-level density slope
/// used to compute density bands on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Current leaf window size in slots (power of two).
    pub segment_size: usize,
    /// Current number of leaf windows (power of two).
    pub num_segments: usize,
    /// `floor(log2(num_segments)) + 1`: depth of the implicit binary tree.
    pub height: u32,
    density_high_step: f64,
    density_low_step: f64,
}

impl Geometry {
    /// The fixed initial geometry: capacity 16, a single level of 4
    /// segments of 4 slots each, height 3.
    ///
    /// Per §4.1/§4.5 of the spec, this geometry does not depend on any
    /// requested initial size — see `Pma::new_size`'s documentation for why.
    pub fn initial() -> Self {
        let segment_size = LARGEST_MAX_SPARSITY;
        let capacity = 1usize << segment_size; // 16
        let num_segments = capacity / segment_size;
        Self::from_segments(segment_size, num_segments)
    }

    fn from_segments(segment_size: usize, num_segments: usize) -> Self {
        let height = floor_log2(num_segments) + 1;
        Self {
            segment_size,
            num_segments,
            height,
            density_high_step: (DENSITY_HIGH_LEAF - DENSITY_HIGH_ROOT) / height as f64,
            density_low_step: (DENSITY_LOW_ROOT - DENSITY_LOW_LEAF) / height as f64,
        }
    }

    /// Total backing-store capacity `N = num_segments * segment_size`.
    pub fn capacity(&self) -> usize {
        self.num_segments * self.segment_size
    }

    /// Upper density bound at level `d` (0 = leaf, `height - 1` = root).
    pub fn high(&self, d: u32) -> f64 {
        DENSITY_HIGH_LEAF - (d as f64) * self.density_high_step
    }

    /// Lower density bound at level `d`.
    pub fn low(&self, d: u32) -> f64 {
        DENSITY_LOW_LEAF + (d as f64) * self.density_low_step
    }

    /// Computes the post-resize geometry for a store holding `count`
    /// occupied slots (§4.5 steps 2–3). Returns `PmaError::CapacityExceeded`
    /// if the resulting capacity would exceed `2^56`.
    ///
    /// Note: `num_segments` is always a power of two (it is produced by
    /// `next_pow2`), but the resulting `segment_size` is not guaranteed to
    /// be one — e.g. `count = 6` yields `segment_size = 12`. This mirrors
    /// the source's own `resize` formula, which multiplies
    /// `ceil_div(count, num_segments)` by `LARGEST_MAX_SPARSITY` with no
    /// power-of-two rounding, so invariant 2 ("`segment_size` is a power of
    /// two") does not actually hold post-resize in either the source or
    /// this port. See DESIGN.md's Resolved Open Questions.
    pub fn for_resize(count: usize) -> Result<Self, PmaError> {
        let ideal_segment = crate::bits::ceil_log2(count.max(1));
        let mut num_segments = next_pow2(ceil_div(count.max(1), ideal_segment));
        num_segments = num_segments.max(1);
        let segment_size = ceil_div(count.max(1), num_segments);

        let new_capacity = (LARGEST_MAX_SPARSITY * segment_size * num_segments) as u64;
        if new_capacity > MAX_SIZE {
            return Err(PmaError::CapacityExceeded {
                requested: new_capacity,
                max: MAX_SIZE,
            });
        }

        let segment_size = LARGEST_MAX_SPARSITY * segment_size;
        Ok(Self::from_segments(segment_size, num_segments))
    }
}
