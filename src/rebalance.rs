// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Rebalance (C4): walks the implicit binary tree of windows around a
//! modified index, locating the smallest window whose density lies inside
//! the level's thresholds; invokes Pack+Spread, or escalates to Resize.

use crate::element::PmaElement;
use crate::error::PmaError;
use crate::pack_spread::{pack, spread};
use crate::pma::Pma;
use crate::resize::resize;
use crate::store::BackingStore;

/// A density equal to `high(d)` is rejected at level `d` within this
/// tolerance (the search continues upward); a density equal to `low(d)` is
/// accepted. See §4.4's "threshold semantics".
const DENSITY_EPSILON: f64 = f64::EPSILON;

/// Runs Rebalance for the slot at index `i`, which was just inserted into or
/// deleted from.
///
/// Starting at the leaf level, accumulates `occupied` — the count of
/// non-empty slots in the window containing `i` — by extending outward from
/// `i` one slot at a time; each level's window is a strict superset of the
/// previous, so the count only ever grows. The first level whose density
/// lies strictly inside `(low(d), high(d))` gets Pack+Spread; if no level up
/// to and including the root qualifies, escalates to Resize.
pub fn rebalance<T: PmaElement, S: BackingStore<T>>(
    pma: &mut Pma<T, S>,
    i: usize,
) -> Result<(), PmaError> {
    let geometry = pma.geometry;

    let mut occupied: u64 = if pma.store.get_unchecked(i).is_empty() {
        0
    } else {
        1
    };
    let mut left = i as i64 - 1;
    let mut right = i as i64 + 1;

    for d in 0..geometry.height {
        let window_size = geometry.segment_size * (1usize << d);
        let window = i / window_size;
        let window_start = window * window_size;
        let window_end = window_start + window_size;

        while left >= window_start as i64 {
            if !pma.store.get_unchecked(left as usize).is_empty() {
                occupied += 1;
            }
            left -= 1;
        }
        while right < window_end as i64 {
            if !pma.store.get_unchecked(right as usize).is_empty() {
                occupied += 1;
            }
            right += 1;
        }

        let density = occupied as f64 / window_size as f64;
        let high = geometry.high(d);
        let low = geometry.low(d);

        let below_high = high - density > DENSITY_EPSILON;
        let at_or_above_low = density >= low || (density - low).abs() < DENSITY_EPSILON;

        if at_or_above_low && below_high {
            log::debug!(
                "rebalance: level {d} in band (density {density:.4} in ({low:.4}, {high:.4})), window [{window_start}, {window_end})"
            );
            pack(&mut pma.store, window_start, window_end, occupied as usize)?;
            spread(&mut pma.store, window_start, window_end, occupied as usize)?;
            return Ok(());
        }
    }

    log::debug!("rebalance: no level in band for index {i}, escalating to resize");
    resize(pma)
}
