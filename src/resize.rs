// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Resize (C5): global rebuild performed when no window up to and including
//! the root is within its density band.

use crate::element::PmaElement;
use crate::error::PmaError;
use crate::geometry::Geometry;
use crate::pack_spread::{pack, spread};
use crate::pma::Pma;
use crate::store::BackingStore;

/// Packs all occupied slots to the prefix, computes new geometry from the
/// occupied count, grows the backing store, and spreads uniformly across
/// the new capacity (§4.5).
pub fn resize<T: PmaElement, S: BackingStore<T>>(pma: &mut Pma<T, S>) -> Result<(), PmaError> {
    let count = pma.count;
    let old_size = pma.store.size();

    pack(&mut pma.store, 0, old_size, count)?;

    let geometry = Geometry::for_resize(count)?;
    let new_capacity = geometry.capacity();

    log::debug!(
        "resize: count {count}, old capacity {old_size} -> new capacity {new_capacity} (segment_size {}, num_segments {}, height {})",
        geometry.segment_size,
        geometry.num_segments,
        geometry.height
    );

    pma.store.resize_fixed(new_capacity);
    for i in count..new_capacity {
        pma.store.set_unchecked(i, T::EMPTY);
    }

    pma.geometry = geometry;

    if count > 0 {
        spread(&mut pma.store, 0, new_capacity, count)?;
    }

    Ok(())
}
