// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Pack / Spread (C3): in-place compaction and redistribution of occupied
//! slots within a half-open window `[from, to)`.
//!
//! Both are free functions over any `BackingStore` rather than methods on
//! `Pma`, so Rebalance and Resize can invoke them on the same window without
//! borrowing the rest of the container.

use crate::element::PmaElement;
use crate::error::PmaError;
use crate::store::BackingStore;

/// Moves all occupied slots in `[from, to)` to the prefix `[from, from+n)`
/// and writes the empty sentinel to `[from+n, to)`. `n` is the precondition:
/// the caller asserts the window already holds exactly `n` occupied slots.
///
/// Two-pointer scan: `write` advances only on occupied slots, `read` on
/// every slot. Returns `Err(InternalInvariantViolation)` if the postcondition
/// `n == write - from` fails — a debugging check, per §4.3.
pub fn pack<T: PmaElement, S: BackingStore<T>>(
    store: &mut S,
    from: usize,
    to: usize,
    n: usize,
) -> Result<(), PmaError> {
    debug_assert!(from < to && to <= store.size());

    let mut write = from;
    for read in from..to {
        if !store.get_unchecked(read).is_empty() {
            if read > write {
                let v = store.get_unchecked(read);
                store.set_unchecked(write, v);
                store.set_unchecked(read, T::EMPTY);
            }
            write += 1;
        }
    }

    let found = write - from;
    if found != n {
        log::debug!("pack postcondition failed in [{from}, {to}): expected {n}, found {found}");
        return Err(PmaError::InternalInvariantViolation {
            from,
            to,
            expected: n,
            found,
        });
    }
    Ok(())
}

/// Redistributes the `n` occupied slots packed at the prefix `[from, from+n)`
/// evenly across `[from, to)`, using 8-bit fixed-point arithmetic for the
/// step size.
///
/// Proceeds **right-to-left**: the destination slot is always to the right
/// of any still-unmoved source slot, so no temporary buffer is needed. `n`
/// must be positive; callers never invoke Spread on an empty window.
pub fn spread<T: PmaElement, S: BackingStore<T>>(
    store: &mut S,
    from: usize,
    to: usize,
    n: usize,
) -> Result<(), PmaError> {
    debug_assert!(from < to && to <= store.size());
    debug_assert!(n > 0);

    let capacity = to - from;
    let frequency = (capacity << 8) / n;

    let mut read = from + n - 1;
    let mut write = (to << 8) - frequency;

    while (write >> 8) > read {
        let v = store.get_unchecked(read);
        store.set_unchecked(write >> 8, v);
        store.set_unchecked(read, T::EMPTY);
        if read == from {
            break;
        }
        read -= 1;
        write -= frequency;
    }
    Ok(())
}
