// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! The element-type customization point (§6.3).
//!
//! The C source supplies `PMA_LESS_THAN`, `PMA_EQUALS`, and `PMA_EMPTY_VALUE`
//! as macros, textually expanded once per `PMA_NAME`/`PMA_TYPE` instantiation.
//! Here the same three customization points are a single trait, implemented
//! per concrete type with the `duplicate` crate the way the teacher crate
//! generates one `Oram` impl across several backing types instead of
//! hand-writing each.

use duplicate::duplicate_item;

/// A type that can be stored in a [`crate::Pma`].
///
/// Implementors supply a total order (`less_than`), an equality relation
/// consistent with it (`key_eq`), and a distinguished empty sentinel
/// (`EMPTY`) that can never collide with a real key.
pub trait PmaElement: Copy {
    /// The sentinel value denoting an empty slot.
    const EMPTY: Self;

    /// `self < other` under this type's total order.
    fn less_than(&self, other: &Self) -> bool;

    /// `self == other` under this type's equality relation.
    fn key_eq(&self, other: &Self) -> bool;

    /// Whether `self` is the empty sentinel.
    fn is_empty(&self) -> bool {
        self.key_eq(&Self::EMPTY)
    }
}

#[duplicate_item(
    int_type;
    [i8]; [i16]; [i32]; [i64]; [i128]; [isize];
    [u8]; [u16]; [u32]; [u64]; [u128]; [usize];
)]
impl PmaElement for int_type {
    const EMPTY: Self = 0;

    fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}
