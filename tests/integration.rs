// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! Black-box integration tests for the public `Pma` API, exercised the way
//! an external consumer would use the crate (no access to internal slots).

use pma::{Pma, PmaError};

#[test]
fn end_to_end_scenario_from_spec() {
    let mut pma: Pma<i32> = Pma::new();

    assert!(pma.insert(5).unwrap());
    assert!(pma.insert(3).unwrap());
    assert!(pma.insert(8).unwrap());
    assert!(pma.insert(1).unwrap());
    assert!(pma.insert(7).unwrap());
    assert!(pma.insert(2).unwrap());
    assert!(pma.delete(5).unwrap());
    assert!(pma.insert(6).unwrap());
    assert!(pma.insert(4).unwrap());
    assert!(pma.delete(6).unwrap());
    assert!(pma.insert(9).unwrap());

    let (found, mut prev) = pma.find(1);
    assert!(found);

    for k in [2, 3, 4, 7, 8, 9] {
        let (found, idx) = pma.find(k);
        assert!(found);
        assert!(idx > prev);
        prev = idx;
    }

    for k in [5, 6] {
        assert!(!pma.find(k).0);
    }

    assert_eq!(pma.count(), 8);
}

#[test]
fn empty_container_boundary() {
    let mut pma: Pma<i32> = Pma::new();
    assert_eq!(pma.find(1), (false, -1));
    assert!(!pma.delete(1).unwrap());
    assert_eq!(pma.count(), 0);
}

#[test]
fn duplicate_insert_returns_false_not_error() {
    let mut pma: Pma<i32> = Pma::new();
    assert!(pma.insert(10).unwrap());
    assert_eq!(pma.insert(10), Ok(false));
}

#[test]
fn delete_missing_key_returns_false_not_error() {
    let mut pma: Pma<i32> = Pma::new();
    pma.insert(10).unwrap();
    assert_eq!(pma.delete(999), Ok(false));
}

#[test]
fn grows_well_beyond_initial_capacity_and_stays_correct() {
    let mut pma: Pma<i64> = Pma::new();
    let n = 2000i64;
    for k in 1..=n {
        assert!(pma.insert(k).unwrap());
    }
    assert_eq!(pma.count(), n as usize);
    for k in 1..=n {
        assert!(pma.find(k).0);
    }
    for k in (1..=n).step_by(7) {
        assert!(pma.delete(k).unwrap());
    }
    for k in 1..=n {
        let expected_present = k % 7 != 1;
        assert_eq!(pma.find(k).0, expected_present, "key {k}");
    }
}

#[test]
fn using_the_counting_store_still_behaves_correctly() {
    use pma::CountingStore;

    let mut pma: Pma<i32, CountingStore<i32>> = Pma::new();
    for k in [5, 3, 8, 1, 7, 2, 6, 4, 9, 10] {
        assert!(pma.insert(k).unwrap());
    }
    for k in [5, 3, 8, 1, 7, 2, 6, 4, 9, 10] {
        assert!(pma.find(k).0);
    }
}

#[test]
fn out_of_bounds_error_is_displayable() {
    let err = PmaError::OutOfBounds {
        index: 5,
        capacity: 4,
    };
    assert!(err.to_string().contains("out of bounds"));
}
