//! Modular Arithmetic
//!
//! Wrap-around integer math for pitch-class calculations, plus the small
//! combinatorial helpers the enharmonic naming search is built on.

use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

use crate::OCTAVE_DIVISIONS;

/// Errors for out-of-domain arguments to the core value types.
#[derive(Debug, Error)]
pub enum DomainError {
    /// `wrap` was called with two equal bounds, leaving no interval to wrap
    /// into.
    #[error("wrap bounds must have a width greater than zero (got {bound} twice)")]
    ZeroWidthBounds {
        /// The value supplied for both bounds.
        bound: i32,
    },

    /// An interval-set pattern had bits set outside the octave.
    #[error("interval set binary {binary:#b} is out of range (maximum {max:#b})")]
    BinaryOutOfRange {
        /// The rejected pattern.
        binary: u32,
        /// The largest representable pattern.
        max: u32,
    },
}

/// Shift `value` by whole multiples of the bounds' width until it lies
/// within `[min(bound_a, bound_b), max(bound_a, bound_b))`.
///
/// The interval is half open: wrapping an exact multiple of the width lands
/// on the lower bound, never the upper.
pub fn wrap(value: i32, bound_a: i32, bound_b: i32) -> Result<i32, DomainError> {
    let min = bound_a.min(bound_b);
    let max = bound_a.max(bound_b);
    if min == max {
        return Err(DomainError::ZeroWidthBounds { bound: bound_a });
    }
    Ok(min + (value - min).rem_euclid(max - min))
}

/// Wrap `value` into `[0, OCTAVE_DIVISIONS)`, the canonical pitch-class
/// range. Infallible because the octave division count is a nonzero
/// constant.
pub fn wrap_to_octave(value: i32) -> usize {
    value.rem_euclid(OCTAVE_DIVISIONS as i32) as usize
}

/// Ordered cartesian product of the given lists.
///
/// Tuples are generated with the first list varying slowest and the last
/// varying fastest: `[a, b] × [c, d]` yields `[a, c], [a, d], [b, c],
/// [b, d]`. The product of zero lists is one empty tuple; any empty input
/// list makes the whole product empty. The naming search breaks scoring
/// ties by taking the first winner in this order, so the order is part of
/// the contract.
pub fn cartesian_product<T: Copy>(lists: &[&[T]]) -> Vec<Vec<T>> {
    let mut tuples = vec![Vec::new()];
    for list in lists {
        let mut extended = Vec::with_capacity(tuples.len() * list.len());
        for prefix in &tuples {
            for &item in *list {
                let mut tuple = Vec::with_capacity(prefix.len() + 1);
                tuple.extend_from_slice(prefix);
                tuple.push(item);
                extended.push(tuple);
            }
        }
        tuples = extended;
    }
    tuples
}

/// Count how many times each value occurs in `values`.
pub fn value_frequency<T: Copy + Eq + Hash>(values: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
