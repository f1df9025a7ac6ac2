// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Quantity Trait
//!
//! Supply, demand and cost values all share one integer type. `Quantity`
//! collects the bounds the model and heuristics need so signatures stay
//! short: `T: Quantity` instead of a dozen separate bounds.
//!
//! Implemented for the signed primitives `i8`, `i16`, `i32`, `i64` and
//! `isize`. Costs may legitimately be negative (a subsidised lane), so the
//! type is signed; non-negativity of supply and demand is checked when a
//! model is built. `i128` is left out because the heuristics never need the
//! range and it is markedly slower on most targets.

use crate::num::ops::{CheckedAddVal, CheckedMulVal, CheckedSubVal};
use num_traits::{FromPrimitive, PrimInt, Signed};
use std::str::FromStr;

/// Numeric bound for supply, demand and cost values.
pub trait Quantity:
    PrimInt
    + Signed
    + FromPrimitive
    + FromStr
    + std::fmt::Debug
    + std::fmt::Display
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + Send
    + Sync
    + 'static
{
}

macro_rules! impl_quantity {
    ($($t:ty),* $(,)?) => {
        $(impl Quantity for $t {})*
    };
}

impl_quantity!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_checked<T: Quantity>(values: &[T]) -> Option<T> {
        values
            .iter()
            .try_fold(T::zero(), |acc, &v| acc.checked_add_val(v))
    }

    #[test]
    fn test_signed_primitives_are_quantities() {
        assert_eq!(sum_checked(&[1_i8, 2, 3]), Some(6));
        assert_eq!(sum_checked(&[1_i16, -2]), Some(-1));
        assert_eq!(sum_checked(&[7_i32]), Some(7));
        assert_eq!(sum_checked::<i64>(&[]), Some(0));
        assert_eq!(sum_checked(&[1_isize, 1]), Some(2));
    }

    #[test]
    fn test_overflow_is_reported_generically() {
        assert_eq!(sum_checked(&[100_i8, 100]), None);
    }
}
