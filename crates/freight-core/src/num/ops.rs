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

//! By-value arithmetic traits mirroring the primitive `checked_*` and
//! `saturating_*` methods, so generic code can call them without going
//! through references.
//!
//! ```rust
//! use freight_core::num::ops::{CheckedAddVal, CheckedMulVal, SaturatingAddVal};
//!
//! assert_eq!(120_i8.checked_add_val(7), Some(127));
//! assert_eq!(120_i8.checked_add_val(8), None);
//! assert_eq!(16_i8.checked_mul_val(8), None);
//! assert_eq!(u64::MAX.saturating_add_val(1), u64::MAX);
//! ```

use core::ops::{Add, Mul, Sub};

/// Checked addition by value; `None` on overflow.
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value; `None` on overflow.
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value; `None` on overflow.
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Saturating addition by value, clamped to the type bounds.
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    fn saturating_add_val(self, v: Self) -> Self;
}

macro_rules! impl_val_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: $t) -> $t {
                    <$t>::saturating_add(self, v)
                }
            }
        )*
    };
}

impl_val_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_matches_intrinsic() {
        assert_eq!(i32::MAX.checked_add_val(1), None);
        assert_eq!(40_i32.checked_add_val(2), Some(42));
        assert_eq!(i64::MIN.checked_add_val(-1), None);
    }

    #[test]
    fn test_checked_sub_matches_intrinsic() {
        assert_eq!(0_u8.checked_sub_val(1), None);
        assert_eq!(10_i16.checked_sub_val(25), Some(-15));
    }

    #[test]
    fn test_checked_mul_matches_intrinsic() {
        assert_eq!(i64::MAX.checked_mul_val(2), None);
        assert_eq!(25_i64.checked_mul_val(16), Some(400));
        assert_eq!(0_i8.checked_mul_val(i8::MIN), Some(0));
    }

    #[test]
    fn test_saturating_add_clamps() {
        assert_eq!(u64::MAX.saturating_add_val(5), u64::MAX);
        assert_eq!(i8::MIN.saturating_add_val(-1), i8::MIN);
        assert_eq!(3_u64.saturating_add_val(4), 7);
    }
}
