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

//! # Computed Integer Bounds
//!
//! Derives the minimum and maximum of every primitive integer from its bit
//! width alone, assuming two's complement.
//!
//! - Signed minimum: a single set bit in the sign position.
//! - Signed maximum: the complement of that bit pattern.
//! - Unsigned minimum: zero.
//! - Unsigned maximum: the complement of zero.
//!
//! Signed bounds are built on the unsigned type of the same width and then
//! reinterpreted, so no shift ever touches a signed value. The shift amount is
//! always `BIT_WIDTH - 1`, strictly below the width of the type.

use crate::num::{
    constants::{PlusOne, Zero},
    width::StorageWidth,
};
use num_traits::{PrimInt, Unsigned};

/// Returns the bit pattern with only the most significant bit set.
///
/// # Examples
///
/// ```rust
/// # use intrange_core::num::bounds::sign_bit;
/// assert_eq!(sign_bit::<u8>(), 0x80);
/// assert_eq!(sign_bit::<u32>(), 0x8000_0000);
/// ```
#[inline(always)]
pub fn sign_bit<U>() -> U
where
    U: PrimInt + Unsigned + PlusOne + StorageWidth,
{
    U::PLUS_ONE << (U::BIT_WIDTH as usize - 1)
}

/// A trait for integer types whose bounds can be computed from their width.
///
/// # Examples
///
/// ```rust
/// # use intrange_core::num::bounds::ComputedBounds;
/// assert_eq!(i8::computed_min(), -128);
/// assert_eq!(i8::computed_max(), 127);
/// assert_eq!(u16::computed_min(), 0);
/// assert_eq!(u16::computed_max(), 65535);
/// ```
pub trait ComputedBounds: Sized {
    /// The smallest value representable by the implementing type.
    fn computed_min() -> Self;

    /// The largest value representable by the implementing type.
    fn computed_max() -> Self;
}

macro_rules! impl_signed_bounds {
    ($($s:ty => $u:ty),+) => {
        $(
            const _: () = assert!(<$s as StorageWidth>::BIT_WIDTH == <$u as StorageWidth>::BIT_WIDTH);

            impl ComputedBounds for $s {
                #[inline(always)]
                fn computed_min() -> Self {
                    sign_bit::<$u>() as $s
                }

                #[inline(always)]
                fn computed_max() -> Self {
                    (!sign_bit::<$u>()) as $s
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_bounds {
    ($($u:ty),+) => {
        $(
            impl ComputedBounds for $u {
                #[inline(always)]
                fn computed_min() -> Self {
                    <$u as Zero>::ZERO
                }

                #[inline(always)]
                fn computed_max() -> Self {
                    !<$u as Zero>::ZERO
                }
            }
        )+
    };
}

impl_signed_bounds!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize
);

impl_unsigned_bounds!(u8, u16, u32, u64, u128, usize);
