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

//! Storage width of primitive integers.
//!
//! Widths are never hard-coded per type. They are derived from the storage
//! size reported by `core::mem::size_of` multiplied by `BITS_PER_BYTE`, so the
//! answers follow whatever layout the target gives each type.

use crate::num::constants::BITS_PER_BYTE;

/// A trait exposing the storage size of an integer type in bytes and bits.
///
/// # Examples
///
/// ```rust
/// # use intrange_core::num::width::StorageWidth;
/// assert_eq!(<u8 as StorageWidth>::BYTES, 1);
/// assert_eq!(<i32 as StorageWidth>::BIT_WIDTH, 32);
/// assert_eq!(<u64 as StorageWidth>::BIT_WIDTH, 64);
/// ```
pub trait StorageWidth: Sized {
    /// Number of bytes occupied by a value of the implementing type.
    const BYTES: usize = core::mem::size_of::<Self>();

    /// Number of bits occupied by a value of the implementing type.
    const BIT_WIDTH: u32 = (Self::BYTES * BITS_PER_BYTE) as u32;
}

macro_rules! impl_storage_width_for {
    ($($t:ty),+) => {
        $(
            impl StorageWidth for $t {}
        )+
    };
}

impl_storage_width_for!(u8, u16, u32, u64, u128, usize);
impl_storage_width_for!(i8, i16, i32, i64, i128, isize);
