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

/// Number of bits in a byte. Rust only targets platforms with 8-bit bytes.
pub const BITS_PER_BYTE: usize = 8;

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

impl_const_for!(Zero, ZERO, 0, u8, u16, u32, u64, u128, usize);
impl_const_for!(Zero, ZERO, 0, i8, i16, i32, i64, i128, isize);

impl_const_for!(PlusOne, PLUS_ONE, 1, u8, u16, u32, u64, u128, usize);
impl_const_for!(PlusOne, PLUS_ONE, 1, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_constants() {
        assert_eq!(<u8 as Zero>::ZERO, 0u8);
        assert_eq!(<i64 as Zero>::ZERO, 0i64);
        assert_eq!(<usize as Zero>::ZERO, 0usize);
    }

    #[test]
    fn test_plus_one_constants() {
        assert_eq!(<u32 as PlusOne>::PLUS_ONE, 1u32);
        assert_eq!(<i8 as PlusOne>::PLUS_ONE, 1i8);
        assert_eq!(<i128 as PlusOne>::PLUS_ONE, 1i128);
    }

    #[test]
    fn test_bits_per_byte() {
        assert_eq!(BITS_PER_BYTE, u8::BITS as usize);
    }
}
