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

//! # Integral Categories
//!
//! The C integral types whose ranges are reported, each bound to the platform
//! alias from `libc`. Widths of `long` in particular differ between targets
//! (32 bits on Windows, 64 bits on most other 64-bit systems), so every query
//! goes through the alias rather than a fixed Rust type.
//!
//! The default report covers six categories in a fixed order
//! (`IntegralCategory::REPORTED`). The short and remaining unsigned types are
//! catalogued as well and available through `IntegralCategory::ALL`.

use crate::line::RangeSource;
use crate::range::IntegralRange;
use intrange_core::num::width::StorageWidth;
use libc::{
    c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong, c_ushort,
};

/// A C integral type, identified by its signedness and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntegralCategory {
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
}

/// Binds `$t` to the platform C type of `$category` and evaluates `$body`.
macro_rules! with_c_type {
    ($category:expr, $t:ident => $body:expr) => {
        match $category {
            IntegralCategory::SignedChar => {
                type $t = c_schar;
                $body
            }
            IntegralCategory::UnsignedChar => {
                type $t = c_uchar;
                $body
            }
            IntegralCategory::Short => {
                type $t = c_short;
                $body
            }
            IntegralCategory::UnsignedShort => {
                type $t = c_ushort;
                $body
            }
            IntegralCategory::Int => {
                type $t = c_int;
                $body
            }
            IntegralCategory::UnsignedInt => {
                type $t = c_uint;
                $body
            }
            IntegralCategory::Long => {
                type $t = c_long;
                $body
            }
            IntegralCategory::UnsignedLong => {
                type $t = c_ulong;
                $body
            }
            IntegralCategory::LongLong => {
                type $t = c_longlong;
                $body
            }
            IntegralCategory::UnsignedLongLong => {
                type $t = c_ulonglong;
                $body
            }
        }
    };
}

impl IntegralCategory {
    /// The categories of the default report, in output order.
    pub const REPORTED: [IntegralCategory; 6] = [
        IntegralCategory::SignedChar,
        IntegralCategory::UnsignedChar,
        IntegralCategory::Int,
        IntegralCategory::UnsignedInt,
        IntegralCategory::Long,
        IntegralCategory::LongLong,
    ];

    /// Every catalogued category, ordered by rank and then signedness.
    pub const ALL: [IntegralCategory; 10] = [
        IntegralCategory::SignedChar,
        IntegralCategory::UnsignedChar,
        IntegralCategory::Short,
        IntegralCategory::UnsignedShort,
        IntegralCategory::Int,
        IntegralCategory::UnsignedInt,
        IntegralCategory::Long,
        IntegralCategory::UnsignedLong,
        IntegralCategory::LongLong,
        IntegralCategory::UnsignedLongLong,
    ];

    /// The label printed in front of each report line.
    ///
    /// `Int` is labelled `"int "` with a trailing space; existing consumers of
    /// the report match on that exact text.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            IntegralCategory::SignedChar => "signed char",
            IntegralCategory::UnsignedChar => "unsigned char",
            IntegralCategory::Short => "short",
            IntegralCategory::UnsignedShort => "unsigned short",
            IntegralCategory::Int => "int ",
            IntegralCategory::UnsignedInt => "unsigned int",
            IntegralCategory::Long => "long",
            IntegralCategory::UnsignedLong => "unsigned long",
            IntegralCategory::LongLong => "long long",
            IntegralCategory::UnsignedLongLong => "unsigned long long",
        }
    }

    /// Returns `true` for the signed categories.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            IntegralCategory::SignedChar
                | IntegralCategory::Short
                | IntegralCategory::Int
                | IntegralCategory::Long
                | IntegralCategory::LongLong
        )
    }

    /// Storage size of the platform type in bytes.
    #[inline]
    pub fn size_in_bytes(self) -> usize {
        with_c_type!(self, T => <T as StorageWidth>::BYTES)
    }

    /// Storage size of the platform type in bits.
    #[inline]
    pub fn bit_width(self) -> u32 {
        with_c_type!(self, T => <T as StorageWidth>::BIT_WIDTH)
    }

    /// The range published by the platform limits.
    #[inline]
    pub fn platform_range(self) -> IntegralRange {
        with_c_type!(self, T => IntegralRange::platform::<T>())
    }

    /// The range computed from the bit width.
    #[inline]
    pub fn computed_range(self) -> IntegralRange {
        with_c_type!(self, T => IntegralRange::computed::<T>())
    }

    /// The range obtained from `source`.
    #[inline]
    pub fn range(self, source: RangeSource) -> IntegralRange {
        match source {
            RangeSource::Platform => self.platform_range(),
            RangeSource::Computed => self.computed_range(),
        }
    }
}

impl std::fmt::Display for IntegralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::IntegralCategory;

    fn expected_range(category: IntegralCategory) -> (i128, i128) {
        let bits = category.size_in_bytes() as u32 * 8;
        if category.is_signed() {
            (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
        } else {
            (0, (1i128 << bits) - 1)
        }
    }

    #[test]
    fn test_platform_equals_computed_for_every_category() {
        for category in IntegralCategory::ALL {
            assert_eq!(
                category.platform_range(),
                category.computed_range(),
                "{} ranges differ",
                category
            );
        }
    }

    #[test]
    fn test_ranges_follow_storage_size() {
        for category in IntegralCategory::ALL {
            let (min, max) = expected_range(category);
            let range = category.computed_range();
            assert_eq!(range.min(), min, "{} minimum", category);
            assert_eq!(range.max(), max, "{} maximum", category);
        }
    }

    #[test]
    fn test_char_ranges() {
        let r = IntegralCategory::SignedChar.platform_range();
        assert_eq!((r.min(), r.max()), (-128, 127));

        let r = IntegralCategory::UnsignedChar.computed_range();
        assert_eq!((r.min(), r.max()), (0, 255));
    }

    #[test]
    fn test_bit_width_is_eight_times_size() {
        for category in IntegralCategory::ALL {
            assert_eq!(category.bit_width() as usize, category.size_in_bytes() * 8);
        }
    }

    #[test]
    fn test_signedness_agrees_with_platform_minimum() {
        for category in IntegralCategory::ALL {
            assert_eq!(
                category.is_signed(),
                category.platform_range().min() < 0,
                "{}",
                category
            );
        }
    }

    #[test]
    fn test_reported_order_and_labels() {
        let labels: Vec<&str> = IntegralCategory::REPORTED
            .iter()
            .map(|c| c.label())
            .collect();
        assert_eq!(
            labels,
            [
                "signed char",
                "unsigned char",
                "int ",
                "unsigned int",
                "long",
                "long long"
            ]
        );
    }

    #[test]
    fn test_display_trims_label() {
        assert_eq!(IntegralCategory::Int.to_string(), "int");
        assert_eq!(IntegralCategory::LongLong.to_string(), "long long");
    }

    #[test]
    fn test_rank_widths_are_monotonic() {
        let sizes: Vec<usize> = [
            IntegralCategory::SignedChar,
            IntegralCategory::Short,
            IntegralCategory::Int,
            IntegralCategory::Long,
            IntegralCategory::LongLong,
        ]
        .iter()
        .map(|c| c.size_in_bytes())
        .collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }
}
