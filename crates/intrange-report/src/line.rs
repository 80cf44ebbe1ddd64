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

use crate::category::IntegralCategory;
use crate::range::IntegralRange;

/// Where the range on a report line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSource {
    /// The limits published by the platform.
    Platform,
    /// Bounds computed from the storage width.
    Computed,
}

impl RangeSource {
    /// Both sources, in the order they are reported.
    pub const BOTH: [RangeSource; 2] = [RangeSource::Platform, RangeSource::Computed];
}

impl std::fmt::Display for RangeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSource::Platform => write!(f, "platform"),
            RangeSource::Computed => write!(f, "computed"),
        }
    }
}

/// A single line of the report: `"<label>: <min> to <max>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeLine {
    category: IntegralCategory,
    source: RangeSource,
    range: IntegralRange,
}

impl RangeLine {
    /// Creates the line for `category`, evaluating its range from `source`.
    #[inline]
    pub fn new(category: IntegralCategory, source: RangeSource) -> Self {
        Self {
            category,
            source,
            range: category.range(source),
        }
    }

    /// Creates the line for `category` with an already evaluated range.
    #[inline]
    pub(crate) fn with_range(
        category: IntegralCategory,
        source: RangeSource,
        range: IntegralRange,
    ) -> Self {
        Self {
            category,
            source,
            range,
        }
    }

    #[inline(always)]
    pub fn category(&self) -> IntegralCategory {
        self.category
    }

    #[inline(always)]
    pub fn source(&self) -> RangeSource {
        self.source
    }

    #[inline(always)]
    pub fn range(&self) -> IntegralRange {
        self.range
    }
}

impl std::fmt::Display for RangeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category.label(), self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let line = RangeLine::new(IntegralCategory::SignedChar, RangeSource::Platform);
        assert_eq!(line.to_string(), "signed char: -128 to 127");

        let line = RangeLine::new(IntegralCategory::UnsignedChar, RangeSource::Computed);
        assert_eq!(line.to_string(), "unsigned char: 0 to 255");
    }

    #[test]
    fn test_int_label_keeps_trailing_space() {
        let line = RangeLine::new(IntegralCategory::Int, RangeSource::Computed);
        assert!(line.to_string().starts_with("int : "));
    }

    #[test]
    fn test_accessors() {
        let line = RangeLine::new(IntegralCategory::UnsignedInt, RangeSource::Computed);
        assert_eq!(line.category(), IntegralCategory::UnsignedInt);
        assert_eq!(line.source(), RangeSource::Computed);
        assert_eq!(line.range().min(), 0);
    }

    #[test]
    fn test_with_range_keeps_given_range() {
        let range = IntegralRange::new(-1, 1);
        let line = RangeLine::with_range(IntegralCategory::Long, RangeSource::Computed, range);
        assert_eq!(line.range(), range);
        assert_eq!(line.to_string(), "long: -1 to 1");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(RangeSource::Platform.to_string(), "platform");
        assert_eq!(RangeSource::Computed.to_string(), "computed");
    }
}
