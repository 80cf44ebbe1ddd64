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

//! The closed value range of an integral type.

use intrange_core::num::bounds::ComputedBounds;
use num_traits::Bounded;

/// A closed range `[min, max]` of integer values.
///
/// Bounds are widened to `i128`, which holds the minimum of every signed C
/// type and the maximum of every unsigned one up to 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegralRange {
    min: i128,
    max: i128,
}

impl IntegralRange {
    /// Creates a new range from its bounds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `min > max`.
    #[inline]
    pub fn new(min: i128, max: i128) -> Self {
        debug_assert!(
            min <= max,
            "called `IntegralRange::new` with `min` greater than `max`: {} > {}",
            min,
            max
        );
        Self { min, max }
    }

    /// The range reported by the platform limits of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intrange_report::range::IntegralRange;
    /// let range = IntegralRange::platform::<u8>();
    /// assert_eq!((range.min(), range.max()), (0, 255));
    /// ```
    #[inline]
    pub fn platform<T>() -> Self
    where
        T: Bounded + Into<i128>,
    {
        Self::new(T::min_value().into(), T::max_value().into())
    }

    /// The range computed from the bit width of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intrange_report::range::IntegralRange;
    /// let range = IntegralRange::computed::<i8>();
    /// assert_eq!((range.min(), range.max()), (-128, 127));
    /// ```
    #[inline]
    pub fn computed<T>() -> Self
    where
        T: ComputedBounds + Into<i128>,
    {
        Self::new(T::computed_min().into(), T::computed_max().into())
    }

    /// Returns the lower bound.
    #[inline(always)]
    pub fn min(&self) -> i128 {
        self.min
    }

    /// Returns the upper bound.
    #[inline(always)]
    pub fn max(&self) -> i128 {
        self.max
    }
}

impl std::fmt::Display for IntegralRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::IntegralRange;

    #[test]
    fn test_display() {
        assert_eq!(IntegralRange::new(-128, 127).to_string(), "-128 to 127");
        assert_eq!(IntegralRange::new(0, 255).to_string(), "0 to 255");
    }

    #[test]
    fn test_platform_matches_intrinsic_limits() {
        let r = IntegralRange::platform::<i32>();
        assert_eq!(r.min(), i32::MIN as i128);
        assert_eq!(r.max(), i32::MAX as i128);

        let r = IntegralRange::platform::<u64>();
        assert_eq!(r.min(), 0);
        assert_eq!(r.max(), u64::MAX as i128);
    }

    #[test]
    fn test_computed_equals_platform() {
        assert_eq!(IntegralRange::computed::<i8>(), IntegralRange::platform::<i8>());
        assert_eq!(IntegralRange::computed::<u16>(), IntegralRange::platform::<u16>());
        assert_eq!(IntegralRange::computed::<i64>(), IntegralRange::platform::<i64>());
        assert_eq!(IntegralRange::computed::<u64>(), IntegralRange::platform::<u64>());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_new_rejects_inverted_bounds() {
        let _ = IntegralRange::new(1, 0);
    }
}
