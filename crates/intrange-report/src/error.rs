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

/// A category whose computed range differs from the platform range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMismatchError {
    /// The category whose ranges disagree.
    pub category: IntegralCategory,
    /// The range published by the platform.
    pub platform: IntegralRange,
    /// The range computed from the storage width.
    pub computed: IntegralRange,
}

impl RangeMismatchError {
    #[inline]
    pub fn new(
        category: IntegralCategory,
        platform: IntegralRange,
        computed: IntegralRange,
    ) -> Self {
        Self {
            category,
            platform,
            computed,
        }
    }
}

impl std::fmt::Display for RangeMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Range mismatch for {}: platform reports {} but computation yields {}",
            self.category, self.platform, self.computed
        )
    }
}

impl std::error::Error for RangeMismatchError {}

/// The error type for writing and verifying a report.
#[derive(Debug)]
pub enum ReportError {
    /// The report could not be written to the output stream.
    Io(std::io::Error),
    /// A computed range disagrees with the platform range.
    Mismatch(RangeMismatchError),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "I/O error: {}", e),
            ReportError::Mismatch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Mismatch(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::Io(e)
    }
}

impl From<RangeMismatchError> for ReportError {
    fn from(e: RangeMismatchError) -> Self {
        ReportError::Mismatch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_mismatch_display() {
        let e = RangeMismatchError::new(
            IntegralCategory::Int,
            IntegralRange::new(-2147483648, 2147483647),
            IntegralRange::new(-32768, 32767),
        );
        assert_eq!(
            e.to_string(),
            "Range mismatch for int: platform reports -2147483648 to 2147483647 but computation yields -32768 to 32767"
        );
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e: ReportError = io.into();
        assert!(matches!(e, ReportError::Io(_)));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn test_mismatch_conversion() {
        let m = RangeMismatchError::new(
            IntegralCategory::UnsignedChar,
            IntegralRange::new(0, 255),
            IntegralRange::new(0, 127),
        );
        let e: ReportError = m.clone().into();
        match e {
            ReportError::Mismatch(inner) => assert_eq!(inner, m),
            _ => panic!("Expected ReportError::Mismatch"),
        }
    }
}
