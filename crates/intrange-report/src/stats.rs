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

/// Statistics collected while writing a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStatistics {
    /// Number of categories whose lines were written.
    pub categories_reported: usize,
    /// Number of lines written to the output.
    pub lines_written: usize,
    /// Number of categories whose computed range differs from the platform range.
    pub mismatches: usize,
}

impl ReportStatistics {
    /// Returns `true` if every computed range matched its platform range.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.mismatches == 0
    }
}

impl std::fmt::Display for ReportStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Report Statistics:")?;
        writeln!(f, "  Categories Reported: {}", self.categories_reported)?;
        writeln!(f, "  Lines Written: {}", self.lines_written)?;
        writeln!(f, "  Mismatches: {}", self.mismatches)
    }
}

#[cfg(test)]
mod tests {
    use super::ReportStatistics;

    #[test]
    fn test_default_is_empty_and_consistent() {
        let stats = ReportStatistics::default();
        assert_eq!(stats.lines_written, 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_display() {
        let stats = ReportStatistics {
            categories_reported: 6,
            lines_written: 12,
            mismatches: 1,
        };
        assert!(!stats.is_consistent());
        let out = format!("{}", stats);
        assert!(out.contains("Categories Reported: 6"));
        assert!(out.contains("Lines Written: 12"));
        assert!(out.contains("Mismatches: 1"));
    }
}
