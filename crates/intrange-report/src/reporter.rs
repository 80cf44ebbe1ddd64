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

//! # Range Reporter
//!
//! Writes, for every category in order, the platform range followed by the
//! computed range, one `"<label>: <min> to <max>"` line each. The default
//! reporter covers the six categories of `IntegralCategory::REPORTED` and
//! therefore writes twelve lines.
//!
//! A category whose two ranges disagree is still written; the disagreement is
//! counted in the returned `ReportStatistics` and passed to the monitor. Use
//! `RangeReporter::verify` to turn the first disagreement into an error.
//!
//! ## Usage
//!
//! ```rust
//! use intrange_report::reporter::RangeReporter;
//!
//! let reporter = RangeReporter::new();
//! let mut out = Vec::new();
//! reporter.report(&mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("signed char: -128 to 127\nsigned char: -128 to 127\n"));
//! ```

use crate::{
    category::IntegralCategory,
    error::{RangeMismatchError, ReportError},
    line::{RangeLine, RangeSource},
    monitor::{no_op::NoOpMonitor, report_monitor::ReportMonitor},
    range::IntegralRange,
    stats::ReportStatistics,
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeReporter {
    categories: Vec<IntegralCategory>,
}

impl Default for RangeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeReporter {
    /// Creates a reporter over `IntegralCategory::REPORTED`.
    #[inline]
    pub fn new() -> Self {
        Self::with_categories(IntegralCategory::REPORTED)
    }

    /// Creates a reporter over `categories`, reported in iteration order.
    #[inline]
    pub fn with_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = IntegralCategory>,
    {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub fn categories(&self) -> &[IntegralCategory] {
        &self.categories
    }

    /// Returns every report line in output order.
    pub fn lines(&self) -> impl Iterator<Item = RangeLine> + '_ {
        self.categories.iter().flat_map(|&category| {
            RangeSource::BOTH
                .into_iter()
                .map(move |source| RangeLine::new(category, source))
        })
    }

    /// Writes the report to `out` and flushes it.
    pub fn report<W>(&self, out: &mut W) -> Result<ReportStatistics, ReportError>
    where
        W: Write + ?Sized,
    {
        self.report_with_monitor(out, &mut NoOpMonitor::new())
    }

    /// Writes the report to `out`, notifying `monitor` along the way.
    pub fn report_with_monitor<W, M>(
        &self,
        out: &mut W,
        monitor: &mut M,
    ) -> Result<ReportStatistics, ReportError>
    where
        W: Write + ?Sized,
        M: ReportMonitor + ?Sized,
    {
        self.write_report(out, monitor, category_ranges)
    }

    /// Checks that every computed range equals its platform range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Mismatch` for the first category that disagrees.
    pub fn verify(&self) -> Result<(), ReportError> {
        self.first_mismatch(category_ranges)
    }

    /// Writes the report with the `(platform, computed)` ranges produced by `ranges`.
    fn write_report<W, M, F>(
        &self,
        out: &mut W,
        monitor: &mut M,
        ranges: F,
    ) -> Result<ReportStatistics, ReportError>
    where
        W: Write + ?Sized,
        M: ReportMonitor + ?Sized,
        F: Fn(IntegralCategory) -> (IntegralRange, IntegralRange),
    {
        monitor.on_enter_report(&self.categories);

        let mut stats = ReportStatistics::default();
        for &category in &self.categories {
            let (platform_range, computed_range) = ranges(category);
            let platform = RangeLine::with_range(category, RangeSource::Platform, platform_range);
            let computed = RangeLine::with_range(category, RangeSource::Computed, computed_range);

            for line in [&platform, &computed] {
                writeln!(out, "{}", line)?;
                stats.lines_written += 1;
                monitor.on_line(line);
            }

            if platform_range != computed_range {
                stats.mismatches += 1;
                monitor.on_mismatch(&RangeMismatchError::new(
                    category,
                    platform_range,
                    computed_range,
                ));
            }
            stats.categories_reported += 1;
        }
        out.flush()?;

        monitor.on_exit_report(&stats);
        Ok(stats)
    }

    fn first_mismatch<F>(&self, ranges: F) -> Result<(), ReportError>
    where
        F: Fn(IntegralCategory) -> (IntegralRange, IntegralRange),
    {
        for &category in &self.categories {
            let (platform, computed) = ranges(category);
            if platform != computed {
                return Err(RangeMismatchError::new(category, platform, computed).into());
            }
        }
        Ok(())
    }
}

#[inline]
fn category_ranges(category: IntegralCategory) -> (IntegralRange, IntegralRange) {
    (category.platform_range(), category.computed_range())
}
