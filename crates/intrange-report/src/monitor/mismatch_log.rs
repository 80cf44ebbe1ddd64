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

//! Logs every category whose computed range disagrees with the platform
//! range. The default sink is standard error, leaving standard output to the
//! report itself.

use crate::{
    category::IntegralCategory, error::RangeMismatchError, line::RangeLine,
    monitor::report_monitor::ReportMonitor, stats::ReportStatistics,
};
use std::io::Write;

#[derive(Debug)]
pub struct MismatchLogMonitor<W = std::io::Stderr>
where
    W: Write,
{
    writer: W,
    mismatches: usize,
}

impl MismatchLogMonitor<std::io::Stderr> {
    /// Creates a monitor logging to standard error.
    #[inline]
    pub fn new() -> Self {
        Self::with_writer(std::io::stderr())
    }
}

impl Default for MismatchLogMonitor<std::io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> MismatchLogMonitor<W>
where
    W: Write,
{
    /// Creates a monitor logging to `writer`.
    #[inline]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            mismatches: 0,
        }
    }

    /// Number of mismatches seen since the last report started.
    #[inline]
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Consumes the monitor, returning its log sink.
    #[inline]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W> ReportMonitor for MismatchLogMonitor<W>
where
    W: Write,
{
    fn name(&self) -> &str {
        "MismatchLogMonitor"
    }

    fn on_enter_report(&mut self, _categories: &[IntegralCategory]) {
        self.mismatches = 0; // Reset
    }

    fn on_line(&mut self, _line: &RangeLine) {}

    // Log failures are dropped; they must not abort the report.
    fn on_mismatch(&mut self, mismatch: &RangeMismatchError) {
        self.mismatches += 1;
        let _ = writeln!(self.writer, "warning: {}", mismatch);
    }

    fn on_exit_report(&mut self, stats: &ReportStatistics) {
        if !stats.is_consistent() {
            let _ = writeln!(
                self.writer,
                "warning: {} of {} categories disagree with the platform limits",
                stats.mismatches, stats.categories_reported
            );
        }
    }
}

impl<W> std::fmt::Display for MismatchLogMonitor<W>
where
    W: Write,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MismatchLogMonitor(mismatches: {})", self.mismatches)
    }
}
