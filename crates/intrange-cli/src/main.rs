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

//! # intrange
//!
//! Prints the value ranges of the C integral types (signed and unsigned char,
//! int, unsigned int, long, long long), each twice: as published by the
//! platform limits and as computed from the storage width by bit
//! manipulation. Command line arguments are accepted and ignored.

use intrange_report::{monitor::mismatch_log::MismatchLogMonitor, reporter::RangeReporter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let reporter = RangeReporter::new();
    let mut monitor = MismatchLogMonitor::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match reporter.report_with_monitor(&mut out, &mut monitor) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
