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

//! # Intrange Report
//!
//! Reports the representable value ranges of the C integral types twice: once
//! from the limits the platform publishes, and once computed from the storage
//! width of each type by bit manipulation.
//!
//! ## Modules
//!
//! - `category`: The catalogue of C integral types (`IntegralCategory`) mapped
//!   onto the platform aliases from `libc`, with labels, widths, and ranges.
//! - `range`: The closed value range `IntegralRange`, wide enough for every
//!   bound of every category.
//! - `line`: A single report line (`RangeLine`) and the source of its range
//!   (`RangeSource`).
//! - `reporter`: `RangeReporter`, writing the report to any `std::io::Write`.
//! - `monitor`: Pluggable observers for the reporting lifecycle.
//! - `stats`: Counters collected while reporting.
//! - `error`: Error types for writing and verifying a report.
//!
//! ## Usage
//!
//! ```rust
//! use intrange_report::reporter::RangeReporter;
//!
//! let reporter = RangeReporter::new();
//! let mut out = Vec::new();
//! let stats = reporter.report(&mut out).unwrap();
//! assert_eq!(stats.lines_written, 12);
//! assert!(reporter.verify().is_ok());
//! ```

pub mod category;
pub mod error;
pub mod line;
pub mod monitor;
pub mod range;
pub mod reporter;
pub mod stats;
