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

use intrange_report::reporter::RangeReporter;
use std::process::{Command, Output};

fn run_intrange(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intrange"))
        .args(args)
        .output()
        .expect("failed to launch intrange")
}

fn expected_report() -> String {
    let mut out = Vec::new();
    RangeReporter::new()
        .report(&mut out)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("report is valid UTF-8")
}

#[test]
fn test_prints_report_and_exits_successfully() {
    let output = run_intrange(&[]);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 12);
    assert_eq!(stdout, expected_report());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_arguments_are_ignored() {
    let plain = run_intrange(&[]);
    let with_args = run_intrange(&["--help", "-x", "extra"]);
    assert!(with_args.status.success());
    assert_eq!(with_args.stdout, plain.stdout);
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run_intrange(&[]);
    let second = run_intrange(&[]);
    assert_eq!(first.stdout, second.stdout);
}
