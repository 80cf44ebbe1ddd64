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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use intrange_report::category::IntegralCategory;
use intrange_report::reporter::RangeReporter;
use std::hint::black_box;

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    let reporters = [
        ("reported", RangeReporter::new()),
        ("all", RangeReporter::with_categories(IntegralCategory::ALL)),
    ];

    for (name, reporter) in &reporters {
        let lines = reporter.lines().count() as u64;
        group.throughput(Throughput::Elements(lines));

        group.bench_with_input(BenchmarkId::new("write", name), reporter, |b, r| {
            let mut out = Vec::with_capacity(1024);
            b.iter(|| {
                out.clear();
                let stats = r.report(&mut out).expect("writing to a Vec cannot fail");
                black_box(stats);
            });
        });

        group.bench_with_input(BenchmarkId::new("verify", name), reporter, |b, r| {
            b.iter(|| black_box(r.verify().is_ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
