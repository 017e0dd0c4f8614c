//! 过滤与图表构建基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use launch_dashboard::dashboard::filter::{select_payload_range, select_site};
use launch_dashboard::dashboard::{
    CallbackRegistry, ControlId, ControlState, Figure, PayloadRange, SiteSelection,
};
use launch_dashboard::dataset::{Dataset, LaunchRecord, Outcome};

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn synthetic_dataset(size: usize) -> Dataset {
    let records = (0..size)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                outcome,
                CATEGORIES[i % CATEGORIES.len()],
            )
        })
        .collect();
    Dataset::from_records(records)
}

// ============== 过滤 ==============

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [56usize, 1_000, 10_000] {
        let dataset = synthetic_dataset(size);
        let site = SiteSelection::parse("KSC LC-39A");
        let range = PayloadRange::new(2000.0, 6000.0).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("site", size), &dataset, |b, ds| {
            b.iter(|| select_site(black_box(ds), black_box(&site)))
        });
        group.bench_with_input(
            BenchmarkId::new("site_and_payload", size),
            &dataset,
            |b, ds| {
                b.iter(|| select_payload_range(black_box(ds), &site, black_box(&range)))
            },
        );
    }

    group.finish();
}

// ============== 图表 ==============

fn bench_figures(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);

    c.bench_function("figure/pie_all", |b| {
        b.iter(|| Figure::pie(black_box(&dataset)))
    });
    c.bench_function("figure/scatter_all", |b| {
        b.iter(|| Figure::scatter(black_box(&dataset)))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let registry = CallbackRegistry::with_defaults();
    let state = ControlState::new(
        SiteSelection::All,
        PayloadRange::new(0.0, 10_000.0).unwrap(),
    );

    c.bench_function("callback/site_dropdown", |b| {
        b.iter(|| registry.dispatch(&dataset, ControlId::SiteDropdown, black_box(&state)))
    });
}

criterion_group!(benches, bench_filters, bench_figures, bench_dispatch);
criterion_main!(benches);
