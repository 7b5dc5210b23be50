//! Benchmarks for the dashboard recompute path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use launchboard::dataset::{LaunchRecord, LaunchTable, Outcome};
use launchboard::reactive::{CallbackRegistry, ControlId};
use launchboard::view::{
    filter_by_payload_range, filter_by_site, summarize_outcomes, FilterSelection, PayloadRange,
    SiteSelection, Subset,
};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_table(count: usize) -> LaunchTable {
    let records = (0..count)
        .map(|i| {
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 9600) as f64,
                CATEGORIES[i % CATEGORIES.len()],
                if i % 3 == 0 { Outcome::Failure } else { Outcome::Success },
            )
        })
        .collect();
    LaunchTable::from_records(records).expect("non-empty table")
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    for size in [100, 1000, 10000] {
        let table = create_test_table(size);
        let site = SiteSelection::from("KSC LC-39A");
        let range = PayloadRange::new(1000.0, 5000.0).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("site", size), &table, |b, table| {
            b.iter(|| filter_by_site(Subset::all(black_box(table)), &site).len())
        });

        group.bench_with_input(BenchmarkId::new("payload_then_site", size), &table, |b, table| {
            b.iter(|| {
                let in_range = filter_by_payload_range(Subset::all(black_box(table)), &range);
                filter_by_site(in_range, &site).len()
            })
        });

        group.bench_with_input(BenchmarkId::new("summarize", size), &table, |b, table| {
            b.iter(|| summarize_outcomes(&Subset::all(black_box(table))).total())
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let table = create_test_table(1000);
    let registry = CallbackRegistry::dashboard().unwrap();
    let selection = FilterSelection::defaults(table.payload_bounds());

    c.bench_function("dispatch_site_change_1000", |b| {
        b.iter(|| registry.dispatch(black_box(&table), Some(ControlId::SiteDropdown), &selection))
    });
}

criterion_group!(benches, bench_filters, bench_dispatch);
criterion_main!(benches);
