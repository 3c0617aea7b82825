use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paged_table_viewer::record::Record;
use paged_table_viewer::sort::{sort_records, SortState};

/// Create test records with a numeric and a text column, in shuffled order.
fn create_records(num_rows: usize) -> Vec<Record> {
    (0..num_rows)
        .map(|i| {
            // Deterministic scatter so the input is not pre-sorted
            let n = (i * 7919) % num_rows;
            Record::new()
                .with("n", n as i64)
                .with("name", format!("item_{}", n))
        })
        .collect()
}

/// Benchmark stable sorting on numeric and text keys.
fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");

    for num_rows in [1_000, 10_000, 100_000] {
        let records = create_records(num_rows);

        group.bench_with_input(
            BenchmarkId::new("numeric_key", num_rows),
            &num_rows,
            |b, _| {
                let sort = SortState::ascending("n");
                b.iter(|| {
                    let mut data = records.clone();
                    sort_records(black_box(&mut data), &sort);
                    black_box(data)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("text_key", num_rows),
            &num_rows,
            |b, _| {
                let sort = SortState::ascending("name");
                b.iter(|| {
                    let mut data = records.clone();
                    sort_records(black_box(&mut data), &sort);
                    black_box(data)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("already_sorted", num_rows),
            &num_rows,
            |b, _| {
                let sort = SortState::ascending("n");
                let mut sorted = records.clone();
                sort_records(&mut sorted, &sort);
                b.iter(|| {
                    let mut data = sorted.clone();
                    sort_records(black_box(&mut data), &sort);
                    black_box(data)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sorting);
criterion_main!(benches);
