use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paged_table_viewer::column::ColumnSpec;
use paged_table_viewer::filter::filter_records;
use paged_table_viewer::record::Record;

/// Create test records with some rows containing a special marker for filtering.
fn create_records(num_rows: usize, num_cols: usize) -> (Vec<ColumnSpec>, Vec<Record>) {
    let columns: Vec<ColumnSpec> = (1..=num_cols)
        .map(|i| ColumnSpec::new(format!("col_{}", i), format!("Col {}", i)))
        .collect();

    let records = (1..=num_rows)
        .map(|row| {
            let mut record = Record::new();
            for col in 1..=num_cols {
                // Mark ~10% of rows with "special_value" for filtering
                let value = if row % 10 == 0 {
                    format!("special_value_{}_{}", row, col)
                } else {
                    format!("val_{}_{}", row, col)
                };
                record.insert(format!("col_{}", col), value);
            }
            record
        })
        .collect();

    (columns, records)
}

/// Benchmark record filtering performance (search operations).
fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    // Test with different row counts (fixed 10 columns)
    for num_rows in [1_000, 10_000, 100_000] {
        let (columns, records) = create_records(num_rows, 10);

        group.bench_with_input(
            BenchmarkId::new("matching_10pct", num_rows),
            &num_rows,
            |b, _| {
                b.iter(|| {
                    let hits = filter_records(black_box(&records), "special", &columns);
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("empty_term", num_rows),
            &num_rows,
            |b, _| {
                b.iter(|| {
                    let all = filter_records(black_box(&records), "", &columns);
                    black_box(all)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filtering);
criterion_main!(benches);
