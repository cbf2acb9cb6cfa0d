//! Storage benchmarks for rowdb.
//!
//! Benchmarks for:
//! - Row serialize / deserialize
//! - Appending rows until the table is full
//! - Scanning every stored row

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowdb_bench::{filled_table, generate_rows};
use storage::{Row, Table, ROW_SIZE, TABLE_MAX_ROWS};

fn bench_codec(c: &mut Criterion) {
    let rows = generate_rows(1);
    let row = &rows[0];
    let mut slot = [0u8; ROW_SIZE];

    c.bench_function("row/serialize", |b| {
        b.iter(|| {
            black_box(row).serialize(&mut slot);
            black_box(&slot);
        })
    });

    row.serialize(&mut slot);
    c.bench_function("row/deserialize", |b| {
        b.iter(|| black_box(Row::deserialize(black_box(&slot))))
    });
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/insert");

    for size in [100, 1_000, TABLE_MAX_ROWS].iter() {
        let rows = generate_rows(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut table = Table::new();
                for row in &rows {
                    table.insert(row).unwrap();
                }
                black_box(table.num_rows())
            });
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/scan");

    for size in [100, TABLE_MAX_ROWS].iter() {
        let table = filled_table(&generate_rows(*size));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(table.rows().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_insert, bench_scan);
criterion_main!(benches);
