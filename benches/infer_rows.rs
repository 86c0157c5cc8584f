use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use csv_pgschema::{
    MemoryRows, config::InferConfig, infer_schema, io_utils, row_source::CsvRowSource,
};
use encoding_rs::UTF_8;
use tempfile::TempDir;

const HEADER: [&str; 6] = ["id", "ordered_at", "amount", "status", "client_ip", "note"];

fn order_row(i: usize) -> Vec<String> {
    let status = match i % 3 {
        0 => "shipped",
        1 => "pending",
        _ => "processing",
    };
    let day = (i % 28) + 1;
    let note = if i % 7 == 0 { String::new() } else { format!("note {i}") };
    vec![
        i.to_string(),
        format!("2024-01-{day:02} {:02}:00:00", i % 24),
        format!("{}.{:02}", i % 1000, i % 100),
        status.to_string(),
        format!("10.0.{}.{}", (i / 250) % 250, i % 250 + 1),
        note,
    ]
}

fn generate_orders(rows: usize) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let csv_path = temp_dir.path().join("orders.csv");
    let mut file = File::create(&csv_path).expect("create csv");
    writeln!(file, "{}", HEADER.join(",")).expect("header");
    for i in 0..rows {
        writeln!(file, "{}", order_row(i).join(",")).expect("row");
    }
    (temp_dir, csv_path)
}

fn bench_infer(c: &mut Criterion) {
    let rows = 50_000;
    let (temp_dir, csv_path) = generate_orders(rows);
    let in_memory: Vec<Vec<String>> = std::iter::once(HEADER.map(String::from).to_vec())
        .chain((0..rows).map(order_row))
        .collect();
    let config = InferConfig::default().enable_enums();

    let mut group = c.benchmark_group("infer_schema");

    group.bench_function("memory_rows", |b| {
        b.iter_batched(
            || MemoryRows::new(in_memory.clone()),
            |mut source| {
                infer_schema(&mut source, &config).expect("infer in-memory");
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("csv_file", |b| {
        b.iter_batched(
            || {
                let reader =
                    io_utils::open_csv_reader_from_path(&csv_path, b',').expect("open csv");
                CsvRowSource::new(reader, UTF_8)
            },
            |mut source| {
                infer_schema(&mut source, &config).expect("infer csv");
            },
            BatchSize::SmallInput,
        );
    });

    drop(temp_dir);
    group.finish();
}

criterion_group!(benches, bench_infer);
criterion_main!(benches);
