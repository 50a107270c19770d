use std::hint::black_box;
use std::io::Write;

use base64::Engine as _;
use base64::engine::general_purpose;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fzf_preview::lookup::find_payload_in_file;
use fzf_preview::{SelectionKey, resolve_preview};
use tempfile::NamedTempFile;

/// Generate a synthetic index file with N records
fn generate_index_file(num_entries: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    for i in 0..num_entries {
        let command = format!("docker compose -f stack-{}.yml up --build --detach", i);
        writeln!(file, "{}\t{}", i, general_purpose::STANDARD.encode(command)).unwrap();
    }

    file.flush().unwrap();
    file
}

fn bench_scan_last_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_payload_last");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_index_file(*size);
        let key = SelectionKey::parse(&(size - 1).to_string()).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| find_payload_in_file(black_box(file.path()), black_box(&key)).unwrap());
        });
    }

    group.finish();
}

fn bench_resolve_preview(c: &mut Criterion) {
    let file = generate_index_file(1_000);

    c.bench_function("resolve_preview_middle", |b| {
        b.iter(|| resolve_preview(black_box(file.path()), black_box("500. compose")).unwrap());
    });
}

criterion_group!(benches, bench_scan_last_record, bench_resolve_preview);
criterion_main!(benches);
