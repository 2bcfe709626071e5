use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::fs;
use std::io::Write;

use casefile::run_investigation;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn bench_investigate(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    // Whole-text sampling path
    let text = dir.path().join("notes.txt");
    fs::write(&text, "meeting notes line\n".repeat(40)).unwrap();

    // Run-extraction path over mixed bytes
    let binary = dir.path().join("blob.bin");
    let blob: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    fs::write(&binary, &blob).unwrap();

    // Archive listing path
    let archive = dir.path().join("bundle.zip");
    let file = fs::File::create(&archive).unwrap();
    let mut writer = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for i in 0..25 {
        writer
            .start_file(format!("entry_{:02}.txt", i), options)
            .unwrap();
        writer.write_all(b"body").unwrap();
    }
    writer.finish().unwrap();

    let mut group = c.benchmark_group("investigate");
    for (label, path) in [("text", &text), ("binary", &binary), ("archive", &archive)] {
        let size = fs::metadata(path).unwrap().len();
        group.throughput(Throughput::Bytes(size));
        group.bench_function(label, |b| {
            b.iter(|| {
                let _ = run_investigation(path);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_investigate);
criterion_main!(benches);
