use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use shader_header::header::{format_byte_literals, write_byte_literals};

fn random_artifact(size: usize) -> Vec<u8> {
    let mut bytes = vec![0; size];
    StdRng::seed_from_u64(0x0723_0203).fill_bytes(&mut bytes);
    bytes
}

fn format_bench(c: &mut Criterion) {
    static KB: usize = 1024;

    let mut group = c.benchmark_group("Format");
    for size in [KB, 16 * KB, 128 * KB, KB * KB].iter() {
        let bytes = random_artifact(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("string", size), &bytes, |b, bytes| {
            b.iter(|| format_byte_literals(bytes));
        });
        group.bench_with_input(BenchmarkId::new("buffered", size), &bytes, |b, bytes| {
            let mut out = Vec::with_capacity(bytes.len() * 6);
            b.iter(|| {
                out.clear();
                write_byte_literals(&mut out, bytes).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, format_bench);
criterion_main!(benches);
