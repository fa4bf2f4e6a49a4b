use std::io::SeekFrom;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha256};
use vstream_core::prelude::*;

fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn autobuffer_writes(c: &mut Criterion) {
    let inputs = [("autobuffer_small_chunks", 64), ("autobuffer_large_chunks", 16384)];
    let payload = generate_random_data(1 << 20);

    for (name, chunk) in inputs.iter() {
        let mut group = c.benchmark_group(name.to_string());
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_function("write", |b| {
            b.iter(|| {
                let mut buf = AutoBuffer::new(16);
                for piece in payload.chunks(*chunk) {
                    buf.write(black_box(piece));
                }
                black_box(buf.capacity())
            });
        });

        group.finish();
    }
}

fn segment_reads(c: &mut Criterion) {
    let data = generate_random_data(1 << 20);
    let mut group = c.benchmark_group("segment");
    group.throughput(Throughput::Bytes((data.len() / 2) as u64));

    group.bench_function("read_window", |b| {
        let mut dst = vec![0u8; 4096];
        b.iter(|| {
            let inner = Inner::owned(ConstMemoryStream::new(&data));
            let mut seg = SegmentWrapper::new(inner, (data.len() / 4) as u64, (3 * data.len() / 4) as u64)
                .expect("valid range");
            seg.seek(SeekFrom::Start(0)).expect("seek");
            loop {
                let t = seg.read(&mut dst);
                if t.len == 0 || t.is_eof() {
                    break;
                }
            }
        });
    });

    group.finish();
}

fn hashing_chain(c: &mut Criterion) {
    let data = generate_random_data(1 << 20);
    let mut group = c.benchmark_group("hashing");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("sha256_read", |b| {
        let mut dst = vec![0u8; 8192];
        b.iter(|| {
            let mut acc = Sha256::new();
            {
                let mut r = HashingWrapper::new(Inner::owned(ConstMemoryStream::new(&data)), &mut acc);
                while r.read(&mut dst).len > 0 {}
            }
            black_box(acc.finalize())
        });
    });

    group.bench_function("blake3_read", |b| {
        let mut dst = vec![0u8; 8192];
        b.iter(|| {
            let mut acc = DigestState::new(DigestAlg::Blake3);
            {
                let mut r = HashingWrapper::new(Inner::owned(ConstMemoryStream::new(&data)), &mut acc);
                while r.read(&mut dst).len > 0 {}
            }
            black_box(acc.finalize())
        });
    });

    group.finish();
}

criterion_group!(benches, autobuffer_writes, segment_reads, hashing_chain);
criterion_main!(benches);
