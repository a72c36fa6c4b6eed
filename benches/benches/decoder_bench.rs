use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wavedump_benchmark::build_capture;
use wavedump_core::{decode, resolve};
use wavedump_types::DigitizerKind;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for kind in [DigitizerKind::Vme, DigitizerKind::Desktop] {
        let profile = resolve(kind);
        let raw = build_capture(profile, 1_000).expect("bench capture");

        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &raw, |b, raw| {
            b.iter(|| {
                let reader = decode(Cursor::new(raw.as_slice()), profile);
                let events = reader.filter_map(Result::ok).count();
                black_box(events)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
