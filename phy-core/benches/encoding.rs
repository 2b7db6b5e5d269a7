//! Benchmarks for the transmit path: PPDU encode and full frame build.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phy_core::frame_builder::FrameBuilder;
use phy_core::ppdu::{encode_payload, PlcpHeader};
use phy_core::rates::{Rate, ALL_RATES};

fn bench_encode_payload(c: &mut Criterion) {
    let mpdu = vec![0xA5u8; 256];
    let mut group = c.benchmark_group("encode_payload");
    for rate in ALL_RATES {
        let header = PlcpHeader::new(rate, mpdu.len()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rate.params().name), &header, |b, header| {
            b.iter(|| encode_payload(black_box(header), black_box(&mpdu)).unwrap());
        });
    }
    group.finish();
}

fn bench_build_frame(c: &mut Criterion) {
    let builder = FrameBuilder::new();
    let mpdu = vec![0x5Au8; 256];
    c.bench_function("build_frame/1_2_bpsk/256B", |b| {
        b.iter(|| builder.build_frame(black_box(&mpdu), Rate::Rate1_2Bpsk).unwrap());
    });
    c.bench_function("build_frame/3_4_qam64/256B", |b| {
        b.iter(|| builder.build_frame(black_box(&mpdu), Rate::Rate3_4Qam64).unwrap());
    });
}

criterion_group!(benches, bench_encode_payload, bench_build_frame);
criterion_main!(benches);
