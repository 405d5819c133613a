use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kernel_codec::factories::{make_accumulated_data, make_half_full_accumulated_data};
use kernel_codec::utils::{decode_batch, encode_batch};
use kernel_codec::{
    from_bytes, from_bytes_exact, record_digest, to_bytes, CombinedAccumulatedData, DecodeMode,
    FixedCodec,
};

fn bench_accumulated_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("combined_accumulated_data");
    group.throughput(Throughput::Bytes(CombinedAccumulatedData::ENCODED_LEN as u64));

    let full = make_accumulated_data(1);
    let bytes = to_bytes(&full);
    group.bench_function("encode_full", |b| {
        b.iter(|| black_box(to_bytes(black_box(&full))));
    });
    group.bench_function("decode_full", |b| {
        b.iter(|| {
            black_box(
                from_bytes_exact::<CombinedAccumulatedData>(black_box(&bytes))
                    .expect("sample decodes"),
            )
        });
    });

    let half = to_bytes(&make_half_full_accumulated_data(1));
    group.bench_function("decode_half_full", |b| {
        b.iter(|| {
            black_box(
                from_bytes::<CombinedAccumulatedData>(black_box(&half)).expect("sample decodes"),
            )
        });
    });
    group.bench_function("digest_full", |b| {
        b.iter(|| black_box(record_digest(black_box(&full))));
    });
    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let records: Vec<_> = (0..64).map(make_accumulated_data).collect();
    let encoded = encode_batch(&records);
    let buffers: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();

    group.bench_function("encode_64", |b| {
        b.iter(|| black_box(encode_batch(black_box(&records))));
    });
    group.bench_function("decode_64", |b| {
        b.iter(|| {
            black_box(decode_batch::<CombinedAccumulatedData>(
                black_box(&buffers),
                DecodeMode::Exact,
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_accumulated_data, bench_batches);
criterion_main!(benches);
