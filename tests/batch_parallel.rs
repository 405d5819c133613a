#![cfg(feature = "parallel")]


use _fixtures::HALF_SAMPLE;
use kernel_codec::factories::make_accumulated_data;
use kernel_codec::utils::{decode_batch, encode_batch, parallelism_enabled, set_parallelism};
use kernel_codec::{to_bytes, CombinedAccumulatedData, DecodeMode};

#[test]
fn pool_and_sequential_paths_agree() {
    let mut records: Vec<_> = (0..12).map(make_accumulated_data).collect();
    records.push(HALF_SAMPLE.clone());

    let sequential = {
        let _guard = set_parallelism(false);
        assert!(!parallelism_enabled());
        encode_batch(&records)
    };
    let pooled = {
        let _guard = set_parallelism(true);
        encode_batch(&records)
    };
    assert_eq!(sequential, pooled);
    assert_eq!(pooled[12], to_bytes(&*HALF_SAMPLE));

    let buffers: Vec<&[u8]> = pooled.iter().map(Vec::as_slice).collect();
    let decoded = {
        let _guard = set_parallelism(true);
        decode_batch::<CombinedAccumulatedData>(&buffers, DecodeMode::Exact)
    };
    for (record, result) in records.iter().zip(decoded) {
        assert_eq!(result.as_ref(), Ok(record));
    }
}
