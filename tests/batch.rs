
use _fixtures::FULL_SAMPLE_BYTES;
use kernel_codec::factories::{make_accumulated_data, make_public_data_read};
use kernel_codec::kernel::PublicDataRead;
use kernel_codec::utils::{decode_batch, encode_batch};
use kernel_codec::{to_bytes, CombinedAccumulatedData, DecodeMode, SerError, SerKind};

#[test]
fn encode_batch_matches_single_encodes() {
    let records: Vec<_> = (0..6).map(make_accumulated_data).collect();
    let encoded = encode_batch(&records);
    assert_eq!(encoded.len(), records.len());
    for (record, bytes) in records.iter().zip(&encoded) {
        assert_eq!(*bytes, to_bytes(record));
    }
}

#[test]
fn decode_batch_isolates_failures() {
    let full: &[u8] = &FULL_SAMPLE_BYTES;
    let buffers = vec![full, &full[..100], full];
    let results = decode_batch::<CombinedAccumulatedData>(&buffers, DecodeMode::Exact);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(SerError::truncated_input(SerKind::G1Point, "y", 32, 4))
    );
    assert_eq!(results[0], results[2]);
}

#[test]
fn decode_batch_keeps_input_order() {
    let reads: Vec<PublicDataRead> = (0..32).map(make_public_data_read).collect();
    let encoded = encode_batch(&reads);
    let buffers: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
    let decoded: Vec<PublicDataRead> = decode_batch(&buffers, DecodeMode::Prefix)
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("all buffers are valid");
    assert_eq!(decoded, reads);
}

#[test]
fn empty_batches() {
    assert!(encode_batch::<PublicDataRead>(&[]).is_empty());
    assert!(decode_batch::<PublicDataRead>(&[], DecodeMode::Exact).is_empty());
}
