
use _fixtures::FULL_SAMPLE_BYTES;
use kernel_codec::field::Fr;
use kernel_codec::kernel::{
    AggregationObject, FunctionData, NewContractData, OptionallyRevealedData, PublicDataRead,
    PublicDataUpdateRequest,
};
use kernel_codec::ser::{field_span, field_spans, layout_len, FieldSpan};
use kernel_codec::{to_bytes, CombinedAccumulatedData, Empty, FixedCodec, FixedLayout};

fn assert_layout_matches<T: FixedLayout + Empty>() {
    assert_eq!(layout_len(T::LAYOUT), T::ENCODED_LEN);
    assert_eq!(to_bytes(&T::empty()).len(), T::ENCODED_LEN);
    let spans = field_spans(T::LAYOUT);
    assert_eq!(spans.first().map(|span| span.start), Some(0));
    assert_eq!(spans.last().map(|span| span.end), Some(T::ENCODED_LEN));
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "spans must be contiguous");
    }
}

#[test]
fn every_layout_covers_its_encoding() {
    assert_layout_matches::<AggregationObject>();
    assert_layout_matches::<NewContractData>();
    assert_layout_matches::<FunctionData>();
    assert_layout_matches::<OptionallyRevealedData>();
    assert_layout_matches::<PublicDataUpdateRequest>();
    assert_layout_matches::<PublicDataRead>();
    assert_layout_matches::<CombinedAccumulatedData>();
}

#[test]
fn accumulated_data_field_order() {
    let names: Vec<_> = CombinedAccumulatedData::LAYOUT
        .iter()
        .map(|descriptor| descriptor.name)
        .collect();
    assert_eq!(
        names,
        [
            "aggregation_object",
            "read_requests",
            "new_commitments",
            "new_nullifiers",
            "nullified_commitments",
            "private_call_stack",
            "public_call_stack",
            "new_l2_to_l1_msgs",
            "encrypted_logs_hash",
            "unencrypted_logs_hash",
            "encrypted_log_preimages_length",
            "unencrypted_log_preimages_length",
            "new_contracts",
            "optionally_revealed_data",
            "public_data_update_requests",
            "public_data_reads",
        ]
    );
}

#[test]
fn accumulated_data_offsets() {
    let span = |name| field_span(CombinedAccumulatedData::LAYOUT, name).expect("known field");
    let expected = [
        ("aggregation_object", 0, 129),
        ("read_requests", 129, 641),
        ("new_commitments", 641, 2689),
        ("new_nullifiers", 2689, 4737),
        ("nullified_commitments", 4737, 6785),
        ("private_call_stack", 6785, 7041),
        ("public_call_stack", 7041, 7297),
        ("new_l2_to_l1_msgs", 7297, 7361),
        ("encrypted_logs_hash", 7361, 7425),
        ("unencrypted_logs_hash", 7425, 7489),
        ("encrypted_log_preimages_length", 7489, 7521),
        ("unencrypted_log_preimages_length", 7521, 7553),
        ("new_contracts", 7553, 7637),
        ("optionally_revealed_data", 7637, 8017),
        ("public_data_update_requests", 8017, 9553),
        ("public_data_reads", 9553, 10577),
    ];
    for (name, start, end) in expected {
        assert_eq!(span(name), FieldSpan { name, start, end });
    }
    assert!(field_span(CombinedAccumulatedData::LAYOUT, "fee").is_none());
}

#[test]
fn field_values_appear_at_their_span() {
    let mut record = CombinedAccumulatedData::empty();
    let marker = Fr::from(0x5eed_u64);
    record.unencrypted_log_preimages_length = marker;
    record.public_call_stack[3] = marker;
    let bytes = record.to_buffer();

    let length = field_span(CombinedAccumulatedData::LAYOUT, "unencrypted_log_preimages_length")
        .expect("known field");
    assert_eq!(&bytes[length.start..length.end], marker.as_be_bytes());

    let stack = field_span(CombinedAccumulatedData::LAYOUT, "public_call_stack")
        .expect("known field");
    let slot = stack.start + 3 * Fr::ENCODED_LEN;
    assert_eq!(&bytes[slot..slot + Fr::ENCODED_LEN], marker.as_be_bytes());

    let marked = bytes.iter().filter(|byte| **byte != 0).count();
    assert_eq!(marked, 4, "0x5eed occupies two bytes in each of two slots");
}

#[test]
fn spans_slice_the_sample_encoding() {
    let record = CombinedAccumulatedData::from_buffer(&FULL_SAMPLE_BYTES).unwrap();
    let reads = field_span(CombinedAccumulatedData::LAYOUT, "public_data_reads")
        .expect("known field");
    assert_eq!(
        &FULL_SAMPLE_BYTES[reads.start..reads.end],
        to_bytes(&record.public_data_reads).as_slice()
    );
    let aggregation = field_span(CombinedAccumulatedData::LAYOUT, "aggregation_object")
        .expect("known field");
    assert_eq!(
        &FULL_SAMPLE_BYTES[aggregation.start..aggregation.end],
        to_bytes(&record.aggregation_object).as_slice()
    );
}
