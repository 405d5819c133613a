
use _fixtures::hex;
use insta::assert_snapshot;
use kernel_codec::factories::{
    make_aggregation_object, make_eth_address, make_function_data, make_new_contract_data,
    make_optionally_revealed_data, make_public_data_read, make_public_data_update_request,
};
use kernel_codec::field::{Fq, Fr, FR_MODULUS};
use kernel_codec::kernel::{
    AggregationObject, EthAddress, FunctionData, FunctionSelector, G1Affine, NewContractData,
    OptionallyRevealedData, PublicDataRead, PublicDataUpdateRequest,
};
use kernel_codec::{from_bytes, from_bytes_exact, to_bytes, Empty, FixedCodec, SerError, SerKind};

#[test]
fn nested_record_widths() {
    assert_eq!(G1Affine::ENCODED_LEN, 64);
    assert_eq!(AggregationObject::ENCODED_LEN, 129);
    assert_eq!(NewContractData::ENCODED_LEN, 84);
    assert_eq!(FunctionData::ENCODED_LEN, 7);
    assert_eq!(OptionallyRevealedData::ENCODED_LEN, 95);
    assert_eq!(PublicDataUpdateRequest::ENCODED_LEN, 96);
    assert_eq!(PublicDataRead::ENCODED_LEN, 64);
    assert_eq!(EthAddress::ENCODED_LEN, 20);
}

#[test]
fn aggregation_object_roundtrip() {
    let object = make_aggregation_object(5);
    let bytes = to_bytes(&object);
    assert_eq!(bytes.len(), AggregationObject::ENCODED_LEN);
    assert_eq!(bytes[128], 1, "has_data is the last byte");
    assert_eq!(from_bytes_exact::<AggregationObject>(&bytes).unwrap(), object);
}

#[test]
fn new_contract_data_roundtrip() {
    let contract = make_new_contract_data(9);
    let bytes = to_bytes(&contract);
    assert_eq!(&bytes[32..52], make_eth_address(10).as_bytes());
    assert_eq!(from_bytes_exact::<NewContractData>(&bytes).unwrap(), contract);
}

#[test]
fn function_data_encoding() {
    let data = FunctionData {
        selector: FunctionSelector(0x0102_0304),
        is_internal: false,
        is_private: true,
        is_constructor: false,
    };
    let bytes = to_bytes(&data);
    assert_snapshot!(hex(&bytes), @"01 02 03 04 00 01 00");
    assert_eq!(from_bytes_exact::<FunctionData>(&bytes).unwrap(), data);
}

#[test]
fn function_data_rejects_bad_flag() {
    let mut bytes = to_bytes(&make_function_data(3));
    bytes[6] = 7;
    let err = from_bytes::<FunctionData>(&bytes).expect_err("flag byte must be 0 or 1");
    assert_eq!(
        err,
        SerError::out_of_range(SerKind::FunctionData, "is_constructor")
    );
}

#[test]
fn optionally_revealed_data_roundtrip() {
    let data = make_optionally_revealed_data(0x40);
    let bytes = to_bytes(&data);
    assert_eq!(bytes.len(), 95);
    assert_eq!(&bytes[91..95], &[1, 0, 1, 0]);
    assert_eq!(from_bytes_exact::<OptionallyRevealedData>(&bytes).unwrap(), data);
}

#[test]
fn nested_errors_report_the_inner_record() {
    let bytes = to_bytes(&make_optionally_revealed_data(1));
    let err = from_bytes::<OptionallyRevealedData>(&bytes[..35]).expect_err("cut in function data");
    assert_eq!(
        err,
        SerError::truncated_input(SerKind::FunctionData, "selector", 4, 3)
    );
}

#[test]
fn public_data_roundtrip() {
    let update = make_public_data_update_request(11);
    let read = make_public_data_read(12);
    assert_eq!(
        from_bytes_exact::<PublicDataUpdateRequest>(&to_bytes(&update)).unwrap(),
        update
    );
    assert_eq!(from_bytes_exact::<PublicDataRead>(&to_bytes(&read)).unwrap(), read);
}

#[test]
fn public_data_read_rejects_non_canonical_value() {
    let mut bytes = to_bytes(&make_public_data_read(1));
    bytes[32..].copy_from_slice(&FR_MODULUS);
    let err = from_bytes::<PublicDataRead>(&bytes).expect_err("value equals the modulus");
    assert_eq!(err, SerError::out_of_range(SerKind::PublicDataRead, "value"));
}

#[test]
fn g1_coordinates_use_the_base_field() {
    // The scalar modulus is a valid base-field element.
    let mut bytes = FR_MODULUS.to_vec();
    bytes.extend_from_slice(&[0u8; 32]);
    let point = from_bytes_exact::<G1Affine>(&bytes).unwrap();
    assert_eq!(point.x.as_be_bytes(), &FR_MODULUS);
    assert_eq!(point.y, Fq::ZERO);
}

#[test]
fn empty_records_encode_to_zero_bytes() {
    fn check<T: FixedCodec + Empty>() {
        let bytes = to_bytes(&T::empty());
        assert_eq!(bytes.len(), T::ENCODED_LEN);
        assert!(bytes.iter().all(|byte| *byte == 0));
        let decoded: T = from_bytes_exact(&bytes).unwrap();
        assert!(Empty::is_empty(&decoded));
    }
    check::<AggregationObject>();
    check::<NewContractData>();
    check::<FunctionData>();
    check::<OptionallyRevealedData>();
    check::<PublicDataUpdateRequest>();
    check::<PublicDataRead>();
}

#[test]
fn serde_json_roundtrip() {
    let read = make_public_data_read(0xabc);
    let json = serde_json::to_string(&read).expect("serialize");
    let restored: PublicDataRead = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, read);
}

#[test]
fn serde_rejects_non_canonical_field_element() {
    let json = serde_json::to_string(&FR_MODULUS).expect("serialize bytes");
    let result = serde_json::from_str::<Fr>(&json);
    assert!(result.is_err());
    let json = serde_json::to_string(&Fr::ONE).expect("serialize element");
    assert_eq!(serde_json::from_str::<Fr>(&json).unwrap(), Fr::ONE);
}

#[test]
fn eth_address_display() {
    let address = make_eth_address(0x1234);
    assert_snapshot!(
        address.to_string(),
        @"0xeeeeeeee00000000000000000000000000001234"
    );
}
