use super::aggregation::AggregationObject;
use super::constants::{
    MAX_NEW_COMMITMENTS_PER_TX, MAX_NEW_CONTRACTS_PER_TX, MAX_NEW_L2_TO_L1_MSGS_PER_TX,
    MAX_NEW_NULLIFIERS_PER_TX, MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX,
    MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX, MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX,
    MAX_PUBLIC_DATA_READS_PER_TX, MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX, MAX_READ_REQUESTS_PER_TX,
    NUM_FIELDS_PER_SHA256,
};
use super::contract::NewContractData;
use super::public_data::{PublicDataRead, PublicDataUpdateRequest};
use super::revealed::OptionallyRevealedData;
use crate::field::Fr;
use crate::ser::{
    from_bytes, from_bytes_exact, layout_len, to_bytes, ByteReader, FieldDescriptor, FixedCodec,
    FixedLayout, SerKind, SerResult,
};
use crate::utils::Empty;

/// Side effects accumulated by the kernel circuits over a whole transaction.
///
/// Every array is always full: unused slots hold the empty value of their
/// element type. The canonical encoding is the concatenation of the fields
/// below, in this order, with no prefixes or padding.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..129 | `aggregation_object` | [`AggregationObject`] |
/// | 129..641 | `read_requests` | 16 × [`Fr`] |
/// | 641..2689 | `new_commitments` | 64 × [`Fr`] |
/// | 2689..4737 | `new_nullifiers` | 64 × [`Fr`] |
/// | 4737..6785 | `nullified_commitments` | 64 × [`Fr`] |
/// | 6785..7041 | `private_call_stack` | 8 × [`Fr`] |
/// | 7041..7297 | `public_call_stack` | 8 × [`Fr`] |
/// | 7297..7361 | `new_l2_to_l1_msgs` | 2 × [`Fr`] |
/// | 7361..7425 | `encrypted_logs_hash` | 2 × [`Fr`] |
/// | 7425..7489 | `unencrypted_logs_hash` | 2 × [`Fr`] |
/// | 7489..7521 | `encrypted_log_preimages_length` | [`Fr`] |
/// | 7521..7553 | `unencrypted_log_preimages_length` | [`Fr`] |
/// | 7553..7637 | `new_contracts` | 1 × [`NewContractData`] |
/// | 7637..8017 | `optionally_revealed_data` | 4 × [`OptionallyRevealedData`] |
/// | 8017..9553 | `public_data_update_requests` | 16 × [`PublicDataUpdateRequest`] |
/// | 9553..10577 | `public_data_reads` | 16 × [`PublicDataRead`] |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedAccumulatedData {
    pub aggregation_object: AggregationObject,
    pub read_requests: [Fr; MAX_READ_REQUESTS_PER_TX],
    pub new_commitments: [Fr; MAX_NEW_COMMITMENTS_PER_TX],
    pub new_nullifiers: [Fr; MAX_NEW_NULLIFIERS_PER_TX],
    /// Commitment squashed by the nullifier at the same index, or zero.
    pub nullified_commitments: [Fr; MAX_NEW_NULLIFIERS_PER_TX],
    pub private_call_stack: [Fr; MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX],
    pub public_call_stack: [Fr; MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX],
    pub new_l2_to_l1_msgs: [Fr; MAX_NEW_L2_TO_L1_MSGS_PER_TX],
    pub encrypted_logs_hash: [Fr; NUM_FIELDS_PER_SHA256],
    pub unencrypted_logs_hash: [Fr; NUM_FIELDS_PER_SHA256],
    pub encrypted_log_preimages_length: Fr,
    pub unencrypted_log_preimages_length: Fr,
    pub new_contracts: [NewContractData; MAX_NEW_CONTRACTS_PER_TX],
    pub optionally_revealed_data: [OptionallyRevealedData; MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX],
    pub public_data_update_requests: [PublicDataUpdateRequest; MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX],
    pub public_data_reads: [PublicDataRead; MAX_PUBLIC_DATA_READS_PER_TX],
}

impl CombinedAccumulatedData {
    /// Serialises into the canonical byte layout.
    pub fn to_buffer(&self) -> Vec<u8> {
        to_bytes(self)
    }

    /// Decodes a record from the start of `bytes`; trailing bytes are ignored.
    pub fn from_buffer(bytes: &[u8]) -> SerResult<Self> {
        from_bytes(bytes)
    }

    /// Decodes a record that must span all of `bytes`.
    pub fn from_buffer_exact(bytes: &[u8]) -> SerResult<Self> {
        from_bytes_exact(bytes)
    }
}

impl FixedCodec for CombinedAccumulatedData {
    const ENCODED_LEN: usize = AggregationObject::ENCODED_LEN
        + <[Fr; MAX_READ_REQUESTS_PER_TX]>::ENCODED_LEN
        + <[Fr; MAX_NEW_COMMITMENTS_PER_TX]>::ENCODED_LEN
        + <[Fr; MAX_NEW_NULLIFIERS_PER_TX]>::ENCODED_LEN * 2
        + <[Fr; MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX]>::ENCODED_LEN
        + <[Fr; MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX]>::ENCODED_LEN
        + <[Fr; MAX_NEW_L2_TO_L1_MSGS_PER_TX]>::ENCODED_LEN
        + <[Fr; NUM_FIELDS_PER_SHA256]>::ENCODED_LEN * 2
        + Fr::ENCODED_LEN * 2
        + <[NewContractData; MAX_NEW_CONTRACTS_PER_TX]>::ENCODED_LEN
        + <[OptionallyRevealedData; MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX]>::ENCODED_LEN
        + <[PublicDataUpdateRequest; MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX]>::ENCODED_LEN
        + <[PublicDataRead; MAX_PUBLIC_DATA_READS_PER_TX]>::ENCODED_LEN;
    const KIND: SerKind = SerKind::CombinedAccumulatedData;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.aggregation_object.write_into(out);
        self.read_requests.write_into(out);
        self.new_commitments.write_into(out);
        self.new_nullifiers.write_into(out);
        self.nullified_commitments.write_into(out);
        self.private_call_stack.write_into(out);
        self.public_call_stack.write_into(out);
        self.new_l2_to_l1_msgs.write_into(out);
        self.encrypted_logs_hash.write_into(out);
        self.unencrypted_logs_hash.write_into(out);
        self.encrypted_log_preimages_length.write_into(out);
        self.unencrypted_log_preimages_length.write_into(out);
        self.new_contracts.write_into(out);
        self.optionally_revealed_data.write_into(out);
        self.public_data_update_requests.write_into(out);
        self.public_data_reads.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let kind = Self::KIND;
        let aggregation_object = AggregationObject::read_from(cursor, kind, "aggregation_object")?;
        let read_requests: [Fr; MAX_READ_REQUESTS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "read_requests")?;
        let new_commitments: [Fr; MAX_NEW_COMMITMENTS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "new_commitments")?;
        let new_nullifiers: [Fr; MAX_NEW_NULLIFIERS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "new_nullifiers")?;
        let nullified_commitments: [Fr; MAX_NEW_NULLIFIERS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "nullified_commitments")?;
        let private_call_stack: [Fr; MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX] =
            FixedCodec::read_from(cursor, kind, "private_call_stack")?;
        let public_call_stack: [Fr; MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX] =
            FixedCodec::read_from(cursor, kind, "public_call_stack")?;
        let new_l2_to_l1_msgs: [Fr; MAX_NEW_L2_TO_L1_MSGS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "new_l2_to_l1_msgs")?;
        let encrypted_logs_hash: [Fr; NUM_FIELDS_PER_SHA256] =
            FixedCodec::read_from(cursor, kind, "encrypted_logs_hash")?;
        let unencrypted_logs_hash: [Fr; NUM_FIELDS_PER_SHA256] =
            FixedCodec::read_from(cursor, kind, "unencrypted_logs_hash")?;
        let encrypted_log_preimages_length =
            Fr::read_from(cursor, kind, "encrypted_log_preimages_length")?;
        let unencrypted_log_preimages_length =
            Fr::read_from(cursor, kind, "unencrypted_log_preimages_length")?;
        let new_contracts: [NewContractData; MAX_NEW_CONTRACTS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "new_contracts")?;
        let optionally_revealed_data: [OptionallyRevealedData;
            MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX] =
            FixedCodec::read_from(cursor, kind, "optionally_revealed_data")?;
        let public_data_update_requests: [PublicDataUpdateRequest;
            MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "public_data_update_requests")?;
        let public_data_reads: [PublicDataRead; MAX_PUBLIC_DATA_READS_PER_TX] =
            FixedCodec::read_from(cursor, kind, "public_data_reads")?;
        Ok(Self {
            aggregation_object,
            read_requests,
            new_commitments,
            new_nullifiers,
            nullified_commitments,
            private_call_stack,
            public_call_stack,
            new_l2_to_l1_msgs,
            encrypted_logs_hash,
            unencrypted_logs_hash,
            encrypted_log_preimages_length,
            unencrypted_log_preimages_length,
            new_contracts,
            optionally_revealed_data,
            public_data_update_requests,
            public_data_reads,
        })
    }
}

impl FixedLayout for CombinedAccumulatedData {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("aggregation_object", AggregationObject::ENCODED_LEN),
        FieldDescriptor::array("read_requests", Fr::ENCODED_LEN, MAX_READ_REQUESTS_PER_TX),
        FieldDescriptor::array("new_commitments", Fr::ENCODED_LEN, MAX_NEW_COMMITMENTS_PER_TX),
        FieldDescriptor::array("new_nullifiers", Fr::ENCODED_LEN, MAX_NEW_NULLIFIERS_PER_TX),
        FieldDescriptor::array(
            "nullified_commitments",
            Fr::ENCODED_LEN,
            MAX_NEW_NULLIFIERS_PER_TX,
        ),
        FieldDescriptor::array(
            "private_call_stack",
            Fr::ENCODED_LEN,
            MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX,
        ),
        FieldDescriptor::array(
            "public_call_stack",
            Fr::ENCODED_LEN,
            MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX,
        ),
        FieldDescriptor::array(
            "new_l2_to_l1_msgs",
            Fr::ENCODED_LEN,
            MAX_NEW_L2_TO_L1_MSGS_PER_TX,
        ),
        FieldDescriptor::array("encrypted_logs_hash", Fr::ENCODED_LEN, NUM_FIELDS_PER_SHA256),
        FieldDescriptor::array("unencrypted_logs_hash", Fr::ENCODED_LEN, NUM_FIELDS_PER_SHA256),
        FieldDescriptor::single("encrypted_log_preimages_length", Fr::ENCODED_LEN),
        FieldDescriptor::single("unencrypted_log_preimages_length", Fr::ENCODED_LEN),
        FieldDescriptor::array(
            "new_contracts",
            NewContractData::ENCODED_LEN,
            MAX_NEW_CONTRACTS_PER_TX,
        ),
        FieldDescriptor::array(
            "optionally_revealed_data",
            OptionallyRevealedData::ENCODED_LEN,
            MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX,
        ),
        FieldDescriptor::array(
            "public_data_update_requests",
            PublicDataUpdateRequest::ENCODED_LEN,
            MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX,
        ),
        FieldDescriptor::array(
            "public_data_reads",
            PublicDataRead::ENCODED_LEN,
            MAX_PUBLIC_DATA_READS_PER_TX,
        ),
    ];
}

const _: () = assert!(
    layout_len(CombinedAccumulatedData::LAYOUT) == CombinedAccumulatedData::ENCODED_LEN
);

impl Empty for CombinedAccumulatedData {
    fn empty() -> Self {
        Self {
            aggregation_object: AggregationObject::empty(),
            read_requests: Empty::empty(),
            new_commitments: Empty::empty(),
            new_nullifiers: Empty::empty(),
            nullified_commitments: Empty::empty(),
            private_call_stack: Empty::empty(),
            public_call_stack: Empty::empty(),
            new_l2_to_l1_msgs: Empty::empty(),
            encrypted_logs_hash: Empty::empty(),
            unencrypted_logs_hash: Empty::empty(),
            encrypted_log_preimages_length: Fr::ZERO,
            unencrypted_log_preimages_length: Fr::ZERO,
            new_contracts: Empty::empty(),
            optionally_revealed_data: Empty::empty(),
            public_data_update_requests: Empty::empty(),
            public_data_reads: Empty::empty(),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl Default for CombinedAccumulatedData {
    fn default() -> Self {
        Self::empty()
    }
}
