//! Deterministic sample records for tests, benches and fixtures.
//!
//! Every value is derived from a caller-supplied seed: slot `i` of an array
//! built at offset `o` holds the value for `seed + o + i`. Distinct fields use
//! distinct offsets so that a misplaced field is visible after a round trip.
//! All produced values are canonical.

use crate::field::{Fq, Fr};
use crate::kernel::constants::ETH_ADDRESS_BYTES;
use crate::kernel::{
    AggregationObject, CombinedAccumulatedData, EthAddress, FunctionData, FunctionSelector,
    G1Affine, NewContractData, OptionallyRevealedData, PublicDataRead, PublicDataUpdateRequest,
};
use crate::utils::Empty;

/// Builds a full array: slot `i` is `make(offset + i)`.
pub fn make_tuple<T, const N: usize>(offset: u64, make: impl Fn(u64) -> T) -> [T; N] {
    core::array::from_fn(|index| make(offset + index as u64))
}

/// Builds an array whose first half is populated and second half empty.
pub fn make_half_full_tuple<T: Empty, const N: usize>(
    offset: u64,
    make: impl Fn(u64) -> T,
) -> [T; N] {
    core::array::from_fn(|index| {
        if index < N / 2 {
            make(offset + index as u64)
        } else {
            T::empty()
        }
    })
}

pub fn fr(seed: u64) -> Fr {
    Fr::from(seed)
}

pub fn fq(seed: u64) -> Fq {
    Fq::from(seed)
}

/// Address whose trailing eight bytes carry `seed`.
pub fn make_eth_address(seed: u64) -> EthAddress {
    let mut bytes = [0u8; ETH_ADDRESS_BYTES];
    bytes[..4].copy_from_slice(&[0xee; 4]);
    bytes[ETH_ADDRESS_BYTES - 8..].copy_from_slice(&seed.to_be_bytes());
    EthAddress(bytes)
}

pub fn make_point(seed: u64) -> G1Affine {
    G1Affine {
        x: fq(seed),
        y: fq(seed + 1),
    }
}

pub fn make_aggregation_object(seed: u64) -> AggregationObject {
    AggregationObject {
        p0: make_point(seed),
        p1: make_point(seed + 0x100),
        has_data: true,
    }
}

pub fn make_new_contract_data(seed: u64) -> NewContractData {
    NewContractData {
        contract_address: fr(seed),
        portal_contract_address: make_eth_address(seed + 1),
        function_tree_root: fr(seed + 2),
    }
}

pub fn make_function_data(seed: u64) -> FunctionData {
    FunctionData {
        selector: FunctionSelector(seed as u32),
        is_internal: false,
        is_private: true,
        is_constructor: true,
    }
}

pub fn make_optionally_revealed_data(seed: u64) -> OptionallyRevealedData {
    OptionallyRevealedData {
        call_stack_item_hash: fr(seed),
        function_data: make_function_data(seed + 0x100),
        vk_hash: fr(seed + 0x200),
        portal_contract_address: make_eth_address(seed + 0x300),
        pay_fee_from_l1: true,
        pay_fee_from_public_l2: false,
        called_from_l1: true,
        called_from_public_l2: false,
    }
}

pub fn make_public_data_update_request(seed: u64) -> PublicDataUpdateRequest {
    PublicDataUpdateRequest {
        leaf_index: fr(seed),
        old_value: fr(seed + 1),
        new_value: fr(seed + 2),
    }
}

pub fn make_public_data_read(seed: u64) -> PublicDataRead {
    PublicDataRead {
        leaf_index: fr(seed),
        value: fr(seed + 1),
    }
}

/// Record with every slot of every array populated.
pub fn make_accumulated_data(seed: u64) -> CombinedAccumulatedData {
    CombinedAccumulatedData {
        aggregation_object: make_aggregation_object(seed),
        read_requests: make_tuple(seed + 0x80, fr),
        new_commitments: make_tuple(seed + 0x100, fr),
        new_nullifiers: make_tuple(seed + 0x200, fr),
        nullified_commitments: make_tuple(seed + 0x300, fr),
        private_call_stack: make_tuple(seed + 0x400, fr),
        public_call_stack: make_tuple(seed + 0x500, fr),
        new_l2_to_l1_msgs: make_tuple(seed + 0x600, fr),
        encrypted_logs_hash: make_tuple(seed + 0x700, fr),
        unencrypted_logs_hash: make_tuple(seed + 0x800, fr),
        encrypted_log_preimages_length: fr(seed + 0x900),
        unencrypted_log_preimages_length: fr(seed + 0xa00),
        new_contracts: make_tuple(seed + 0xb00, make_new_contract_data),
        optionally_revealed_data: make_tuple(seed + 0xc00, make_optionally_revealed_data),
        public_data_update_requests: make_tuple(seed + 0xd00, make_public_data_update_request),
        public_data_reads: make_tuple(seed + 0xe00, make_public_data_read),
    }
}

/// Record whose arrays are half populated, leaving trailing empty slots.
pub fn make_half_full_accumulated_data(seed: u64) -> CombinedAccumulatedData {
    CombinedAccumulatedData {
        aggregation_object: make_aggregation_object(seed),
        read_requests: make_half_full_tuple(seed + 0x80, fr),
        new_commitments: make_half_full_tuple(seed + 0x100, fr),
        new_nullifiers: make_half_full_tuple(seed + 0x200, fr),
        nullified_commitments: make_half_full_tuple(seed + 0x300, fr),
        private_call_stack: make_half_full_tuple(seed + 0x400, fr),
        public_call_stack: make_half_full_tuple(seed + 0x500, fr),
        new_l2_to_l1_msgs: make_half_full_tuple(seed + 0x600, fr),
        encrypted_logs_hash: make_tuple(seed + 0x700, fr),
        unencrypted_logs_hash: make_tuple(seed + 0x800, fr),
        encrypted_log_preimages_length: fr(seed + 0x900),
        unencrypted_log_preimages_length: fr(seed + 0xa00),
        new_contracts: make_half_full_tuple(seed + 0xb00, make_new_contract_data),
        optionally_revealed_data: make_half_full_tuple(seed + 0xc00, make_optionally_revealed_data),
        public_data_update_requests: make_half_full_tuple(
            seed + 0xd00,
            make_public_data_update_request,
        ),
        public_data_reads: make_half_full_tuple(seed + 0xe00, make_public_data_read),
    }
}
