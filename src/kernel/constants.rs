//! Per-transaction capacities of the kernel accumulators.
//!
//! These values fix the shape of [`super::CombinedAccumulatedData`] and hence
//! its wire layout. Both ends of a channel must be built with the same values.

/// Read requests against pending commitments.
pub const MAX_READ_REQUESTS_PER_TX: usize = 16;
/// Note commitments created by the transaction.
pub const MAX_NEW_COMMITMENTS_PER_TX: usize = 64;
/// Nullifiers emitted by the transaction.
pub const MAX_NEW_NULLIFIERS_PER_TX: usize = 64;
/// Pending private calls.
pub const MAX_PRIVATE_CALL_STACK_LENGTH_PER_TX: usize = 8;
/// Pending public calls.
pub const MAX_PUBLIC_CALL_STACK_LENGTH_PER_TX: usize = 8;
/// Messages from L2 to L1.
pub const MAX_NEW_L2_TO_L1_MSGS_PER_TX: usize = 2;
/// Contract deployments.
pub const MAX_NEW_CONTRACTS_PER_TX: usize = 1;
/// Call data revealed for fee payment.
pub const MAX_OPTIONALLY_REVEALED_DATA_LENGTH_PER_TX: usize = 4;
/// Public state writes.
pub const MAX_PUBLIC_DATA_UPDATE_REQUESTS_PER_TX: usize = 16;
/// Public state reads.
pub const MAX_PUBLIC_DATA_READS_PER_TX: usize = 16;
/// A sha256 digest split into two field elements.
pub const NUM_FIELDS_PER_SHA256: usize = 2;

/// Width of an Ethereum address.
pub const ETH_ADDRESS_BYTES: usize = 20;
/// Width of a function selector.
pub const FUNCTION_SELECTOR_BYTES: usize = 4;
