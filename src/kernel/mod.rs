#![forbid(unsafe_code)]

//! Kernel records and their canonical encodings.
//!
//! [`CombinedAccumulatedData`] is the record handed from one kernel iteration
//! to the next and from the private kernel to the public one. It is a fixed
//! tuple of field-element arrays and nested records; each nested record here
//! implements [`FixedCodec`](crate::ser::FixedCodec) and
//! [`FixedLayout`](crate::ser::FixedLayout) so the whole tree encodes by plain
//! concatenation.
//!
//! # Invariants
//!
//! * Field order is the declaration order and is documented as an offset table
//!   on every record.
//! * Every array always carries its full capacity.
//! * Encoded widths are associated constants and never depend on values.

mod aggregation;
mod combined_accumulated_data;
pub mod constants;
mod contract;
mod primitives;
mod public_data;
mod revealed;

pub use aggregation::{AggregationObject, G1Affine};
pub use combined_accumulated_data::CombinedAccumulatedData;
pub use contract::NewContractData;
pub use primitives::{EthAddress, FunctionSelector};
pub use public_data::{PublicDataRead, PublicDataUpdateRequest};
pub use revealed::{FunctionData, OptionallyRevealedData};
