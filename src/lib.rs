//! Fixed-layout binary codec for kernel accumulated-data records.
//!
//! Kernel circuits fold the side effects of every call in a transaction into a
//! [`CombinedAccumulatedData`] record: fixed-capacity arrays of BN254 field
//! elements plus a few nested records. This crate turns such records into a
//! flat byte string and back.
//!
//! The encoding is deterministic and versionless:
//!
//! * field elements are 32 big-endian bytes and must be below the modulus;
//! * records are the concatenation of their fields in declaration order;
//! * arrays always carry their full capacity, empty slots as zero;
//! * the encoded length is a constant of the type ([`FixedCodec::ENCODED_LEN`]).
//!
//! Decoding fails with [`SerError::TruncatedInput`] when the buffer is short and
//! [`SerError::OutOfRange`] when a leaf is not a valid value. A failed decode
//! never yields a partially populated record.

pub mod commitment;
pub mod factories;
pub mod field;
pub mod kernel;
pub mod ser;
pub mod utils;

pub use commitment::record_digest;
pub use field::{Fq, Fr};
pub use kernel::CombinedAccumulatedData;
pub use ser::{
    decode_with_mode, from_bytes, from_bytes_exact, to_bytes, DecodeMode, FixedCodec, FixedLayout,
    SerError, SerKind, SerResult,
};
pub use utils::Empty;
