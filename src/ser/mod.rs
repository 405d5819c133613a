//! Canonical serialization helpers for kernel records.
//!
//! Field elements are written as 32 big-endian bytes, selectors as big-endian
//! `u32`, flags as a single `0`/`1` byte. Records are the concatenation of
//! their fields in declaration order and fixed arrays the concatenation of
//! all their slots. Nothing is length-prefixed.

mod codec;
mod collections;
mod cursor;
mod error;
mod felt;
mod ints;
mod layout;

pub use codec::{
    decode_with_mode, from_bytes, from_bytes_exact, read_record, to_bytes, DecodeMode, FixedCodec,
};
pub use collections::{read_array, write_array};
pub use cursor::{ensure_consumed, ByteReader};
pub use error::{SerError, SerKind, SerResult};
pub use felt::{read_felt, write_felt};
pub use ints::{read_bool, read_u32, read_u8, write_bool, write_u32, write_u8};
pub use layout::{field_span, field_spans, layout_len, FieldDescriptor, FieldSpan, FixedLayout};
