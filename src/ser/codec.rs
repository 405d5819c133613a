//! The fixed-layout codec contract.
//!
//! Every encodable type has a statically known width, [`FixedCodec::ENCODED_LEN`].
//! Composites encode by concatenating their fields in declaration order, arrays
//! by concatenating every slot in index order. There are no length prefixes,
//! delimiters, tags or padding, so the total width of a record is a constant
//! of its type.

use tracing::{debug, warn};

use super::cursor::{ensure_consumed, ByteReader};
use super::error::{SerKind, SerResult};

/// Fixed-width binary encoding.
pub trait FixedCodec: Sized {
    /// Number of bytes produced by [`FixedCodec::write_into`] for every value.
    const ENCODED_LEN: usize;

    /// Context reported when this type is decoded as a top-level record.
    const KIND: SerKind;

    /// Appends exactly [`FixedCodec::ENCODED_LEN`] bytes to `out`.
    fn write_into(&self, out: &mut Vec<u8>);

    /// Consumes exactly [`FixedCodec::ENCODED_LEN`] bytes from `cursor`.
    ///
    /// `kind` and `field` describe where a leaf value sits inside its parent;
    /// composites report their own context for their fields.
    fn read_from(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str)
        -> SerResult<Self>;
}

/// How a decoder treats bytes left over after the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// The record may be a prefix of a longer stream.
    #[default]
    Prefix,
    /// The buffer must hold exactly one record.
    Exact,
}

/// Serialises a value into a freshly allocated buffer of `T::ENCODED_LEN` bytes.
pub fn to_bytes<T: FixedCodec>(value: &T) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::ENCODED_LEN);
    value.write_into(&mut out);
    debug_assert_eq!(out.len(), T::ENCODED_LEN);
    out
}

/// Decodes a value from the start of `bytes`, ignoring trailing data.
pub fn from_bytes<T: FixedCodec>(bytes: &[u8]) -> SerResult<T> {
    decode_with_mode(bytes, DecodeMode::Prefix)
}

/// Decodes a value that must occupy the whole of `bytes`.
pub fn from_bytes_exact<T: FixedCodec>(bytes: &[u8]) -> SerResult<T> {
    decode_with_mode(bytes, DecodeMode::Exact)
}

/// Decodes a value from a cursor, leaving it positioned after the record.
pub fn read_record<T: FixedCodec>(cursor: &mut ByteReader<'_>) -> SerResult<T> {
    T::read_from(cursor, T::KIND, "record")
}

/// Decodes a value according to `mode`.
///
/// Failures are terminal: no partially decoded value escapes.
pub fn decode_with_mode<T: FixedCodec>(bytes: &[u8], mode: DecodeMode) -> SerResult<T> {
    let mut cursor = ByteReader::new(bytes);
    let result = read_record::<T>(&mut cursor).and_then(|value| {
        if mode == DecodeMode::Exact {
            ensure_consumed(&cursor, T::KIND)?;
        }
        Ok(value)
    });
    match &result {
        Ok(_) => debug!(
            kind = %T::KIND,
            consumed = cursor.position(),
            trailing = cursor.remaining(),
            "decoded record"
        ),
        Err(err) => warn!(
            kind = %err.kind(),
            field = err.field().unwrap_or("-"),
            error = %err,
            "rejected record bytes"
        ),
    }
    result
}
