//! Big-endian integers and one-byte flags.

use super::codec::FixedCodec;
use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};

pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Appends `value` as four big-endian bytes.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Appends `1` for `true` and `0` for `false`.
pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    write_u8(out, u8::from(value));
}

pub fn read_u8(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u8> {
    let [byte] = cursor.read_array::<1>(kind, field)?;
    Ok(byte)
}

/// Reads four big-endian bytes.
pub fn read_u32(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u32> {
    cursor.read_array::<4>(kind, field).map(u32::from_be_bytes)
}

/// Reads a flag byte; anything other than `0` or `1` is out of range.
pub fn read_bool(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<bool> {
    match read_u8(cursor, kind, field)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(SerError::out_of_range(kind, field)),
    }
}

impl FixedCodec for bool {
    const ENCODED_LEN: usize = 1;
    const KIND: SerKind = SerKind::FieldElement;

    fn write_into(&self, out: &mut Vec<u8>) {
        write_bool(out, *self);
    }

    fn read_from(
        cursor: &mut ByteReader<'_>,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<Self> {
        read_bool(cursor, kind, field)
    }
}
