use super::codec::FixedCodec;
use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};
use crate::field::{CanonicalSerialize, Fq, Fr, FIELD_BYTES};

/// Writes a field element in canonical big-endian order.
pub fn write_felt<F>(out: &mut Vec<u8>, value: &F)
where
    F: CanonicalSerialize<Bytes = [u8; FIELD_BYTES]>,
{
    out.extend_from_slice(&value.to_bytes());
}

/// Reads a canonical field element from the byte cursor.
///
/// Consumes exactly [`FIELD_BYTES`] bytes. Values at or above the modulus are
/// reported as [`SerError::OutOfRange`].
pub fn read_felt<F>(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<F>
where
    F: CanonicalSerialize<Bytes = [u8; FIELD_BYTES]>,
{
    let raw = cursor.read_array::<FIELD_BYTES>(kind, field)?;
    F::from_bytes(&raw).map_err(|_| SerError::out_of_range(kind, field))
}

macro_rules! felt_codec {
    ($($name:ty),*) => {
        $(
            impl FixedCodec for $name {
                const ENCODED_LEN: usize = FIELD_BYTES;
                const KIND: SerKind = SerKind::FieldElement;

                fn write_into(&self, out: &mut Vec<u8>) {
                    write_felt(out, self);
                }

                fn read_from(
                    cursor: &mut ByteReader<'_>,
                    kind: SerKind,
                    field: &'static str,
                ) -> SerResult<Self> {
                    read_felt(cursor, kind, field)
                }
            }
        )*
    };
}

felt_codec!(Fr, Fq);
