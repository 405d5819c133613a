use super::codec::FixedCodec;
use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};

/// Writes every slot of a fixed-capacity array in index order.
///
/// No count prefix is emitted: the capacity is part of the type.
pub fn write_array<T, F, const N: usize>(out: &mut Vec<u8>, items: &[T; N], mut write_item: F)
where
    F: FnMut(&mut Vec<u8>, &T),
{
    for item in items {
        write_item(out, item);
    }
}

/// Reads exactly `N` items in index order.
///
/// The first failing slot aborts the read; no partially filled array is
/// returned.
pub fn read_array<T, F, const N: usize>(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
    mut read_item: F,
) -> SerResult<[T; N]>
where
    F: FnMut(&mut ByteReader<'_>, usize) -> SerResult<T>,
{
    let mut out = Vec::with_capacity(N);
    for index in 0..N {
        out.push(read_item(cursor, index)?);
    }
    // The loop pushed exactly `N` items, so the conversion cannot fail.
    out.try_into()
        .map_err(|_: Vec<T>| SerError::truncated_input(kind, field, N, 0))
}

impl<T, const N: usize> FixedCodec for [T; N]
where
    T: FixedCodec,
{
    const ENCODED_LEN: usize = T::ENCODED_LEN * N;
    const KIND: SerKind = T::KIND;

    fn write_into(&self, out: &mut Vec<u8>) {
        write_array(out, self, |out, item| item.write_into(out));
    }

    fn read_from(
        cursor: &mut ByteReader<'_>,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<Self> {
        read_array(cursor, kind, field, |cursor, _| T::read_from(cursor, kind, field))
    }
}
