use super::error::{SerError, SerKind, SerResult};

/// Forward-only view over an encoded record.
///
/// A reader belongs to the single decode call that advances it. Every read
/// either takes exactly the requested bytes or fails and leaves the offset
/// where it was, so the error can report what was still available.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.offset == self.bytes.len()
    }

    /// Takes the next `len` bytes.
    ///
    /// Fails with [`SerError::TruncatedInput`] naming `kind` and `field` when
    /// fewer than `len` bytes are left.
    pub fn read_exact(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<&'a [u8]> {
        let rest = &self.bytes[self.offset..];
        match rest.get(..len) {
            Some(taken) => {
                self.offset += len;
                Ok(taken)
            }
            None => Err(SerError::truncated_input(kind, field, len, rest.len())),
        }
    }

    /// Takes the next `N` bytes as an owned array.
    pub fn read_array<const N: usize>(
        &mut self,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_exact(N, kind, field)?);
        Ok(out)
    }
}

/// Fails with [`SerError::TrailingBytes`] unless every byte was consumed.
pub fn ensure_consumed(cursor: &ByteReader<'_>, kind: SerKind) -> SerResult<()> {
    if cursor.is_exhausted() {
        return Ok(());
    }
    Err(SerError::trailing_bytes(
        kind,
        cursor.position(),
        cursor.remaining(),
    ))
}
