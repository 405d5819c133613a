//! Non-field leaves of kernel records.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::constants::{ETH_ADDRESS_BYTES, FUNCTION_SELECTOR_BYTES};
use crate::ser::{read_u32, write_u32, ByteReader, FixedCodec, SerKind, SerResult};
use crate::utils::Empty;

/// Layer-1 address, carried as 20 raw bytes.
///
/// Every byte pattern is valid, so decoding can only fail on truncation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EthAddress(pub [u8; ETH_ADDRESS_BYTES]);

impl EthAddress {
    /// The zero address, also the empty-slot sentinel.
    pub const ZERO: EthAddress = EthAddress([0u8; ETH_ADDRESS_BYTES]);

    /// Borrows the raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; ETH_ADDRESS_BYTES] {
        &self.0
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthAddress({self})")
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FixedCodec for EthAddress {
    const ENCODED_LEN: usize = ETH_ADDRESS_BYTES;
    const KIND: SerKind = SerKind::FieldElement;

    fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }

    fn read_from(
        cursor: &mut ByteReader<'_>,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<Self> {
        Ok(EthAddress(cursor.read_array::<ETH_ADDRESS_BYTES>(kind, field)?))
    }
}

impl Empty for EthAddress {
    fn empty() -> Self {
        EthAddress::ZERO
    }

    fn is_empty(&self) -> bool {
        *self == EthAddress::ZERO
    }
}

/// Four-byte function selector, big-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FunctionSelector(pub u32);

impl FixedCodec for FunctionSelector {
    const ENCODED_LEN: usize = FUNCTION_SELECTOR_BYTES;
    const KIND: SerKind = SerKind::FieldElement;

    fn write_into(&self, out: &mut Vec<u8>) {
        write_u32(out, self.0);
    }

    fn read_from(
        cursor: &mut ByteReader<'_>,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<Self> {
        Ok(FunctionSelector(read_u32(cursor, kind, field)?))
    }
}

impl Empty for FunctionSelector {
    fn empty() -> Self {
        FunctionSelector(0)
    }

    fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
