//! BN254 field elements as seen by the kernel codec.
//!
//! The codec never performs arithmetic. A field element is an opaque 32-byte
//! value whose only invariant is canonicity: interpreted as a big-endian
//! integer it must be strictly smaller than the field modulus.
//!
//! # Representation
//!
//! * [`Fr`] wraps an element of the BN254 scalar field (commitments,
//!   nullifiers, hashes, lengths).
//! * [`Fq`] wraps an element of the BN254 base field (curve point
//!   coordinates).
//! * Both serialise to exactly [`FIELD_BYTES`] bytes in **big-endian** order.

use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of a serialised field element in bytes.
pub const FIELD_BYTES: usize = 32;

/// BN254 scalar field modulus in big-endian bytes.
pub const FR_MODULUS: [u8; FIELD_BYTES] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

/// BN254 base field modulus in big-endian bytes.
pub const FQ_MODULUS: [u8; FIELD_BYTES] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Failure raised when raw bytes do not form a canonical field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum FieldDecodeError {
    /// The big-endian value is greater than or equal to the modulus.
    #[error("field element deserialization failed: non-canonical input")]
    NonCanonical,
}

/// Serialisation contract shared by every fixed-width field element.
pub trait CanonicalSerialize: Sized {
    /// Canonical serialisation output type (e.g. `[u8; 32]`).
    type Bytes;

    /// Serialises the element into canonical big-endian bytes.
    fn to_bytes(&self) -> Self::Bytes;

    /// Attempts to deserialise from canonical big-endian bytes.
    fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldDecodeError>;
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

macro_rules! prime_field_element {
    ($(#[$meta:meta])* $name:ident, $modulus:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
        pub struct $name([u8; FIELD_BYTES]);

        impl $name {
            /// Field modulus in big-endian bytes.
            pub const MODULUS: [u8; FIELD_BYTES] = $modulus;
            /// Additive identity, also the empty-slot sentinel.
            pub const ZERO: $name = $name([0u8; FIELD_BYTES]);
            /// Multiplicative identity.
            pub const ONE: $name = $name::from_u64(1);

            /// Embeds a `u64` as the low eight big-endian bytes.
            pub const fn from_u64(value: u64) -> Self {
                let mut bytes = [0u8; FIELD_BYTES];
                let raw = value.to_be_bytes();
                let mut i = 0;
                while i < raw.len() {
                    bytes[FIELD_BYTES - raw.len() + i] = raw[i];
                    i += 1;
                }
                Self(bytes)
            }

            /// Validates big-endian bytes against the modulus.
            pub fn from_be_bytes(bytes: [u8; FIELD_BYTES]) -> Result<Self, FieldDecodeError> {
                if bytes < Self::MODULUS {
                    Ok(Self(bytes))
                } else {
                    Err(FieldDecodeError::NonCanonical)
                }
            }

            /// Returns the canonical big-endian bytes.
            pub const fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
                self.0
            }

            /// Borrows the canonical big-endian bytes.
            pub const fn as_be_bytes(&self) -> &[u8; FIELD_BYTES] {
                &self.0
            }

            /// Returns `true` for the additive identity.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|byte| *byte == 0)
            }
        }

        impl CanonicalSerialize for $name {
            type Bytes = [u8; FIELD_BYTES];

            fn to_bytes(&self) -> Self::Bytes {
                self.0
            }

            fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldDecodeError> {
                Self::from_be_bytes(*bytes)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::from_u64(value)
            }
        }

        impl TryFrom<[u8; FIELD_BYTES]> for $name {
            type Error = FieldDecodeError;

            fn try_from(bytes: [u8; FIELD_BYTES]) -> Result<Self, Self::Error> {
                Self::from_be_bytes(bytes)
            }
        }

        impl From<$name> for [u8; FIELD_BYTES] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x", stringify!($name))?;
                write_hex(f, &self.0)?;
                write!(f, ")")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x")?;
                write_hex(f, &self.0)
            }
        }
    };
}

prime_field_element!(
    /// Element of the BN254 scalar field.
    Fr,
    FR_MODULUS
);

prime_field_element!(
    /// Element of the BN254 base field.
    Fq,
    FQ_MODULUS
);
