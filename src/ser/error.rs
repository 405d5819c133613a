use core::fmt;
use serde::Serialize;
use thiserror::Error;

/// Record being decoded when a failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SerKind {
    /// Standalone field element outside any record.
    FieldElement,
    /// Affine curve point made of two base-field coordinates.
    G1Point,
    /// Recursive proof aggregation object.
    AggregationObject,
    /// Contract deployment record.
    NewContractData,
    /// Function selector and call flags.
    FunctionData,
    /// Call data optionally revealed to the rollup.
    OptionallyRevealedData,
    /// Public state write.
    PublicDataUpdateRequest,
    /// Public state read.
    PublicDataRead,
    /// Combined accumulated data of a transaction.
    CombinedAccumulatedData,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::FieldElement => write!(f, "field element"),
            SerKind::G1Point => write!(f, "g1 point"),
            SerKind::AggregationObject => write!(f, "aggregation object"),
            SerKind::NewContractData => write!(f, "new contract data"),
            SerKind::FunctionData => write!(f, "function data"),
            SerKind::OptionallyRevealedData => write!(f, "optionally revealed data"),
            SerKind::PublicDataUpdateRequest => write!(f, "public data update request"),
            SerKind::PublicDataRead => write!(f, "public data read"),
            SerKind::CombinedAccumulatedData => write!(f, "combined accumulated data"),
        }
    }
}

/// Canonical serialization error surfaced while decoding data.
///
/// Encoding is infallible; every variant describes a byte buffer that is not a
/// valid instance of the requested type. Callers must reject such input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum SerError {
    /// The buffer ended before the pending field was complete.
    #[error("{kind}: input truncated in `{field}` (needed {needed} bytes, {remaining} remaining)")]
    TruncatedInput {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field being decoded.
        field: &'static str,
        /// Bytes required by the pending read.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// Bytes were read but do not encode a value of the field's domain.
    #[error("{kind}: `{field}` is outside its value domain")]
    OutOfRange {
        /// Structure that failed to decode.
        kind: SerKind,
        /// Field being decoded.
        field: &'static str,
    },
    /// Additional bytes remained after an exact-length decode.
    #[error("{kind}: {remaining} trailing bytes after {consumed} consumed")]
    TrailingBytes {
        /// Structure that was decoded.
        kind: SerKind,
        /// Bytes taken by the record.
        consumed: usize,
        /// Bytes left after the record.
        remaining: usize,
    },
}

impl SerError {
    /// Buffer ran out while reading `field`.
    pub fn truncated_input(
        kind: SerKind,
        field: &'static str,
        needed: usize,
        remaining: usize,
    ) -> Self {
        SerError::TruncatedInput {
            kind,
            field,
            needed,
            remaining,
        }
    }

    /// `field` decoded to a value outside its domain.
    pub fn out_of_range(kind: SerKind, field: &'static str) -> Self {
        SerError::OutOfRange { kind, field }
    }

    /// Exact-mode decode left `remaining` bytes after `consumed`.
    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Record that reported the failure.
    pub fn kind(&self) -> SerKind {
        match *self {
            SerError::TruncatedInput { kind, .. }
            | SerError::OutOfRange { kind, .. }
            | SerError::TrailingBytes { kind, .. } => kind,
        }
    }

    /// Returns the field being decoded when the error occurred, if any.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            SerError::TruncatedInput { field, .. } | SerError::OutOfRange { field, .. } => {
                Some(field)
            }
            SerError::TrailingBytes { .. } => None,
        }
    }
}

/// Result of a decode step.
pub type SerResult<T> = core::result::Result<T, SerError>;
