//! Ordered field descriptors for composite records.
//!
//! A layout lists the fields of a record in wire order together with their
//! element width and capacity. It is the documented form of the
//! declaration-order contract and lets tests and external tooling locate a
//! field inside an encoded buffer without decoding it.

use serde::Serialize;

use super::codec::FixedCodec;

/// One field of a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Encoded width of a single element.
    pub element_len: usize,
    /// Number of elements; `1` for scalars and nested records.
    pub capacity: usize,
}

impl FieldDescriptor {
    /// Describes a scalar or nested record field.
    pub const fn single(name: &'static str, element_len: usize) -> Self {
        Self {
            name,
            element_len,
            capacity: 1,
        }
    }

    /// Describes a fixed-capacity array field.
    pub const fn array(name: &'static str, element_len: usize, capacity: usize) -> Self {
        Self {
            name,
            element_len,
            capacity,
        }
    }

    /// Total encoded width of the field.
    pub const fn encoded_len(&self) -> usize {
        self.element_len * self.capacity
    }
}

/// Position of a field inside an encoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpan {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

/// Records that publish their wire order.
pub trait FixedLayout: FixedCodec {
    /// Fields in wire order.
    const LAYOUT: &'static [FieldDescriptor];
}

/// Sums the encoded widths of every field in `layout`.
pub const fn layout_len(layout: &[FieldDescriptor]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < layout.len() {
        total += layout[i].encoded_len();
        i += 1;
    }
    total
}

/// Returns the byte spans of every field in wire order.
pub fn field_spans(layout: &[FieldDescriptor]) -> Vec<FieldSpan> {
    let mut start = 0;
    layout
        .iter()
        .map(|descriptor| {
            let end = start + descriptor.encoded_len();
            let span = FieldSpan {
                name: descriptor.name,
                start,
                end,
            };
            start = end;
            span
        })
        .collect()
}

/// Returns the span of the named field, if present.
pub fn field_span(layout: &[FieldDescriptor], name: &str) -> Option<FieldSpan> {
    field_spans(layout)
        .into_iter()
        .find(|span| span.name == name)
}
