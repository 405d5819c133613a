//! Public state accesses requested by a transaction.

use serde::{Deserialize, Serialize};

use crate::field::Fr;
use crate::ser::{ByteReader, FieldDescriptor, FixedCodec, FixedLayout, SerKind, SerResult};
use crate::utils::Empty;

/// Write to a public state slot: `leaf_index` goes from `old_value` to `new_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PublicDataUpdateRequest {
    pub leaf_index: Fr,
    pub old_value: Fr,
    pub new_value: Fr,
}

impl FixedCodec for PublicDataUpdateRequest {
    const ENCODED_LEN: usize = Fr::ENCODED_LEN * 3;
    const KIND: SerKind = SerKind::PublicDataUpdateRequest;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.leaf_index.write_into(out);
        self.old_value.write_into(out);
        self.new_value.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let leaf_index = Fr::read_from(cursor, Self::KIND, "leaf_index")?;
        let old_value = Fr::read_from(cursor, Self::KIND, "old_value")?;
        let new_value = Fr::read_from(cursor, Self::KIND, "new_value")?;
        Ok(Self {
            leaf_index,
            old_value,
            new_value,
        })
    }
}

impl FixedLayout for PublicDataUpdateRequest {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("leaf_index", Fr::ENCODED_LEN),
        FieldDescriptor::single("old_value", Fr::ENCODED_LEN),
        FieldDescriptor::single("new_value", Fr::ENCODED_LEN),
    ];
}

impl Empty for PublicDataUpdateRequest {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.leaf_index.is_zero() && self.old_value.is_zero() && self.new_value.is_zero()
    }
}

/// Read of a public state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PublicDataRead {
    pub leaf_index: Fr,
    pub value: Fr,
}

impl FixedCodec for PublicDataRead {
    const ENCODED_LEN: usize = Fr::ENCODED_LEN * 2;
    const KIND: SerKind = SerKind::PublicDataRead;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.leaf_index.write_into(out);
        self.value.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let leaf_index = Fr::read_from(cursor, Self::KIND, "leaf_index")?;
        let value = Fr::read_from(cursor, Self::KIND, "value")?;
        Ok(Self { leaf_index, value })
    }
}

impl FixedLayout for PublicDataRead {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("leaf_index", Fr::ENCODED_LEN),
        FieldDescriptor::single("value", Fr::ENCODED_LEN),
    ];
}

impl Empty for PublicDataRead {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.leaf_index.is_zero() && self.value.is_zero()
    }
}
