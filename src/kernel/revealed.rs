//! Call data a transaction may reveal so that fees can be charged.

use serde::{Deserialize, Serialize};

use super::primitives::{EthAddress, FunctionSelector};
use crate::field::Fr;
use crate::ser::{ByteReader, FieldDescriptor, FixedCodec, FixedLayout, SerKind, SerResult};
use crate::utils::Empty;

/// Selector and call-kind flags of a function.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..4 | `selector` | `u32` big-endian |
/// | 4..5 | `is_internal` | `0` or `1` |
/// | 5..6 | `is_private` | `0` or `1` |
/// | 6..7 | `is_constructor` | `0` or `1` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FunctionData {
    pub selector: FunctionSelector,
    pub is_internal: bool,
    pub is_private: bool,
    pub is_constructor: bool,
}

impl FixedCodec for FunctionData {
    const ENCODED_LEN: usize = FunctionSelector::ENCODED_LEN + bool::ENCODED_LEN * 3;
    const KIND: SerKind = SerKind::FunctionData;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.selector.write_into(out);
        self.is_internal.write_into(out);
        self.is_private.write_into(out);
        self.is_constructor.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let selector = FunctionSelector::read_from(cursor, Self::KIND, "selector")?;
        let is_internal = bool::read_from(cursor, Self::KIND, "is_internal")?;
        let is_private = bool::read_from(cursor, Self::KIND, "is_private")?;
        let is_constructor = bool::read_from(cursor, Self::KIND, "is_constructor")?;
        Ok(Self {
            selector,
            is_internal,
            is_private,
            is_constructor,
        })
    }
}

impl FixedLayout for FunctionData {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("selector", FunctionSelector::ENCODED_LEN),
        FieldDescriptor::single("is_internal", bool::ENCODED_LEN),
        FieldDescriptor::single("is_private", bool::ENCODED_LEN),
        FieldDescriptor::single("is_constructor", bool::ENCODED_LEN),
    ];
}

impl Empty for FunctionData {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.selector.is_empty() && !self.is_internal && !self.is_private && !self.is_constructor
    }
}

/// Revealed call data.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..32 | `call_stack_item_hash` | [`Fr`] |
/// | 32..39 | `function_data` | [`FunctionData`] |
/// | 39..71 | `vk_hash` | [`Fr`] |
/// | 71..91 | `portal_contract_address` | [`EthAddress`] |
/// | 91..92 | `pay_fee_from_l1` | `0` or `1` |
/// | 92..93 | `pay_fee_from_public_l2` | `0` or `1` |
/// | 93..94 | `called_from_l1` | `0` or `1` |
/// | 94..95 | `called_from_public_l2` | `0` or `1` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OptionallyRevealedData {
    pub call_stack_item_hash: Fr,
    pub function_data: FunctionData,
    pub vk_hash: Fr,
    pub portal_contract_address: EthAddress,
    pub pay_fee_from_l1: bool,
    pub pay_fee_from_public_l2: bool,
    pub called_from_l1: bool,
    pub called_from_public_l2: bool,
}

impl FixedCodec for OptionallyRevealedData {
    const ENCODED_LEN: usize = Fr::ENCODED_LEN * 2
        + FunctionData::ENCODED_LEN
        + EthAddress::ENCODED_LEN
        + bool::ENCODED_LEN * 4;
    const KIND: SerKind = SerKind::OptionallyRevealedData;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.call_stack_item_hash.write_into(out);
        self.function_data.write_into(out);
        self.vk_hash.write_into(out);
        self.portal_contract_address.write_into(out);
        self.pay_fee_from_l1.write_into(out);
        self.pay_fee_from_public_l2.write_into(out);
        self.called_from_l1.write_into(out);
        self.called_from_public_l2.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let kind = Self::KIND;
        let call_stack_item_hash = Fr::read_from(cursor, kind, "call_stack_item_hash")?;
        let function_data = FunctionData::read_from(cursor, kind, "function_data")?;
        let vk_hash = Fr::read_from(cursor, kind, "vk_hash")?;
        let portal_contract_address = EthAddress::read_from(cursor, kind, "portal_contract_address")?;
        let pay_fee_from_l1 = bool::read_from(cursor, kind, "pay_fee_from_l1")?;
        let pay_fee_from_public_l2 = bool::read_from(cursor, kind, "pay_fee_from_public_l2")?;
        let called_from_l1 = bool::read_from(cursor, kind, "called_from_l1")?;
        let called_from_public_l2 = bool::read_from(cursor, kind, "called_from_public_l2")?;
        Ok(Self {
            call_stack_item_hash,
            function_data,
            vk_hash,
            portal_contract_address,
            pay_fee_from_l1,
            pay_fee_from_public_l2,
            called_from_l1,
            called_from_public_l2,
        })
    }
}

impl FixedLayout for OptionallyRevealedData {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("call_stack_item_hash", Fr::ENCODED_LEN),
        FieldDescriptor::single("function_data", FunctionData::ENCODED_LEN),
        FieldDescriptor::single("vk_hash", Fr::ENCODED_LEN),
        FieldDescriptor::single("portal_contract_address", EthAddress::ENCODED_LEN),
        FieldDescriptor::single("pay_fee_from_l1", bool::ENCODED_LEN),
        FieldDescriptor::single("pay_fee_from_public_l2", bool::ENCODED_LEN),
        FieldDescriptor::single("called_from_l1", bool::ENCODED_LEN),
        FieldDescriptor::single("called_from_public_l2", bool::ENCODED_LEN),
    ];
}

impl Empty for OptionallyRevealedData {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
