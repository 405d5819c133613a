use serde::{Deserialize, Serialize};

use super::primitives::EthAddress;
use crate::field::Fr;
use crate::ser::{ByteReader, FieldDescriptor, FixedCodec, FixedLayout, SerKind, SerResult};
use crate::utils::Empty;

/// Contract deployed by a transaction.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..32 | `contract_address` | [`Fr`] |
/// | 32..52 | `portal_contract_address` | [`EthAddress`] |
/// | 52..84 | `function_tree_root` | [`Fr`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NewContractData {
    pub contract_address: Fr,
    pub portal_contract_address: EthAddress,
    pub function_tree_root: Fr,
}

impl FixedCodec for NewContractData {
    const ENCODED_LEN: usize = Fr::ENCODED_LEN * 2 + EthAddress::ENCODED_LEN;
    const KIND: SerKind = SerKind::NewContractData;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.contract_address.write_into(out);
        self.portal_contract_address.write_into(out);
        self.function_tree_root.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let contract_address = Fr::read_from(cursor, Self::KIND, "contract_address")?;
        let portal_contract_address =
            EthAddress::read_from(cursor, Self::KIND, "portal_contract_address")?;
        let function_tree_root = Fr::read_from(cursor, Self::KIND, "function_tree_root")?;
        Ok(Self {
            contract_address,
            portal_contract_address,
            function_tree_root,
        })
    }
}

impl FixedLayout for NewContractData {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("contract_address", Fr::ENCODED_LEN),
        FieldDescriptor::single("portal_contract_address", EthAddress::ENCODED_LEN),
        FieldDescriptor::single("function_tree_root", Fr::ENCODED_LEN),
    ];
}

impl Empty for NewContractData {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.contract_address.is_zero()
            && self.portal_contract_address.is_empty()
            && self.function_tree_root.is_zero()
    }
}
