//! Recursive proof aggregation state carried between kernel iterations.

use serde::{Deserialize, Serialize};

use crate::field::Fq;
use crate::ser::{ByteReader, FieldDescriptor, FixedCodec, FixedLayout, SerKind, SerResult};
use crate::utils::Empty;

/// Affine point on the BN254 G1 curve.
///
/// Coordinates are range-checked against the base field; curve membership is
/// not checked by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct G1Affine {
    pub x: Fq,
    pub y: Fq,
}

impl FixedCodec for G1Affine {
    const ENCODED_LEN: usize = Fq::ENCODED_LEN * 2;
    const KIND: SerKind = SerKind::G1Point;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.x.write_into(out);
        self.y.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let x = Fq::read_from(cursor, Self::KIND, "x")?;
        let y = Fq::read_from(cursor, Self::KIND, "y")?;
        Ok(Self { x, y })
    }
}

impl FixedLayout for G1Affine {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("x", Fq::ENCODED_LEN),
        FieldDescriptor::single("y", Fq::ENCODED_LEN),
    ];
}

impl Empty for G1Affine {
    fn empty() -> Self {
        Self {
            x: Fq::ZERO,
            y: Fq::ZERO,
        }
    }

    fn is_empty(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Pairing accumulator of a recursively verified proof.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..64 | `p0` | [`G1Affine`] |
/// | 64..128 | `p1` | [`G1Affine`] |
/// | 128..129 | `has_data` | `0` or `1` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AggregationObject {
    pub p0: G1Affine,
    pub p1: G1Affine,
    pub has_data: bool,
}

impl FixedCodec for AggregationObject {
    const ENCODED_LEN: usize = G1Affine::ENCODED_LEN * 2 + bool::ENCODED_LEN;
    const KIND: SerKind = SerKind::AggregationObject;

    fn write_into(&self, out: &mut Vec<u8>) {
        self.p0.write_into(out);
        self.p1.write_into(out);
        self.has_data.write_into(out);
    }

    fn read_from(cursor: &mut ByteReader<'_>, _: SerKind, _: &'static str) -> SerResult<Self> {
        let p0 = G1Affine::read_from(cursor, Self::KIND, "p0")?;
        let p1 = G1Affine::read_from(cursor, Self::KIND, "p1")?;
        let has_data = bool::read_from(cursor, Self::KIND, "has_data")?;
        Ok(Self { p0, p1, has_data })
    }
}

impl FixedLayout for AggregationObject {
    const LAYOUT: &'static [FieldDescriptor] = &[
        FieldDescriptor::single("p0", G1Affine::ENCODED_LEN),
        FieldDescriptor::single("p1", G1Affine::ENCODED_LEN),
        FieldDescriptor::single("has_data", bool::ENCODED_LEN),
    ];
}

impl Empty for AggregationObject {
    fn empty() -> Self {
        Self {
            p0: G1Affine::empty(),
            p1: G1Affine::empty(),
            has_data: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.p0.is_empty() && self.p1.is_empty() && !self.has_data
    }
}
