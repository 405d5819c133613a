//! Field element primitives for the kernel codec.
//! Elements are opaque canonical values; no arithmetic lives here.

pub mod prime_field;

pub use prime_field::{
    CanonicalSerialize, FieldDecodeError, Fq, Fr, FIELD_BYTES, FQ_MODULUS, FR_MODULUS,
};
