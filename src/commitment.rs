//! Hash commitments over canonical encodings.
//!
//! The digest binds the exact bytes produced by [`to_bytes`], so two records
//! share a digest only if they encode identically.

use crate::ser::{to_bytes, FixedCodec};

/// Domain separator absorbed before the record bytes.
pub const RECORD_DIGEST_DOMAIN_TAG: &[u8; 14] = b"KERNEL-RECORD/";

/// BLAKE3 digest of `DOMAIN_TAG || encode(record)`.
pub fn record_digest<T: FixedCodec>(record: &T) -> [u8; 32] {
    encoded_record_digest(&to_bytes(record))
}

/// Digest of a record that is already encoded.
pub fn encoded_record_digest(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(RECORD_DIGEST_DOMAIN_TAG);
    hasher.update(bytes);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Fr;

    #[test]
    fn domain_tag_is_absorbed() {
        let bytes = to_bytes(&Fr::from(9u64));
        let untagged: [u8; 32] = blake3::hash(&bytes).into();
        assert_ne!(encoded_record_digest(&bytes), untagged);
        assert_eq!(record_digest(&Fr::from(9u64)), encoded_record_digest(&bytes));
    }
}
