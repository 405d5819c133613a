//! Batch encode/decode over independent records.
//!
//! Each record owns its buffer, so records are processed without any
//! coordination. With the `parallel` feature the work is spread over the rayon
//! pool; output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::parallel::{parallelism_enabled, worth_splitting};
use crate::ser::{decode_with_mode, to_bytes, DecodeMode, FixedCodec, SerResult};

fn use_pool(len: usize) -> bool {
    parallelism_enabled() && worth_splitting(len)
}

/// Encodes every record into its own buffer.
pub fn encode_batch<T>(records: &[T]) -> Vec<Vec<u8>>
where
    T: FixedCodec + Sync,
{
    if use_pool(records.len()) {
        #[cfg(feature = "parallel")]
        {
            return records.par_iter().map(to_bytes).collect();
        }
    }
    records.iter().map(to_bytes).collect()
}

/// Decodes every buffer independently; one bad buffer does not affect others.
pub fn decode_batch<T>(buffers: &[&[u8]], mode: DecodeMode) -> Vec<SerResult<T>>
where
    T: FixedCodec + Send,
{
    if use_pool(buffers.len()) {
        #[cfg(feature = "parallel")]
        {
            return buffers
                .par_iter()
                .map(|bytes| decode_with_mode(bytes, mode))
                .collect();
        }
    }
    buffers
        .iter()
        .map(|bytes| decode_with_mode(bytes, mode))
        .collect()
}
