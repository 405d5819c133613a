//! Utility helpers for the kernel codec.
//! Includes zero sentinels, batch processing and the parallelism switch.

pub mod batch;
pub mod empty;
pub mod parallel;

pub use batch::{decode_batch, encode_batch};
pub use empty::{non_empty_len, Empty};
pub use parallel::{parallelism_enabled, set_parallelism, ParallelismGuard};
