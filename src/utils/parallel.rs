//! Runtime switch for the rayon-backed batch helpers.
//!
//! Without the `parallel` feature the switch reads as off and the guard only
//! restores the stored flag.

use std::sync::atomic::{AtomicBool, Ordering};

static POOL_SWITCH: AtomicBool = AtomicBool::new(true);

/// Smallest batch handed to the pool; smaller batches run inline.
const MIN_PARALLEL_BATCH: usize = 4;

pub(crate) fn worth_splitting(total_items: usize) -> bool {
    total_items >= MIN_PARALLEL_BATCH
}

/// Returns `true` when batch helpers may use the rayon pool.
pub fn parallelism_enabled() -> bool {
    cfg!(feature = "parallel") && POOL_SWITCH.load(Ordering::SeqCst)
}

/// Turns the pool on or off until the returned guard is dropped.
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    ParallelismGuard {
        previous: POOL_SWITCH.swap(enabled, Ordering::SeqCst),
    }
}

/// Restores the previous switch value on drop.
#[must_use = "the previous setting is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ParallelismGuard {
    previous: bool,
}

impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        POOL_SWITCH.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_previous_setting() {
        let before = parallelism_enabled();
        {
            let _off = set_parallelism(false);
            assert!(!parallelism_enabled());
        }
        assert_eq!(parallelism_enabled(), before);
    }

    #[test]
    fn tiny_batches_stay_inline() {
        assert!(!worth_splitting(0));
        assert!(!worth_splitting(MIN_PARALLEL_BATCH - 1));
        assert!(worth_splitting(MIN_PARALLEL_BATCH));
    }
}
