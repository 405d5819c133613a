//! Zero sentinels for fixed-capacity slots.
//!
//! Arrays are always full: a slot without a side effect holds the type's empty
//! value rather than being omitted. For every type the empty value encodes to
//! all-zero bytes.

use crate::field::{Fq, Fr};

/// Types with a designated empty-slot value.
pub trait Empty: Sized {
    /// Returns the empty value.
    fn empty() -> Self;

    /// Returns `true` when `self` equals the empty value.
    fn is_empty(&self) -> bool;
}

impl Empty for Fr {
    fn empty() -> Self {
        Fr::ZERO
    }

    fn is_empty(&self) -> bool {
        self.is_zero()
    }
}

impl Empty for Fq {
    fn empty() -> Self {
        Fq::ZERO
    }

    fn is_empty(&self) -> bool {
        self.is_zero()
    }
}

impl Empty for bool {
    fn empty() -> Self {
        false
    }

    fn is_empty(&self) -> bool {
        !*self
    }
}

impl<T: Empty, const N: usize> Empty for [T; N] {
    fn empty() -> Self {
        core::array::from_fn(|_| T::empty())
    }

    fn is_empty(&self) -> bool {
        self.iter().all(Empty::is_empty)
    }
}

/// Number of slots before the first empty one.
///
/// Kernel arrays are filled from index 0, so this is the count of live
/// entries.
pub fn non_empty_len<T: Empty>(items: &[T]) -> usize {
    items
        .iter()
        .position(Empty::is_empty)
        .unwrap_or(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_leading_entries() {
        let items = [Fr::from(1u64), Fr::from(2u64), Fr::ZERO, Fr::from(3u64)];
        assert_eq!(non_empty_len(&items), 2);
        assert_eq!(non_empty_len(&[Fr::ZERO; 4]), 0);
        assert_eq!(non_empty_len(&[Fr::ONE; 3]), 3);
    }

    #[test]
    fn empty_array_is_all_empty() {
        let slots: [Fr; 64] = Empty::empty();
        assert!(Empty::is_empty(&slots));
        assert_eq!(slots.len(), 64);
    }
}
