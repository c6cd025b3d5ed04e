//! Overflow-checked product of an iterator of integers.
//!
//! Counterpart to `checked_sum::CheckedSum`, built on the [`CheckedMul`] and [`One`] traits of
//! `num-traits`.

use num_traits::{CheckedMul, One};

/// Iterator extension to multiply all items, checking for overflow.
pub trait CheckedProduct<T> {
    /// Multiply every item, starting from one.
    ///
    /// Returns `None` if any step overflows.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::CheckedProduct;

    #[test]
    fn multiplies_circuit_sizes() {
        let sizes = [5_usize, 4, 2];
        assert_eq!(sizes.into_iter().checked_product(), Some(40));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(std::iter::empty::<u64>().checked_product(), Some(1));
    }

    #[test]
    fn overflow_is_none_in_any_position() {
        assert_eq!([16_u8, 16, 0].into_iter().checked_product(), None);
        assert_eq!([0_u8, 16, 16].into_iter().checked_product(), Some(0));
        assert_eq!([i64::MAX, -2].into_iter().checked_product(), None);
    }
}
