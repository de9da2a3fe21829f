//! Lazy Cartesian product over pool indices.

/// Walks every index combination of a list of pool sizes, last position
/// varying fastest.
///
/// Only the current index vector is held in memory. An empty list of sizes
/// yields exactly one empty combination; any zero size yields nothing.
///
/// # Examples
///
/// ```
/// use weaver::generate::IndexProduct;
///
/// let combos: Vec<Vec<usize>> = IndexProduct::new(vec![2, 2]).collect();
/// assert_eq!(combos, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexProduct {
    sizes: Vec<usize>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl IndexProduct {
    pub fn new(sizes: Vec<usize>) -> Self {
        let exhausted = sizes.contains(&0);
        let indices = vec![0; sizes.len()];
        IndexProduct {
            sizes,
            indices,
            exhausted,
        }
    }

    /// Total number of combinations, or `None` on overflow.
    pub fn total(&self) -> Option<usize> {
        self.sizes
            .iter()
            .try_fold(1usize, |acc, &size| acc.checked_mul(size))
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sizes[pos] {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for IndexProduct {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sizes_yield_one() {
        let combos: Vec<_> = IndexProduct::new(Vec::new()).collect();
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_zero_size_yields_nothing() {
        assert_eq!(IndexProduct::new(vec![3, 0, 2]).count(), 0);
    }

    #[test]
    fn test_order_and_count() {
        let combos: Vec<_> = IndexProduct::new(vec![1, 3]).collect();
        assert_eq!(combos, vec![vec![0, 0], vec![0, 1], vec![0, 2]]);
        assert_eq!(IndexProduct::new(vec![4, 5, 6]).count(), 120);
    }

    #[test]
    fn test_total() {
        assert_eq!(IndexProduct::new(vec![4, 5, 6]).total(), Some(120));
        assert_eq!(IndexProduct::new(vec![usize::MAX, 2]).total(), None);
    }

    #[test]
    fn test_stop_mid_stream() {
        let mut product = IndexProduct::new(vec![1000, 1000, 1000]);
        let first: Vec<_> = product.by_ref().take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(product.next(), Some(vec![0, 0, 3]));
    }
}
