pub mod math;

use std::fmt::{self, Debug};

use num::Float;

/// ZeroSpVecは0要素を疎とした過疎ベクトルです
/// indices と valuesを持ち
/// indicesは要素のインデックスを保持し、
/// valuesは要素の値を保持します
///
/// 要素はindicesの昇順でソートされていることを保証します
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Float,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Create an all-zero vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len,
        }
    }

    /// Build from (index, value) pairs in any order.
    /// Zero values are dropped and duplicate indices are summed.
    ///
    /// # Arguments
    /// * `len` - dimension of the vector
    /// * `pairs` - non-zero entries
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, N)>,
    {
        let mut pairs: Vec<(usize, N)> = pairs.into_iter().collect();
        pairs.sort_by_key(|(idx, _)| *idx);
        let mut vec = Self::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            // 同じインデックスは加算
            if vec.inds.last() == Some(&idx) {
                if let Some(last) = vec.vals.last_mut() {
                    *last = *last + val;
                }
            } else {
                vec.inds.push(idx);
                vec.vals.push(val);
            }
        }
        vec.retain_non_zero();
        vec
    }

    /// dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// value at `index`, zero when absent
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// largest stored index
    #[inline]
    pub fn max_index(&self) -> Option<usize> {
        self.inds.last().copied()
    }

    /// iterate over non-zero entries in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    fn retain_non_zero(&mut self) {
        let mut write = 0;
        for read in 0..self.inds.len() {
            if self.vals[read] != N::zero() {
                self.inds[write] = self.inds[read];
                self.vals[write] = self.vals[read];
                write += 1;
            }
        }
        self.inds.truncate(write);
        self.vals.truncate(write);
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (idx, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", idx, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let v: ZeroSpVec<f64> =
            ZeroSpVec::from_pairs(10, vec![(5, 1.0), (2, 3.0), (5, 2.0), (7, 0.0)]);
        assert_eq!(v.len(), 10);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.raw_iter().collect::<Vec<_>>(), vec![(2, 3.0), (5, 3.0)]);
        assert_eq!(v.get(7), 0.0);
        assert_eq!(v.max_index(), Some(5));
    }
}
