use std::cmp::Ordering;

use num::{Float, NumCast};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// ドット積を計算するメソッド
    ///
    /// # Arguments
    /// * `other` - 他のベクトル
    ///
    /// # Returns
    /// * `f64` - ドット積の結果
    #[inline]
    pub fn dot(&self, other: &Self) -> f64
    where
        N: Into<f64>,
    {
        let mut result: f64 = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.inds.len() && j < other.inds.len() {
            match self.inds[i].cmp(&other.inds[j]) {
                Ordering::Equal => {
                    let a: f64 = self.vals[i].into();
                    let b: f64 = other.vals[j].into();
                    result += a * b;
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> f64
    where
        N: Into<f64>,
    {
        self.vals
            .iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum()
    }

    #[inline]
    pub fn norm(&self) -> f64
    where
        N: Into<f64>,
    {
        self.norm_sq().sqrt()
    }

    /// L2正規化
    /// ノルムが0ならゼロベクトルのまま
    pub fn l2_normalize(&mut self)
    where
        N: Into<f64>,
    {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return;
        }
        for v in self.vals.iter_mut() {
            let value: f64 = (*v).into();
            *v = <N as NumCast>::from(value / norm).unwrap_or_else(N::zero);
        }
    }
}
