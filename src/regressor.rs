//! Lagged regressor vector for the simulation hot loop.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, aview1};

/// The lagged regressor vector `x = [1, y_{t-1}', ..., y_{t-p}']`.
///
/// Owns a flat buffer of length `n*p + 1`: a leading constant 1.0
/// followed by `p` blocks of `n` values, most recent lag first. This is
/// the one place the pairing between the regressor layout and the
/// coefficient matrix rows is encoded — [`Regressor::predict()`] is then
/// a plain `x' * B` product and no call site relies on positional
/// convention.
///
/// The vector is mutated in place as the recursion advances: each
/// [`Regressor::push()`] drops the oldest block and shifts the rest one
/// slot toward the back.
#[derive(Clone, Debug)]
pub struct Regressor {
    data: Vec<f64>,
    n: usize,
    p: usize,
}

impl Regressor {
    /// Creates a regressor for `n` variables and order `p` with all lag
    /// blocks zeroed.
    pub fn new(n: usize, p: usize) -> Self {
        let mut data = vec![0.0; n * p + 1];
        data[0] = 1.0;
        Self { data, n, p }
    }

    /// Builds the starting regressor from the initial observations.
    ///
    /// `init` has shape `(p, n)` with the last row the most recent
    /// observation; that row becomes the first lag block.
    pub fn from_initial(init: ArrayView2<f64>) -> Self {
        let (p, n) = init.dim();
        let mut reg = Self::new(n, p);
        for (lag, row) in init.outer_iter().rev().enumerate() {
            let start = 1 + lag * n;
            for (slot, &v) in reg.data[start..start + n].iter_mut().zip(row.iter()) {
                *slot = v;
            }
        }
        reg
    }

    /// Shifts in a newly observed row as the most recent lag block.
    ///
    /// Every block moves one slot toward the back, the oldest block is
    /// dropped, and `obs` lands immediately after the leading 1. No-op
    /// for order zero.
    ///
    /// # Panics
    ///
    /// Panics if `obs` does not have length `n`.
    pub fn push(&mut self, obs: ArrayView1<f64>) {
        assert_eq!(obs.len(), self.n, "push: observation length mismatch");
        if self.p == 0 {
            return;
        }
        let n = self.n;
        self.data.copy_within(1..1 + n * (self.p - 1), 1 + n);
        for (slot, &v) in self.data[1..1 + n].iter_mut().zip(obs.iter()) {
            *slot = v;
        }
    }

    /// Computes the conditional mean `x' * B` as a length-`n` row.
    ///
    /// # Panics
    ///
    /// Panics if `coef` does not have `n*p + 1` rows.
    pub fn predict(&self, coef: &Array2<f64>) -> Array1<f64> {
        aview1(&self.data).dot(coef)
    }

    /// Read-only view of the flat regressor buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
