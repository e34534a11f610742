//! Batched multivariate normal sampling via Cholesky factorisation.
//!
//! Given independent standard normals `z`, a draw from `N(0, Sigma)` is
//! `L * z` where `Sigma = L * L^T`. The factorisation tolerates positive
//! SEMI-definite input: a pivot within tolerance of zero collapses its
//! column of `L`, so zero and rank-deficient covariances are represented
//! exactly instead of being rejected.

use ndarray::{Array2, ArrayView2};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::VarError;

/// Relative tolerance for accepting a Cholesky pivot as zero.
const PIVOT_TOL: f64 = 1e-10;

/// A source of innovation rows for the simulation recursion.
///
/// The recursion consumes its entire entropy requirement through a
/// single batched [`InnovationSource::draw()`] call, which keeps the
/// draw count a single auditable value and lets tests substitute a
/// deterministic stub for the Gaussian sampler.
pub trait InnovationSource {
    /// Draws `count` independent innovation rows as a `count x n` matrix.
    fn draw(&mut self, count: usize) -> Array2<f64>;
}

/// Mean-zero multivariate normal sampler for a fixed covariance.
#[derive(Clone, Debug)]
pub struct MvnSampler {
    lower: Array2<f64>,
}

impl MvnSampler {
    /// Factorises `sigma` and prepares a sampler for `N(0, sigma)`.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::NotPositiveSemiDefinite`] if the
    /// factorisation encounters an indefinite pivot (non-finite entries
    /// reaching a pivot surface the same way).
    pub fn new(sigma: ArrayView2<f64>) -> Result<Self, VarError> {
        Ok(Self {
            lower: cholesky_psd(sigma)?,
        })
    }

    /// Returns the dimension `n` of the sampled vectors.
    pub fn dim(&self) -> usize {
        self.lower.nrows()
    }

    /// Returns the lower-triangular factor `L` with `Sigma = L * L^T`.
    pub fn lower(&self) -> ArrayView2<'_, f64> {
        self.lower.view()
    }

    /// Draws `count` independent rows from `N(0, Sigma)`.
    pub fn sample(&self, count: usize, rng: &mut impl Rng) -> Array2<f64> {
        let n = self.dim();
        let mut draws = Array2::zeros((count, n));
        let mut z = vec![0.0_f64; n];
        for t in 0..count {
            for zi in z.iter_mut() {
                *zi = rng.sample(StandardNormal);
            }
            for i in 0..n {
                let mut acc = 0.0;
                for (j, &zj) in z.iter().enumerate().take(i + 1) {
                    acc += self.lower[[i, j]] * zj;
                }
                draws[[t, i]] = acc;
            }
        }
        draws
    }
}

/// An [`MvnSampler`] bound to a caller-supplied RNG.
///
/// This is the production [`InnovationSource`]; simulation entry points
/// build one per call from the model's covariance.
pub struct GaussianSource<'r, R: Rng> {
    sampler: MvnSampler,
    rng: &'r mut R,
}

impl<'r, R: Rng> GaussianSource<'r, R> {
    /// Factorises `sigma` and binds the sampler to `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::NotPositiveSemiDefinite`] if `sigma` cannot
    /// be factorised.
    pub fn new(sigma: ArrayView2<f64>, rng: &'r mut R) -> Result<Self, VarError> {
        Ok(Self {
            sampler: MvnSampler::new(sigma)?,
            rng,
        })
    }
}

impl<R: Rng> InnovationSource for GaussianSource<'_, R> {
    fn draw(&mut self, count: usize) -> Array2<f64> {
        self.sampler.sample(count, self.rng)
    }
}

/// Lower-triangular Cholesky factorisation tolerant of semi-definite
/// input.
///
/// A pivot in `[-tol, tol]` zeroes its column; the remaining entries of
/// that column must then also vanish within tolerance, otherwise the
/// matrix is indefinite. A pivot below `-tol` is indefinite outright.
/// The tolerance scales with the largest diagonal magnitude.
fn cholesky_psd(sigma: ArrayView2<f64>) -> Result<Array2<f64>, VarError> {
    let n = sigma.nrows();
    let mut lower = Array2::zeros((n, n));
    let scale = sigma.diag().iter().fold(1.0_f64, |acc, &d| acc.max(d.abs()));
    let tol = PIVOT_TOL * scale;

    for j in 0..n {
        let mut pivot = sigma[[j, j]];
        for k in 0..j {
            pivot -= lower[[j, k]] * lower[[j, k]];
        }

        if pivot > tol {
            let ljj = pivot.sqrt();
            lower[[j, j]] = ljj;
            for i in (j + 1)..n {
                let mut s = sigma[[i, j]];
                for k in 0..j {
                    s -= lower[[i, k]] * lower[[j, k]];
                }
                lower[[i, j]] = s / ljj;
            }
        } else if pivot >= -tol {
            for i in (j + 1)..n {
                let mut s = sigma[[i, j]];
                for k in 0..j {
                    s -= lower[[i, k]] * lower[[j, k]];
                }
                if s.abs() > tol {
                    return Err(VarError::NotPositiveSemiDefinite { pivot: j });
                }
            }
        } else {
            return Err(VarError::NotPositiveSemiDefinite { pivot: j });
        }
    }

    Ok(lower)
}
