//! Forward simulation of VAR sample paths.

use ndarray::{Array2, ArrayView2, s};
use rand::Rng;
use tracing::debug;

use crate::error::VarError;
use crate::model::VarModel;
use crate::mvn::{GaussianSource, InnovationSource};
use crate::regressor::Regressor;

impl VarModel {
    /// Simulates a sample path of length `t` driven by `N(0, Sigma)`
    /// innovations drawn through `rng`.
    ///
    /// # Arguments
    ///
    /// * `t` — total number of output rows.
    /// * `init` — initial observations, shape `(p, n)`; the last row is
    ///   the most recent.
    /// * `drop_init` — when false, `init` occupies the first `p` output
    ///   rows verbatim and `t - p` new rows are simulated; when true,
    ///   all `t` rows are newly simulated and `init` only seeds the
    ///   recursion's lag vector.
    /// * `rng` — random number generator.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`VarError::InconsistentDimensions`] | `init` is not `p x n` |
    /// | [`VarError::InsufficientSampleLength`] | `t < p` with `drop_init` false |
    /// | [`VarError::NotPositiveSemiDefinite`] | covariance rejected by the sampling capability |
    ///
    /// # Example
    ///
    /// ```ignore
    /// let model = VarModel::new(coef, sigma)?;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let path = model.simulate(500, init.view(), false, &mut rng)?;
    /// assert_eq!(path.nrows(), 500);
    /// ```
    #[tracing::instrument(skip(self, init, rng), fields(n = self.n_vars(), p = self.order()))]
    pub fn simulate(
        &self,
        t: usize,
        init: ArrayView2<f64>,
        drop_init: bool,
        rng: &mut impl Rng,
    ) -> Result<Array2<f64>, VarError> {
        let mut source = GaussianSource::new(self.sigma().view(), rng)?;
        self.simulate_with(t, init, drop_init, &mut source)
    }

    /// Simulates a sample path with innovations taken from `source`.
    ///
    /// The entire innovation requirement is drawn in one batched call:
    /// `t - p` rows when the initial observations are retained, `t` rows
    /// when they are dropped. No innovation is drawn for carried-over
    /// rows; those are copied from `init` without any arithmetic.
    ///
    /// # Errors
    ///
    /// Same validation failures as [`VarModel::simulate()`], detected
    /// before anything is drawn.
    pub fn simulate_with<S: InnovationSource>(
        &self,
        t: usize,
        init: ArrayView2<f64>,
        drop_init: bool,
        source: &mut S,
    ) -> Result<Array2<f64>, VarError> {
        let n = self.n_vars();
        let p = self.order();

        if init.nrows() != p || init.ncols() != n {
            return Err(VarError::InconsistentDimensions {
                argument: "initial observations",
                expected: format!("{p}x{n}"),
                got: format!("{}x{}", init.nrows(), init.ncols()),
            });
        }
        if !drop_init && t < p {
            return Err(VarError::InsufficientSampleLength { t, min: p });
        }

        let t_init = if drop_init { 0 } else { p };
        let eps = source.draw(t - t_init);
        debug!(draws = t - t_init, "drew innovation batch");

        let mut path = Array2::zeros((t, n));
        if t_init > 0 {
            path.slice_mut(s![..p, ..]).assign(&init);
        }

        let mut x = Regressor::from_initial(init);
        for step in t_init..t {
            let mut row = x.predict(self.coef());
            row += &eps.row(step - t_init);
            path.row_mut(step).assign(&row);
            x.push(row.view());
        }

        Ok(path)
    }
}

/// Simulates a VAR sample path in one call.
///
/// Flat-signature convenience wrapper: validates `(coef, sigma)` via
/// [`VarModel::new()`] and delegates to [`VarModel::simulate()`]. Use
/// [`VarModel`] directly to amortise validation across repeated calls.
///
/// # Errors
///
/// All [`VarError`] variants of [`VarModel::new()`] and
/// [`VarModel::simulate()`].
pub fn simulate_var(
    t: usize,
    coef: Array2<f64>,
    sigma: Array2<f64>,
    init: ArrayView2<f64>,
    drop_init: bool,
    rng: &mut impl Rng,
) -> Result<Array2<f64>, VarError> {
    VarModel::new(coef, sigma)?.simulate(t, init, drop_init, rng)
}
