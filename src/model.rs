//! VAR model parameters (coefficient matrix and innovation covariance).

use ndarray::{Array2, ArrayView1, ArrayView2, s};

use crate::error::VarError;

/// A VAR(p) model over `n` variables with known parameters.
///
/// Holds the coefficient matrix `B` with shape `(n*p + 1, n)` — row 0 is
/// the intercept, rows `1..=n` the lag-1 block, rows `n+1..=2n` the
/// lag-2 block, and so on — together with the `n x n` innovation
/// covariance `Sigma`. The variable count `n` is taken from `B`'s column
/// count and the order `p` from its row count; both are fixed at
/// construction.
///
/// Call [`VarModel::simulate()`] (or [`VarModel::simulate_with()`] with
/// a custom innovation source) to generate sample paths.
#[derive(Clone, Debug)]
pub struct VarModel {
    coef: Array2<f64>,
    sigma: Array2<f64>,
    n: usize,
    p: usize,
}

impl VarModel {
    /// Creates a model from a coefficient matrix and innovation covariance.
    ///
    /// The order `p` is derived from `coef`: with `n = coef.ncols()`,
    /// the row count must be `n*p + 1` for some integer `p >= 0`
    /// (`p = 0` is a pure intercept-plus-noise model). `sigma` must be
    /// `n x n`; its definiteness is not checked here — an indefinite
    /// covariance is rejected by the sampling step instead.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::InconsistentDimensions`] naming the offending
    /// argument when `coef.nrows() != n*p + 1` for every integer `p`, or
    /// when `sigma` is not `n x n`.
    pub fn new(coef: Array2<f64>, sigma: Array2<f64>) -> Result<Self, VarError> {
        let n = coef.ncols();
        let k = coef.nrows();
        let p = if n == 0 {
            if k != 1 {
                return Err(VarError::InconsistentDimensions {
                    argument: "coefficient matrix",
                    expected: "1x0".to_string(),
                    got: format!("{k}x0"),
                });
            }
            0
        } else {
            if k == 0 || (k - 1) % n != 0 {
                return Err(VarError::InconsistentDimensions {
                    argument: "coefficient matrix",
                    expected: format!("(n*p + 1)x{n} for integer p"),
                    got: format!("{k}x{n}"),
                });
            }
            (k - 1) / n
        };
        if sigma.nrows() != n || sigma.ncols() != n {
            return Err(VarError::InconsistentDimensions {
                argument: "covariance matrix",
                expected: format!("{n}x{n}"),
                got: format!("{}x{}", sigma.nrows(), sigma.ncols()),
            });
        }
        Ok(Self { coef, sigma, n, p })
    }

    /// Returns the number of variables (`n`).
    pub fn n_vars(&self) -> usize {
        self.n
    }

    /// Returns the autoregressive order (`p`).
    pub fn order(&self) -> usize {
        self.p
    }

    /// Returns the number of regressors (`n*p + 1`, counting the
    /// leading constant term).
    pub fn n_regressors(&self) -> usize {
        self.n * self.p + 1
    }

    /// Returns the coefficient matrix.
    pub fn coef(&self) -> &Array2<f64> {
        &self.coef
    }

    /// Returns the innovation covariance matrix.
    pub fn sigma(&self) -> &Array2<f64> {
        &self.sigma
    }

    /// Returns the intercept row of the coefficient matrix.
    pub fn intercept(&self) -> ArrayView1<'_, f64> {
        self.coef.row(0)
    }

    /// Returns the `n x n` coefficient block for one lag.
    ///
    /// Lags are 0-based with lag 0 the most recent observation.
    ///
    /// # Panics
    ///
    /// Panics if `lag >= p`.
    pub fn lag_block(&self, lag: usize) -> ArrayView2<'_, f64> {
        assert!(
            lag < self.p,
            "lag_block: lag {lag} out of range for order {}",
            self.p
        );
        let start = 1 + lag * self.n;
        self.coef.slice(s![start..start + self.n, ..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn model_accessors_round_trip() {
        // n = 2, p = 2 => k = 5
        let coef = Array2::from_shape_fn((5, 2), |(i, j)| (i * 2 + j) as f64);
        let sigma = Array2::eye(2);
        let model = VarModel::new(coef.clone(), sigma.clone()).unwrap();

        assert_eq!(model.n_vars(), 2);
        assert_eq!(model.order(), 2);
        assert_eq!(model.n_regressors(), 5);
        assert_eq!(model.coef(), &coef);
        assert_eq!(model.sigma(), &sigma);
    }

    #[test]
    fn model_intercept_row() {
        let coef = array![[0.5, -1.0], [0.1, 0.2], [0.3, 0.4]];
        let model = VarModel::new(coef, Array2::eye(2)).unwrap();
        assert_eq!(model.intercept().to_vec(), vec![0.5, -1.0]);
    }

    #[test]
    fn model_lag_block_layout() {
        // n = 2, p = 2: rows 1..=2 are the lag-1 block, rows 3..=4 lag-2.
        let coef = array![
            [0.0, 0.0],
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
            [7.0, 8.0]
        ];
        let model = VarModel::new(coef, Array2::eye(2)).unwrap();

        assert_eq!(model.lag_block(0), array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(model.lag_block(1), array![[5.0, 6.0], [7.0, 8.0]]);
    }

    #[test]
    #[should_panic(expected = "lag_block: lag 1 out of range")]
    fn model_lag_block_out_of_range() {
        let coef = array![[0.0], [0.5]];
        let model = VarModel::new(coef, Array2::eye(1)).unwrap();
        model.lag_block(1);
    }

    #[test]
    fn model_intercept_only() {
        // k = 1 means p = 0: no lag blocks at all.
        let coef = array![[1.0, 2.0]];
        let model = VarModel::new(coef, Array2::eye(2)).unwrap();
        assert_eq!(model.order(), 0);
        assert_eq!(model.n_regressors(), 1);
    }

    #[test]
    fn model_coef_rows_not_lag_blocks() {
        // k - 1 = 5 is not a multiple of n = 2.
        let coef = Array2::zeros((6, 2));
        let err = VarModel::new(coef, Array2::eye(2)).unwrap_err();
        assert!(matches!(
            err,
            VarError::InconsistentDimensions {
                argument: "coefficient matrix",
                ..
            }
        ));
    }

    #[test]
    fn model_sigma_wrong_shape() {
        let coef = Array2::zeros((3, 2));
        let err = VarModel::new(coef, Array2::eye(3)).unwrap_err();
        assert!(matches!(
            err,
            VarError::InconsistentDimensions {
                argument: "covariance matrix",
                ..
            }
        ));
    }

    #[test]
    fn model_sigma_not_square() {
        let coef = Array2::zeros((3, 2));
        let err = VarModel::new(coef, Array2::zeros((2, 3))).unwrap_err();
        assert!(matches!(
            err,
            VarError::InconsistentDimensions {
                argument: "covariance matrix",
                ..
            }
        ));
    }

    #[test]
    fn model_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<VarModel>();
    }
}
