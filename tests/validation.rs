//! Validation error integration tests for varsim.

use ndarray::{Array2, array};
use rand::SeedableRng;
use rand::rngs::StdRng;
use varsim::{VarError, VarModel, simulate_var};

#[test]
fn sample_length_shorter_than_init_rows() {
    // t = 2, p = 3 with initial rows retained.
    let coef = Array2::zeros((4, 1));
    let sigma = array![[1.0]];
    let init = array![[1.0], [2.0], [3.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let err = simulate_var(2, coef, sigma, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        VarError::InsufficientSampleLength { t: 2, min: 3 }
    ));
}

#[test]
fn drop_init_bypasses_length_check() {
    let coef = Array2::zeros((4, 1));
    let sigma = array![[1.0]];
    let init = array![[1.0], [2.0], [3.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let path = simulate_var(2, coef, sigma, init.view(), true, &mut rng).unwrap();
    assert_eq!(path.shape(), &[2, 1]);
}

#[test]
fn coef_rows_disagree_with_init_rows() {
    // B is 5x2, so p = 2; one initial row means the expected k would
    // have been 3.
    let coef = Array2::zeros((5, 2));
    let sigma = Array2::eye(2);
    let init = array![[1.0, 2.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let err = simulate_var(10, coef, sigma, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(err, VarError::InconsistentDimensions { .. }));
}

#[test]
fn coef_rows_not_whole_lag_blocks() {
    // k - 1 = 5 is not a multiple of n = 2 for any order.
    let coef = Array2::zeros((6, 2));
    let sigma = Array2::eye(2);
    let init = array![[1.0, 2.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let err = simulate_var(10, coef, sigma, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(err, VarError::InconsistentDimensions { .. }));
}

#[test]
fn sigma_wrong_dimension() {
    let coef = Array2::zeros((3, 2));
    let sigma = Array2::eye(3);
    let init = array![[1.0, 2.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let err = simulate_var(10, coef, sigma, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(err, VarError::InconsistentDimensions { .. }));
}

#[test]
fn init_wrong_column_count() {
    let coef = Array2::zeros((3, 2));
    let sigma = Array2::eye(2);
    let init = array![[1.0], [2.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let err = simulate_var(10, coef, sigma, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(err, VarError::InconsistentDimensions { .. }));
}

#[test]
fn indefinite_sigma_rejected_at_simulation() {
    // Shape-valid but indefinite: the model constructor accepts it, the
    // sampling step rejects it.
    let coef = Array2::zeros((3, 2));
    let sigma = array![[1.0, 2.0], [2.0, 1.0]];
    let init = array![[0.0, 0.0]];

    let model = VarModel::new(coef, sigma).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let err = model.simulate(10, init.view(), false, &mut rng).unwrap_err();
    assert!(matches!(err, VarError::NotPositiveSemiDefinite { .. }));
}

#[test]
fn zero_covariance_accepted() {
    let coef = array![[1.0], [0.5]];
    let sigma = array![[0.0]];
    let init = array![[0.0]];
    let mut rng = StdRng::seed_from_u64(42);

    let path = simulate_var(10, coef, sigma, init.view(), false, &mut rng).unwrap();
    assert_eq!(path.shape(), &[10, 1]);
}
