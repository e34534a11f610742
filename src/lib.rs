//! # varsim
//!
//! Sample-path simulation for vector autoregressions (VAR(p)) driven by
//! independent Gaussian innovations.
//!
//! Given a coefficient matrix `B`, an innovation covariance `Sigma`, and
//! `p` rows of initial observations, the simulator iterates the linear
//! recursion `y_t = x_t' B + eps_t` forward and returns the whole path
//! as one matrix.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["VarModel::new(B, Sigma)"] -->|".simulate(t, init, drop_init, &mut rng)?"| Y["path: Array2"]
//!     A -->|".simulate_with(t, init, drop_init, &mut source)?"| Y
//!     F["simulate_var(t, B, Sigma, init, drop_init, &mut rng)"] --> Y
//! ```
//!
//! ## Two Usage Paths
//!
//! **Model value** (validate once, simulate many times):
//! ```ignore
//! let model = VarModel::new(coef, sigma)?;
//! let path = model.simulate(500, init.view(), false, &mut rng)?;
//! ```
//!
//! **One-shot** (flat signature):
//! ```ignore
//! let path = simulate_var(500, coef, sigma, init.view(), false, &mut rng)?;
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | B | [`VarModel::coef()`] | `(n*p+1) x n` coefficients: intercept row, then one `n x n` block per lag, most recent lag first |
//! | Sigma | [`VarModel::sigma()`] | `n x n` innovation covariance |
//! | Yinit | `init` argument | `p x n` initial observations; the last row is the most recent |
//! | x | [`Regressor`] | `[1, y_{t-1}', ..., y_{t-p}']` lagged regressor vector |
//! | eps_t | [`InnovationSource::draw()`] | i.i.d. `N(0, Sigma)` innovation rows, drawn in one batch |

mod error;
mod model;
mod mvn;
mod regressor;
mod simulate;

pub use error::VarError;
pub use model::VarModel;
pub use mvn::{GaussianSource, InnovationSource, MvnSampler};
pub use regressor::Regressor;
pub use simulate::simulate_var;
