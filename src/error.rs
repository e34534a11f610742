//! Error types for the varsim crate.

/// Error type for all fallible operations in the varsim crate.
///
/// The first two variants are input-validation failures detected before
/// any simulation work begins; there is no partial result on failure.
/// [`VarError::NotPositiveSemiDefinite`] originates in the
/// Gaussian-sampling capability and is surfaced to the caller unchanged.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VarError {
    /// Returned when the requested sample length is shorter than the
    /// number of initial condition rows that must be carried over.
    #[error("sample length {t} is shorter than the number of initial conditions ({min})")]
    InsufficientSampleLength {
        /// Requested sample length.
        t: usize,
        /// Minimum sample length (the number of initial condition rows).
        min: usize,
    },

    /// Returned when the shape relations between the coefficient matrix,
    /// covariance matrix, and initial observations do not hold.
    #[error("argument dimensions are inconsistent: {argument} is {got}, expected {expected}")]
    InconsistentDimensions {
        /// Name of the offending argument.
        argument: &'static str,
        /// Expected shape.
        expected: String,
        /// Actual shape.
        got: String,
    },

    /// Returned when the covariance matrix cannot be factorised for
    /// sampling because it is not positive semi-definite.
    #[error("covariance matrix is not positive semi-definite (pivot {pivot})")]
    NotPositiveSemiDefinite {
        /// Index of the Cholesky pivot that failed.
        pivot: usize,
    },
}
