//! Error types for the bsiv library.
//!
//! Only malformed inputs and numerical breakdowns are errors. An infeasible
//! market price or an exhausted iteration budget is reported through
//! [`SolveStatus`](crate::implied::SolveStatus) instead.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, BsivError>;

/// Errors that can occur while pricing options or solving for implied volatility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BsivError {
    /// Input data is invalid (e.g., zero strike, negative expiry, NaN price,
    /// degenerate `σ√T`, or an inconsistent solver configuration).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Numerical computation failed (e.g., a price or vega evaluated to NaN).
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}
