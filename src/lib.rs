//! # bsiv
//!
//! Black-Scholes pricing for European options and implied volatility via a
//! damped Newton-Raphson root-finder.
//!
//! ## Architecture
//!
//! - **`pricing`** — Closed-form Black-Scholes price and vega, plus the
//!   [`PricingModel`] trait the solver is generic over
//! - **`implied`** — Implied volatility solver, its configuration, and a
//!   sequential helper for a strip of quotes
//! - **`conventions`** — Discounting, forwards and moneyness
//!
//! ## Design
//!
//! - **Status, not errors, for solver outcomes.** An infeasible market price
//!   and an exhausted iteration budget both return an [`ImpliedVolEstimate`]
//!   tagged with a [`SolveStatus`]. Only malformed inputs and numerical
//!   breakdowns return [`BsivError`].
//! - **No panics.** Library code never calls `unwrap()` or `expect()`.
//! - **No hidden constants.** Iteration budget, damping and tolerances live in
//!   [`SolverConfig`].
//! - **Logging.** With the default `logging` feature, diagnostics are emitted
//!   through `tracing`.
//!
//! ```
//! use bsiv::{OptionType, black_scholes_price, solve_implied_volatility};
//!
//! let price = black_scholes_price(100.0, 95.0, 0.5, 0.03, 0.28, OptionType::Call).unwrap();
//! let est = solve_implied_volatility(price, 100.0, 95.0, 0.03, 0.5, OptionType::Call).unwrap();
//! assert!(est.is_converged());
//! assert!((est.vol.0 - 0.28).abs() < 1e-4);
//! ```

pub mod conventions;
pub mod error;
pub mod implied;
pub mod pricing;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{BsivError, Result};
#[doc(inline)]
pub use implied::{
    ImpliedVolEstimate, ImpliedVolSolver, SolveStatus, SolverConfig, solve_implied_volatility,
};
#[doc(inline)]
pub use pricing::{BlackScholes, PricingModel, black_scholes_price, black_scholes_vega};
#[doc(inline)]
pub use types::{OptionType, Vol};
