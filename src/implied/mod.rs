//! Implied volatility extraction from option prices.
//!
//! - [`ImpliedVolSolver`] — damped Newton-Raphson over any
//!   [`PricingModel`](crate::pricing::PricingModel)
//! - [`solve_implied_volatility`] — Black-Scholes solve with default settings
//! - [`SolverConfig`] — iteration budget, damping and tolerances

pub mod config;
pub mod newton;
pub mod smile;

pub use config::{SolverConfig, SolverConfigBuilder};
pub use newton::{ImpliedVolEstimate, ImpliedVolSolver, SolveStatus, solve_implied_volatility};
pub use smile::{OptionQuote, SmilePoint};
