//! Closed-form option pricing.
//!
//! The implied-volatility solver only needs a price and its sensitivity to
//! volatility. [`PricingModel`] captures exactly that, so a different model
//! can be plugged into [`ImpliedVolSolver`](crate::implied::ImpliedVolSolver)
//! without touching the iteration logic.
//!
//! ## Models
//!
//! - [`BlackScholes`] — European exercise under constant volatility and rate

pub mod black_scholes;

pub use black_scholes::{BlackScholes, black_scholes_price, black_scholes_vega};

use crate::error;
use crate::types::OptionType;

/// A model that prices an option as a function of volatility.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one solver can be shared across
/// threads.
///
/// # Contract
/// For a fixed contract, [`price`](PricingModel::price) must be increasing in
/// `vol` and [`vega`](PricingModel::vega) must be its derivative. The solver's
/// feasibility check relies on the former.
pub trait PricingModel: Send + Sync {
    /// Fair value of the option.
    fn price(
        &self,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> error::Result<f64>;

    /// Sensitivity of the price to volatility, ∂V/∂σ.
    fn vega(
        &self,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> error::Result<f64>;
}
