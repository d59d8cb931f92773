//! Market conventions: discounting, forwards and moneyness.
//!
//! Moneyness labels are what a smile consumer attaches to each solved quote;
//! the solver also records them in its diagnostics.

use serde::{Deserialize, Serialize};

use crate::types::OptionType;

/// Where a contract sits relative to the underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    /// Exercising today would pay off.
    InTheMoney,
    /// Spot within the at-the-money band of the strike.
    AtTheMoney,
    /// Exercising today would pay nothing.
    OutOfTheMoney,
}

impl Moneyness {
    /// Classify a contract by spot moneyness.
    ///
    /// The contract is at the money when `|ln(S/K)| <= atm_band`. Outside the
    /// band a call is in the money when `S > K` and a put when `S < K`.
    ///
    /// # Examples
    /// ```
    /// use bsiv::OptionType;
    /// use bsiv::conventions::Moneyness;
    ///
    /// let m = Moneyness::classify(730.0, 410.0, OptionType::Call, 0.02);
    /// assert_eq!(m, Moneyness::InTheMoney);
    /// ```
    pub fn classify(spot: f64, strike: f64, option_type: OptionType, atm_band: f64) -> Self {
        let k = (spot / strike).ln();
        if k.abs() <= atm_band {
            return Moneyness::AtTheMoney;
        }
        match (option_type, k > 0.0) {
            (OptionType::Call, true) | (OptionType::Put, false) => Moneyness::InTheMoney,
            _ => Moneyness::OutOfTheMoney,
        }
    }
}

/// Convert a strike to log-moneyness: k = ln(K / F).
pub fn log_moneyness(strike: f64, forward: f64) -> f64 {
    (strike / forward).ln()
}

/// Convert a strike to simple moneyness: m = K / F.
pub fn moneyness(strike: f64, forward: f64) -> f64 {
    strike / forward
}

/// Compute forward price from spot: F = S · exp(r · T).
pub fn forward_price(spot: f64, rate: f64, expiry: f64) -> f64 {
    spot * (rate * expiry).exp()
}

/// Continuously compounded discount factor: exp(−r · T).
pub fn discount_factor(rate: f64, expiry: f64) -> f64 {
    (-rate * expiry).exp()
}
