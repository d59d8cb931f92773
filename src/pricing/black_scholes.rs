//! Black-Scholes pricing and vega for European options.
//!
//! # Formula
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ√T)
//! d2 = d1 − σ√T
//!
//! C = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! P = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
//! vega = S·φ(d1)·√T
//! ```

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

use crate::conventions::discount_factor;
use crate::error::{self, BsivError};
use crate::pricing::PricingModel;
use crate::types::OptionType;
use crate::validate::{validate_finite, validate_positive};

/// Total standard deviation `σ√T` below which `d1` is considered degenerate.
const MIN_STD_DEV: f64 = 1e-12;

/// Black-Scholes model with European exercise.
///
/// Stateless; exists so the solver can be parameterized over
/// [`PricingModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn price(
        &self,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        option_type: OptionType,
    ) -> error::Result<f64> {
        black_scholes_price(spot, strike, expiry, rate, vol, option_type)
    }

    fn vega(
        &self,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        vol: f64,
        _option_type: OptionType,
    ) -> error::Result<f64> {
        black_scholes_vega(spot, strike, expiry, rate, vol)
    }
}

/// Standard normal cumulative distribution function Φ.
pub(crate) fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function φ.
pub(crate) fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Validate contract inputs and return `(d1, d2)`.
fn d1_d2(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> error::Result<(f64, f64)> {
    validate_positive(spot, "spot")?;
    validate_positive(strike, "strike")?;
    validate_positive(expiry, "expiry")?;
    validate_finite(rate, "rate")?;
    validate_positive(vol, "vol")?;

    let std_dev = vol * expiry.sqrt();
    if std_dev < MIN_STD_DEV {
        return Err(BsivError::InvalidInput {
            message: format!("vol·√expiry is degenerate: {std_dev:e}"),
        });
    }

    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / std_dev;
    Ok((d1, d1 - std_dev))
}

fn ensure_finite(value: f64, what: &str) -> error::Result<f64> {
    if !value.is_finite() {
        return Err(BsivError::NumericalError {
            message: format!("{what} is not finite: {value}"),
        });
    }
    Ok(value)
}

/// Black-Scholes value of a European option.
///
/// # Arguments
/// * `spot` — Underlying spot price (must be > 0)
/// * `strike` — Strike price (must be > 0)
/// * `expiry` — Time to expiry in years (must be > 0)
/// * `rate` — Continuously compounded risk-free rate
/// * `vol` — Annualized volatility (must be > 0)
/// * `option_type` — Call or Put
///
/// # Errors
/// Returns [`BsivError::InvalidInput`] for non-positive or non-finite inputs
/// and a degenerate `vol·√expiry`, [`BsivError::NumericalError`] if the
/// result is not finite.
///
/// # Examples
/// ```
/// use bsiv::{OptionType, black_scholes_price};
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((call - 10.450_583_572_185_565).abs() < 1e-9);
/// ```
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> error::Result<f64> {
    let (d1, d2) = d1_d2(spot, strike, expiry, rate, vol)?;
    let discounted_strike = strike * discount_factor(rate, expiry);

    let price = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };
    // Cancellation can leave a deep out-of-the-money price a hair below zero.
    ensure_finite(price, "option price").map(|p| p.max(0.0))
}

/// Black-Scholes vega, ∂V/∂σ, shared by calls and puts.
///
/// # Errors
/// Same conditions as [`black_scholes_price`].
///
/// # Examples
/// ```
/// use bsiv::black_scholes_vega;
///
/// let vega = black_scholes_vega(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((vega - 37.524_034_691_693_79).abs() < 1e-9);
/// ```
pub fn black_scholes_vega(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
) -> error::Result<f64> {
    let (d1, _) = d1_d2(spot, strike, expiry, rate, vol)?;
    ensure_finite(spot * norm_pdf(d1) * expiry.sqrt(), "vega")
}
