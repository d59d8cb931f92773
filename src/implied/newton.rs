//! Damped Newton-Raphson implied volatility.
//!
//! Starting from `initial_vol`, each iteration reprices the option, and if the
//! residual is outside tolerance moves the estimate by `diff / vega`, capped
//! at `±max_vol_update`. The cap keeps the iteration stable where vega is
//! small (short expiries, far from the money).

use serde::{Deserialize, Serialize};

use crate::error::{self, BsivError};
use crate::implied::config::SolverConfig;
use crate::pricing::{BlackScholes, PricingModel};
use crate::types::{OptionType, Vol};
use crate::validate::{validate_finite, validate_non_negative, validate_positive};

#[cfg(feature = "logging")]
use crate::conventions::Moneyness;

/// Log-moneyness band treated as at the money in diagnostics.
#[cfg(feature = "logging")]
const ATM_BAND: f64 = 0.02;

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The model price matched the market price within tolerance.
    Converged,
    /// The market price is below the model price at the volatility floor, so
    /// no positive volatility reproduces it. The reported vol is the floor.
    Infeasible,
    /// The iteration budget ran out. The reported vol is the last estimate.
    MaxIterationsReached,
}

/// Result of an implied volatility solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolEstimate {
    /// Volatility estimate (the floor when [`SolveStatus::Infeasible`]).
    pub vol: Vol,
    /// Termination reason.
    pub status: SolveStatus,
    /// Newton updates applied before termination.
    pub iterations: usize,
}

impl ImpliedVolEstimate {
    /// Whether the estimate reprices the market within tolerance.
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }
}

/// Implied volatility solver over a [`PricingModel`].
///
/// # Examples
/// ```
/// use bsiv::implied::{ImpliedVolSolver, SolverConfig};
/// use bsiv::{OptionType, black_scholes_price};
///
/// let price = black_scholes_price(100.0, 105.0, 0.5, 0.02, 0.25, OptionType::Call).unwrap();
/// let solver = ImpliedVolSolver::new(SolverConfig::default()).unwrap();
/// let est = solver.solve(price, 100.0, 105.0, 0.02, 0.5, OptionType::Call).unwrap();
///
/// assert!(est.is_converged());
/// assert!((est.vol.0 - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<M = BlackScholes> {
    model: M,
    config: SolverConfig,
}

impl ImpliedVolSolver<BlackScholes> {
    /// Create a Black-Scholes solver.
    ///
    /// # Errors
    /// Returns [`BsivError::InvalidInput`] if the configuration is invalid.
    pub fn new(config: SolverConfig) -> error::Result<Self> {
        Self::with_model(BlackScholes, config)
    }
}

impl Default for ImpliedVolSolver<BlackScholes> {
    fn default() -> Self {
        Self {
            model: BlackScholes,
            config: SolverConfig::default(),
        }
    }
}

impl<M: PricingModel> ImpliedVolSolver<M> {
    /// Create a solver over an arbitrary pricing model.
    ///
    /// # Errors
    /// Returns [`BsivError::InvalidInput`] if the configuration is invalid.
    pub fn with_model(model: M, config: SolverConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Underlying pricing model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Solve for the volatility at which the model reprices `market_price`.
    ///
    /// An infeasible price and an exhausted iteration budget are not errors;
    /// both are reported through [`ImpliedVolEstimate::status`].
    ///
    /// # Arguments
    /// * `market_price` — Observed option price (must be ≥ 0)
    /// * `spot` — Underlying spot price (must be > 0)
    /// * `strike` — Strike price (must be > 0)
    /// * `rate` — Continuously compounded risk-free rate
    /// * `expiry` — Time to expiry in years (must be > 0)
    /// * `option_type` — Call or Put
    ///
    /// # Errors
    /// Returns [`BsivError::InvalidInput`] for malformed inputs and
    /// [`BsivError::NumericalError`] if the model yields a non-finite price
    /// or vega.
    pub fn solve(
        &self,
        market_price: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> error::Result<ImpliedVolEstimate> {
        validate_non_negative(market_price, "market price")?;
        validate_positive(spot, "spot")?;
        validate_positive(strike, "strike")?;
        validate_positive(expiry, "expiry")?;
        validate_finite(rate, "rate")?;

        let cfg = &self.config;
        let price_at = |vol: f64| -> error::Result<f64> {
            let p = self.model.price(spot, strike, expiry, rate, vol, option_type)?;
            if !p.is_finite() {
                return Err(BsivError::NumericalError {
                    message: format!("model price is not finite at vol {vol}: {p}"),
                });
            }
            Ok(p)
        };

        // Price is increasing in vol, so a floor price above the market
        // price rules out every positive vol.
        let floor_price = price_at(cfg.vol_floor)?;
        if floor_price > market_price {
            #[cfg(feature = "logging")]
            tracing::warn!(
                market_price,
                floor_price,
                spot,
                strike,
                %option_type,
                moneyness = ?Moneyness::classify(spot, strike, option_type, ATM_BAND),
                "market price below model price at vol floor; no implied vol exists"
            );
            return Ok(ImpliedVolEstimate {
                vol: Vol(cfg.vol_floor),
                status: SolveStatus::Infeasible,
                iterations: 0,
            });
        }

        let mut vol = cfg.initial_vol;
        for iteration in 0..cfg.max_iterations {
            let diff = price_at(vol)? - market_price;
            if diff.abs() < cfg.price_tolerance {
                return Ok(ImpliedVolEstimate {
                    vol: Vol(vol),
                    status: SolveStatus::Converged,
                    iterations: iteration,
                });
            }

            let vega = self
                .model
                .vega(spot, strike, expiry, rate, vol, option_type)?;
            if !vega.is_finite() {
                return Err(BsivError::NumericalError {
                    message: format!("model vega is not finite at vol {vol}: {vega}"),
                });
            }

            let step = damped_step(diff, vega, cfg.max_vol_update);

            #[cfg(feature = "logging")]
            tracing::trace!(iteration, vol, diff, vega, step, "newton step");

            vol = (vol - step).max(cfg.vol_floor);
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            market_price,
            spot,
            strike,
            vol,
            max_iterations = cfg.max_iterations,
            "implied vol did not converge; returning last estimate"
        );

        Ok(ImpliedVolEstimate {
            vol: Vol(vol),
            status: SolveStatus::MaxIterationsReached,
            iterations: cfg.max_iterations,
        })
    }
}

/// Newton step `diff / vega` clamped to `±cap`.
///
/// A vega that has underflowed to zero (or any other non-finite ratio)
/// saturates the step at the cap in the direction that reduces `diff`.
fn damped_step(diff: f64, vega: f64, cap: f64) -> f64 {
    let raw = diff / vega;
    if vega > 0.0 && raw.is_finite() {
        raw.clamp(-cap, cap)
    } else {
        cap.copysign(diff)
    }
}

/// Solve for Black-Scholes implied volatility with the default configuration.
///
/// # Errors
/// See [`ImpliedVolSolver::solve`].
///
/// # Examples
/// ```
/// use bsiv::implied::{SolveStatus, solve_implied_volatility};
/// use bsiv::{OptionType, black_scholes_price};
///
/// let expiry = 3.0 / 252.0;
/// let est =
///     solve_implied_volatility(330.375, 730.0, 410.0, 0.01, expiry, OptionType::Call).unwrap();
/// assert_eq!(est.status, SolveStatus::Converged);
///
/// let repriced =
///     black_scholes_price(730.0, 410.0, expiry, 0.01, est.vol.0, OptionType::Call).unwrap();
/// assert!((repriced - 330.375).abs() < 1e-4);
/// ```
pub fn solve_implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    option_type: OptionType,
) -> error::Result<ImpliedVolEstimate> {
    ImpliedVolSolver::<BlackScholes>::default().solve(
        market_price,
        spot,
        strike,
        rate,
        expiry,
        option_type,
    )
}
