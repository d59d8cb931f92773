//! Implied volatilities across a strip of quotes.
//!
//! All quotes share spot, rate, expiry and option type; they are solved one
//! after another and a failing quote does not stop the rest.

use serde::{Deserialize, Serialize};

use crate::error;
use crate::implied::newton::{ImpliedVolEstimate, ImpliedVolSolver, SolveStatus};
use crate::pricing::PricingModel;
use crate::types::OptionType;

/// One observed market quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Strike price.
    pub strike: f64,
    /// Observed option price.
    pub market_price: f64,
}

/// Solve outcome for a single quote.
#[derive(Debug)]
pub struct SmilePoint {
    /// Strike of the originating quote.
    pub strike: f64,
    /// Estimate, or the error that prevented one.
    pub result: error::Result<ImpliedVolEstimate>,
}

impl<M: PricingModel> ImpliedVolSolver<M> {
    /// Solve every quote in order.
    ///
    /// The returned points line up index-for-index with `quotes`.
    ///
    /// # Examples
    /// ```
    /// use bsiv::implied::{ImpliedVolSolver, OptionQuote};
    /// use bsiv::{OptionType, black_scholes_price};
    ///
    /// let quotes: Vec<OptionQuote> = [90.0, 100.0, 110.0]
    ///     .iter()
    ///     .map(|&k| OptionQuote {
    ///         strike: k,
    ///         market_price: black_scholes_price(100.0, k, 0.5, 0.01, 0.3, OptionType::Put)
    ///             .unwrap(),
    ///     })
    ///     .collect();
    ///
    /// let solver: ImpliedVolSolver = ImpliedVolSolver::default();
    /// let smile = solver.solve_smile(100.0, 0.01, 0.5, OptionType::Put, &quotes);
    /// assert_eq!(smile.len(), 3);
    /// for point in &smile {
    ///     let est = point.result.as_ref().unwrap();
    ///     assert!((est.vol.0 - 0.3).abs() < 1e-4);
    /// }
    /// ```
    pub fn solve_smile(
        &self,
        spot: f64,
        rate: f64,
        expiry: f64,
        option_type: OptionType,
        quotes: &[OptionQuote],
    ) -> Vec<SmilePoint> {
        let points: Vec<SmilePoint> = quotes
            .iter()
            .map(|q| SmilePoint {
                strike: q.strike,
                result: self.solve(q.market_price, spot, q.strike, rate, expiry, option_type),
            })
            .collect();

        #[cfg(feature = "logging")]
        {
            let converged = points
                .iter()
                .filter(|p| matches!(&p.result, Ok(est) if est.status == SolveStatus::Converged))
                .count();
            let failed = points.iter().filter(|p| p.result.is_err()).count();
            tracing::debug!(
                n_quotes = quotes.len(),
                converged,
                failed,
                %option_type,
                "smile solve complete"
            );
        }

        points
    }
}

impl SmilePoint {
    /// Volatility if the quote converged.
    pub fn converged_vol(&self) -> Option<f64> {
        match &self.result {
            Ok(est) if est.status == SolveStatus::Converged => Some(est.vol.0),
            _ => None,
        }
    }
}
