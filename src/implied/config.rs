//! Solver configuration.
//!
//! ```
//! use bsiv::implied::SolverConfig;
//!
//! let config = SolverConfig::builder()
//!     .max_iterations(250)
//!     .price_tolerance(1e-8)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.max_iterations, 250);
//! assert_eq!(config.initial_vol, 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{self, BsivError};
use crate::validate::validate_positive;

/// Tunable parameters of the damped Newton-Raphson iteration.
///
/// Deserializes with `#[serde(default)]`, so a partial document overrides
/// only the fields it names. Call [`validate`](SolverConfig::validate) (or
/// build through [`ImpliedVolSolver::new`](crate::implied::ImpliedVolSolver::new))
/// before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting volatility estimate σ₀.
    pub initial_vol: f64,
    /// Maximum number of Newton updates before giving up.
    pub max_iterations: usize,
    /// Largest volatility change allowed in one update.
    pub max_vol_update: f64,
    /// Absolute tolerance on `|model price − market price|`.
    pub price_tolerance: f64,
    /// Volatility used for the feasibility probe; iterates never go below it.
    pub vol_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_vol: 0.5,
            max_iterations: 100,
            max_vol_update: 0.1,
            price_tolerance: 1e-5,
            vol_floor: 1e-5,
        }
    }
}

impl SolverConfig {
    /// Start a builder seeded with the default configuration.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    /// Returns [`BsivError::InvalidInput`] if a parameter is non-positive or
    /// non-finite, if `max_iterations` is zero, or if `initial_vol` lies
    /// below `vol_floor`.
    pub fn validate(&self) -> error::Result<()> {
        validate_positive(self.initial_vol, "initial_vol")?;
        validate_positive(self.max_vol_update, "max_vol_update")?;
        validate_positive(self.price_tolerance, "price_tolerance")?;
        validate_positive(self.vol_floor, "vol_floor")?;
        if self.max_iterations == 0 {
            return Err(BsivError::InvalidInput {
                message: "max_iterations must be at least 1".into(),
            });
        }
        if self.initial_vol < self.vol_floor {
            return Err(BsivError::InvalidInput {
                message: format!(
                    "initial_vol ({}) must not be below vol_floor ({})",
                    self.initial_vol, self.vol_floor
                ),
            });
        }
        Ok(())
    }
}

/// Fluent builder for [`SolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    /// Set the starting volatility estimate.
    pub fn initial_vol(mut self, vol: f64) -> Self {
        self.config.initial_vol = vol;
        self
    }

    /// Set the iteration budget.
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.config.max_iterations = n;
        self
    }

    /// Set the damping cap on each update.
    pub fn max_vol_update(mut self, cap: f64) -> Self {
        self.config.max_vol_update = cap;
        self
    }

    /// Set the absolute price tolerance.
    pub fn price_tolerance(mut self, tol: f64) -> Self {
        self.config.price_tolerance = tol;
        self
    }

    /// Set the volatility floor.
    pub fn vol_floor(mut self, floor: f64) -> Self {
        self.config.vol_floor = floor;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    /// See [`SolverConfig::validate`].
    pub fn build(self) -> error::Result<SolverConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let c = SolverConfig::default();
        assert_eq!(c.initial_vol, 0.5);
        assert_eq!(c.max_iterations, 100);
        assert_eq!(c.max_vol_update, 0.1);
        assert_eq!(c.price_tolerance, 1e-5);
        assert_eq!(c.vol_floor, 1e-5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let c = SolverConfig::builder()
            .initial_vol(0.3)
            .max_iterations(7)
            .max_vol_update(0.25)
            .price_tolerance(1e-9)
            .vol_floor(1e-6)
            .build()
            .unwrap();
        assert_eq!(c.initial_vol, 0.3);
        assert_eq!(c.max_iterations, 7);
        assert_eq!(c.max_vol_update, 0.25);
        assert_eq!(c.price_tolerance, 1e-9);
        assert_eq!(c.vol_floor, 1e-6);
    }

    #[test]
    fn zero_iterations_rejected() {
        let result = SolverConfig::builder().max_iterations(0).build();
        assert!(matches!(result, Err(BsivError::InvalidInput { .. })));
    }

    #[test]
    fn non_positive_parameters_rejected() {
        assert!(SolverConfig::builder().max_vol_update(0.0).build().is_err());
        assert!(SolverConfig::builder().price_tolerance(-1e-5).build().is_err());
        assert!(SolverConfig::builder().vol_floor(f64::NAN).build().is_err());
        assert!(SolverConfig::builder().initial_vol(-0.2).build().is_err());
    }

    #[test]
    fn initial_vol_below_floor_rejected() {
        let result = SolverConfig::builder().vol_floor(0.2).initial_vol(0.1).build();
        match result {
            Err(BsivError::InvalidInput { message }) => assert!(message.contains("vol_floor")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: SolverConfig = serde_json::from_str(r#"{"max_iterations": 20}"#).unwrap();
        assert_eq!(c.max_iterations, 20);
        assert_eq!(c.max_vol_update, 0.1);
        assert_eq!(c.initial_vol, 0.5);
    }
}
