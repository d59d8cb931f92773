//! Property-based tests using proptest.
//!
//! These check pricing and solver invariants across random contracts near
//! the money, where the price is sensitive enough to volatility for a
//! price tolerance to pin down the vol.

use proptest::prelude::*;
use bsiv::conventions::discount_factor;
use bsiv::implied::SolveStatus;
use bsiv::pricing::{BlackScholes, PricingModel};
use bsiv::{OptionType, black_scholes_price, black_scholes_vega, solve_implied_volatility};

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

proptest! {
    /// Price strictly increases with volatility for calls and puts.
    #[test]
    fn price_increasing_in_vol(
        strike in 80.0_f64..120.0,
        expiry in 0.1_f64..3.0,
        rate in 0.0_f64..0.08,
        vol in 0.05_f64..1.5,
        bump in 0.01_f64..0.5,
        kind in option_type(),
    ) {
        let lo = black_scholes_price(100.0, strike, expiry, rate, vol, kind).unwrap();
        let hi = black_scholes_price(100.0, strike, expiry, rate, vol + bump, kind).unwrap();
        prop_assert!(hi > lo, "price({}) = {} not above price({}) = {}", vol + bump, hi, vol, lo);
    }

    /// C − P = S − K·e^(−rT).
    #[test]
    fn put_call_parity(
        spot in 10.0_f64..500.0,
        strike in 10.0_f64..500.0,
        expiry in 0.01_f64..5.0,
        rate in -0.02_f64..0.1,
        vol in 0.01_f64..2.0,
    ) {
        let call = black_scholes_price(spot, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = black_scholes_price(spot, strike, expiry, rate, vol, OptionType::Put).unwrap();
        let parity = spot - strike * discount_factor(rate, expiry);
        prop_assert!(
            (call - put - parity).abs() < 1e-6 * spot.max(strike),
            "C - P = {}, S - K·df = {}", call - put, parity
        );
    }

    /// Vega through the model seam is the same for calls and puts.
    #[test]
    fn vega_independent_of_option_type(
        strike in 50.0_f64..150.0,
        expiry in 0.05_f64..3.0,
        rate in 0.0_f64..0.08,
        vol in 0.05_f64..1.5,
    ) {
        let model = BlackScholes;
        let call = model.vega(100.0, strike, expiry, rate, vol, OptionType::Call).unwrap();
        let put = model.vega(100.0, strike, expiry, rate, vol, OptionType::Put).unwrap();
        prop_assert_eq!(call, put);
        prop_assert_eq!(call, black_scholes_vega(100.0, strike, expiry, rate, vol).unwrap());
        prop_assert!(call > 0.0);
    }

    /// Pricing at a known vol and solving back recovers it.
    #[test]
    fn implied_vol_round_trip(
        strike in 90.0_f64..110.0,
        expiry in 0.25_f64..2.0,
        rate in 0.0_f64..0.05,
        vol in 0.1_f64..1.5,
        kind in option_type(),
    ) {
        let price = black_scholes_price(100.0, strike, expiry, rate, vol, kind).unwrap();
        let est = solve_implied_volatility(price, 100.0, strike, rate, expiry, kind).unwrap();
        prop_assert_eq!(est.status, SolveStatus::Converged);
        prop_assert!((est.vol.0 - vol).abs() < 1e-4, "recovered {} for {}", est.vol.0, vol);
    }

    /// Any price under the floor price reports the floor as infeasible.
    #[test]
    fn below_floor_price_is_infeasible(
        strike in 50.0_f64..95.0,
        expiry in 0.1_f64..2.0,
        rate in 0.0_f64..0.05,
        shortfall in 0.01_f64..0.99,
    ) {
        let floor =
            black_scholes_price(100.0, strike, expiry, rate, 1e-5, OptionType::Call).unwrap();
        let target = floor * (1.0 - shortfall);
        let est =
            solve_implied_volatility(target, 100.0, strike, rate, expiry, OptionType::Call)
                .unwrap();
        prop_assert_eq!(est.status, SolveStatus::Infeasible);
        prop_assert_eq!(est.vol.0, 1e-5);
    }
}
