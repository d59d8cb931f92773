//! Extract implied volatility from option prices.
//!
//! Shows how to:
//!   - Price an option with Black-Scholes
//!   - Solve a single quote back to its implied vol
//!   - Solve a strip of quotes and read the solver status
//!
//! Run with: `cargo run --example implied_vol`

use bsiv::conventions::Moneyness;
use bsiv::implied::{ImpliedVolSolver, OptionQuote, SolveStatus, SolverConfig};
use bsiv::{OptionType, black_scholes_price, solve_implied_volatility};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spot = 730.0;
    let rate = 0.01;
    let expiry = 3.0 / 252.0; // 3 trading days

    // ---------------------------------------------------------------
    // 1. Single quote
    // ---------------------------------------------------------------

    let est = solve_implied_volatility(330.375, spot, 410.0, rate, expiry, OptionType::Call)?;
    let repriced = black_scholes_price(spot, 410.0, expiry, rate, est.vol.0, OptionType::Call)?;

    println!("Single quote (K = 410, market 330.375)");
    println!("  Implied vol: {}", est.vol);
    println!("  Status:      {:?} after {} iterations", est.status, est.iterations);
    println!("  Repriced:    {repriced:.6}");

    // ---------------------------------------------------------------
    // 2. Strip of quotes
    // ---------------------------------------------------------------

    let quotes: Vec<OptionQuote> = [650.0, 700.0, 720.0, 730.0, 740.0, 760.0, 800.0]
        .iter()
        .map(|&k| {
            let vol = 0.30 + 0.6 * (k / spot - 1.0_f64).abs();
            black_scholes_price(spot, k, expiry, rate, vol, OptionType::Call).map(|p| OptionQuote {
                strike: k,
                market_price: p,
            })
        })
        .collect::<Result<_, _>>()?;

    let solver = ImpliedVolSolver::new(SolverConfig::default())?;
    let smile = solver.solve_smile(spot, rate, expiry, OptionType::Call, &quotes);

    println!("\n--- Call smile ---\n");
    println!("{:>8} {:>14} {:>12} {:>22}", "Strike", "Moneyness", "IV", "Status");
    println!("{}", "-".repeat(60));
    for point in &smile {
        let m = Moneyness::classify(spot, point.strike, OptionType::Call, 0.02);
        match &point.result {
            Ok(est) => println!(
                "{:>8.0} {:>14} {:>12} {:>22}",
                point.strike,
                format!("{m:?}"),
                est.vol.to_string(),
                format!("{:?}", est.status)
            ),
            Err(e) => println!(
                "{:>8.0} {:>14} {:>12} {:>22}",
                point.strike,
                format!("{m:?}"),
                "-",
                e
            ),
        }
    }

    // ---------------------------------------------------------------
    // 3. A price no volatility can explain
    // ---------------------------------------------------------------

    let est = solve_implied_volatility(300.0, spot, 410.0, rate, expiry, OptionType::Call)?;
    assert_eq!(est.status, SolveStatus::Infeasible);
    println!("\nMarket 300.0 for K = 410 is below intrinsic: {:?}", est.status);

    Ok(())
}
