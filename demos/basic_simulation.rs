//! Basic portfolio simulation example.
//!
//! Builds a small multi-currency exposure book and walks through the
//! engine output: scores, totals, VaR and the risk distribution.

use fx_risk_engine::core::currency::{CurrencyCode, CurrencyPair};
use fx_risk_engine::core::exposure::Exposure;
use fx_risk_engine::simulation::portfolio::{run_simulation, SimulationParameters};

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  fx-risk-engine: Basic Simulation Example     ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let params = SimulationParameters {
        name: Some("Corporate Treasury Book".to_string()),
        base_currency: CurrencyCode::new("USD"),
        risk_appetite: 3,
        time_horizon_days: 30,
        exposures: vec![
            Exposure::new(CurrencyPair::new("EUR", "USD"), 100_000.0)
                .with_notes("Q3 receivables"),
            Exposure::new(CurrencyPair::new("JPY", "USD"), 5_000_000.0)
                .hedged(true)
                .with_volatility_factor(2)
                .with_notes("Hedged via 3M forward"),
            Exposure::new(CurrencyPair::new("GBP", "USD"), 75_000.0)
                .with_volatility_factor(4),
            Exposure::new(CurrencyPair::new("TRY", "USD"), 2_000_000.0)
                .with_volatility_factor(5)
                .with_notes("Unrated currency, converts at parity"),
        ],
    };

    let results = run_simulation(&params);
    println!("{}", results);

    println!("--- Per-Exposure Assessment ---\n");
    for exposure in &results.exposures {
        println!(
            "{:<10} amount {:>14.2}  base {:>14.2}  score {:>2}  {}{}",
            exposure.currency_pair,
            exposure.amount,
            exposure.base_equivalent,
            exposure.risk_score,
            exposure.risk_level,
            if exposure.is_hedged { "  (hedged)" } else { "" }
        );
    }

    println!(
        "\nHedge ratio: {:.1}%",
        100.0 * results.hedged_exposure / results.total_exposure
    );
}
