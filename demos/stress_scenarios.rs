//! Stress testing example.
//!
//! Runs the built-in scenario catalog plus a custom shock over a
//! portfolio reported in EUR. Positions quoted in EUR are immune;
//! the USD-quoted ones take the full shock.

use fx_risk_engine::core::currency::{CurrencyCode, CurrencyPair};
use fx_risk_engine::core::exposure::Exposure;
use fx_risk_engine::simulation::portfolio::{run_simulation, SimulationParameters};
use fx_risk_engine::simulation::stress::{
    apply_scenarios, builtin_scenarios, ImpactLabel, StressScenario,
};

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  fx-risk-engine: Stress Scenarios Example     ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let params = SimulationParameters {
        name: Some("EUR-Reported Book".to_string()),
        base_currency: CurrencyCode::new("EUR"),
        risk_appetite: 2,
        time_horizon_days: 90,
        exposures: vec![
            Exposure::new(CurrencyPair::new("USD", "EUR"), 500_000.0),
            Exposure::new(CurrencyPair::new("GBP", "USD"), 250_000.0).hedged(true),
            Exposure::new(CurrencyPair::new("JPY", "USD"), 40_000_000.0)
                .with_volatility_factor(2),
        ],
    };

    let results = run_simulation(&params);
    println!("{}", results);

    println!("━━━ Built-in Catalog ━━━\n");
    let stressed = apply_scenarios(&results.exposures, &params.base_currency, &builtin_scenarios());
    for result in &stressed {
        println!("{}", result);
    }

    println!("━━━ Custom Scenario ━━━\n");
    let custom = StressScenario::new(
        "EUR Weakness",
        "Base currency sells off; foreign positions gain",
        ImpactLabel::Medium,
        0.07,
    );
    let custom_results = apply_scenarios(&results.exposures, &params.base_currency, &[custom]);
    for result in &custom_results {
        println!("{}", result);
    }
}
