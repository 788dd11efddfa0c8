//! Random portfolio generation for benchmarks and stress-style testing.

use crate::core::currency::{CurrencyCode, CurrencyPair};
use crate::core::exposure::Exposure;
use crate::simulation::portfolio::SimulationParameters;
use rand::Rng;

/// Configuration for generating a random exposure portfolio.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Number of exposures to generate.
    pub exposure_count: usize,
    /// Source currencies to draw from.
    pub currencies: Vec<CurrencyCode>,
    /// Currency every exposure is quoted in.
    pub base_currency: CurrencyCode,
    /// Minimum exposure amount.
    pub min_amount: f64,
    /// Maximum exposure amount.
    pub max_amount: f64,
    /// Probability that a generated exposure is hedged.
    pub hedge_probability: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            exposure_count: 20,
            currencies: vec![
                CurrencyCode::new("EUR"),
                CurrencyCode::new("GBP"),
                CurrencyCode::new("JPY"),
                CurrencyCode::new("CHF"),
            ],
            base_currency: CurrencyCode::new("USD"),
            min_amount: 1_000.0,
            max_amount: 10_000_000.0,
            hedge_probability: 0.4,
        }
    }
}

/// Generate a random portfolio for testing.
pub fn generate_random_portfolio(config: &PortfolioConfig) -> SimulationParameters {
    let mut rng = rand::thread_rng();
    let mut exposures = Vec::with_capacity(config.exposure_count);

    for _ in 0..config.exposure_count {
        let currency_idx = rng.gen_range(0..config.currencies.len());
        let amount =
            (rng.gen_range(config.min_amount..config.max_amount) * 100.0).floor() / 100.0;
        let pair = CurrencyPair::new(
            config.currencies[currency_idx].clone(),
            config.base_currency.clone(),
        );
        exposures.push(
            Exposure::new(pair, amount)
                .hedged(rng.gen_bool(config.hedge_probability))
                .with_volatility_factor(rng.gen_range(1..=5)),
        );
    }

    SimulationParameters {
        base_currency: config.base_currency.clone(),
        exposures,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::portfolio::run_simulation;

    #[test]
    fn test_random_portfolio_generation() {
        let config = PortfolioConfig {
            exposure_count: 12,
            ..Default::default()
        };
        let params = generate_random_portfolio(&config);
        assert_eq!(params.exposures.len(), 12);
        for exposure in &params.exposures {
            let amount = exposure.amount_value();
            assert!(amount >= config.min_amount && amount <= config.max_amount);
            assert!((1..=5).contains(&exposure.volatility_factor()));
            assert_eq!(exposure.currency_pair().to, config.base_currency);
        }
    }

    #[test]
    fn test_random_portfolio_simulates_cleanly() {
        let params = generate_random_portfolio(&PortfolioConfig::default());
        let results = run_simulation(&params);
        assert_eq!(results.exposures.len(), params.exposures.len());
        assert!(results.total_exposure > 0.0);
        assert!(results.value_at_risk > 0.0);
    }
}
