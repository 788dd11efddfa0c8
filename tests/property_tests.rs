use fx_risk_engine::core::currency::{CurrencyCode, CurrencyPair, RateTable};
use fx_risk_engine::core::exposure::Exposure;
use fx_risk_engine::risk::score::{risk_score, RiskLevel};
use fx_risk_engine::risk::var::estimate_var;
use fx_risk_engine::simulation::portfolio::{run_simulation, SimulationParameters};
use fx_risk_engine::simulation::stress::{apply_scenarios, builtin_scenarios};
use proptest::prelude::*;

/// Generate a currency from a pool spanning rated, unrated and unknown codes.
fn arb_currency() -> impl Strategy<Value = CurrencyCode> {
    prop::sample::select(vec![
        CurrencyCode::new("USD"),
        CurrencyCode::new("EUR"),
        CurrencyCode::new("GBP"),
        CurrencyCode::new("JPY"),
        CurrencyCode::new("SEK"),
        CurrencyCode::new("XYZ"),
    ])
}

fn arb_amount() -> impl Strategy<Value = f64> {
    0.0..10_000_000.0f64
}

fn arb_exposure() -> impl Strategy<Value = Exposure> {
    (
        arb_currency(),
        arb_currency(),
        arb_amount(),
        any::<bool>(),
        0u8..8,
    )
        .prop_map(|(from, to, amount, hedged, factor)| {
            Exposure::new(CurrencyPair::new(from, to), amount)
                .hedged(hedged)
                .with_volatility_factor(factor)
        })
}

fn arb_portfolio() -> impl Strategy<Value = SimulationParameters> {
    (
        prop::collection::vec(arb_exposure(), 0..40),
        arb_currency(),
        0u8..8,
        1u32..1000,
    )
        .prop_map(|(exposures, base_currency, risk_appetite, time_horizon_days)| {
            SimulationParameters {
                name: None,
                base_currency,
                risk_appetite,
                time_horizon_days,
                exposures,
            }
        })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Same-currency conversion is the identity.
    //
    // convert(a, c, c) == a for any amount and any currency, known or
    // unknown, with no rounding applied.
    // ===================================================================
    #[test]
    fn identity_conversion(amount in -1e12..1e12f64, currency in arb_currency()) {
        let converted = RateTable::builtin().convert(amount, &currency, &currency);
        prop_assert_eq!(converted, amount);
    }

    // ===================================================================
    // INVARIANT 2: Risk scores are always within [1, 10].
    //
    // Holds for any factor and any appetite, including values far
    // outside the nominal 1–5 range.
    // ===================================================================
    #[test]
    fn score_always_bounded(
        from in arb_currency(),
        base in arb_currency(),
        hedged in any::<bool>(),
        factor in any::<u8>(),
        appetite in any::<u8>(),
    ) {
        let score = risk_score(&from, &base, hedged, factor, appetite);
        prop_assert!((1..=10).contains(&score), "score {} out of bounds", score);
    }

    // ===================================================================
    // INVARIANT 3: Classification is monotonic in the score and uses
    // exactly the 3/5/8 boundaries.
    // ===================================================================
    #[test]
    fn classification_is_monotonic(score in 1u8..10) {
        let lower = RiskLevel::from_score(score);
        let upper = RiskLevel::from_score(score + 1);
        prop_assert!(lower <= upper);
    }

    // ===================================================================
    // INVARIANT 4: Hedged + unhedged always reconstructs the total.
    //
    // The unhedged figure is derived by subtraction, so recombining the
    // split lands back on the total within float tolerance.
    // ===================================================================
    #[test]
    fn hedged_split_reconstructs_total(params in arb_portfolio()) {
        let results = run_simulation(&params);
        let recombined = results.hedged_exposure + results.unhedged_exposure;
        let scale = results.total_exposure.abs().max(1.0);
        prop_assert!(
            (recombined - results.total_exposure).abs() <= 1e-9 * scale,
            "hedged {} + unhedged {} != total {}",
            results.hedged_exposure, results.unhedged_exposure, results.total_exposure
        );
    }

    // ===================================================================
    // INVARIANT 5: VaR is never negative, and zero for empty books.
    // ===================================================================
    #[test]
    fn var_is_non_negative(params in arb_portfolio()) {
        let results = run_simulation(&params);
        prop_assert!(results.value_at_risk >= 0.0);
        if results.exposures.is_empty() {
            prop_assert_eq!(results.value_at_risk, 0.0);
        }
    }

    // ===================================================================
    // INVARIANT 6: VaR grows strictly with the horizon on a portfolio
    // of positive value.
    // ===================================================================
    #[test]
    fn var_strictly_increasing_in_horizon(
        amount in 1_000.0..1_000_000.0f64,
        short in 1u32..200,
        extension in 1u32..200,
    ) {
        let params = SimulationParameters {
            exposures: vec![Exposure::new(CurrencyPair::new("EUR", "USD"), amount)],
            ..Default::default()
        };
        let results = run_simulation(&params);
        let near = estimate_var(&results.exposures, 3, short);
        let far = estimate_var(&results.exposures, 3, short + extension);
        prop_assert!(far > near, "VaR {} at {}d must exceed {} at {}d",
            far, short + extension, near, short);
    }

    // ===================================================================
    // INVARIANT 7: Exposures quoted in the base currency are immune to
    // every stress scenario.
    // ===================================================================
    #[test]
    fn base_quoted_exposures_are_stress_immune(params in arb_portfolio()) {
        let results = run_simulation(&params);
        let stressed = apply_scenarios(
            &results.exposures,
            &params.base_currency,
            &builtin_scenarios(),
        );
        for result in &stressed {
            for entry in &result.exposure_impacts {
                if entry.exposure.quote_currency() == params.base_currency.as_str() {
                    prop_assert_eq!(entry.impact, 0.0);
                    prop_assert_eq!(entry.new_value, entry.exposure.base_equivalent);
                }
            }
        }
    }

    // ===================================================================
    // INVARIANT 8: A scenario's total impact equals the sum of its
    // per-exposure impacts.
    // ===================================================================
    #[test]
    fn total_impact_is_sum_of_parts(params in arb_portfolio()) {
        let results = run_simulation(&params);
        let stressed = apply_scenarios(
            &results.exposures,
            &params.base_currency,
            &builtin_scenarios(),
        );
        for result in &stressed {
            let manual: f64 = result.exposure_impacts.iter().map(|e| e.impact).sum();
            prop_assert_eq!(result.total_impact, manual);
        }
    }

    // ===================================================================
    // INVARIANT 9: Grouping conserves value.
    //
    // The per-pair aggregates must sum to the portfolio total, and every
    // pair label must appear exactly once.
    // ===================================================================
    #[test]
    fn grouping_conserves_value(params in arb_portfolio()) {
        let results = run_simulation(&params);
        let grouped: f64 = results.currency_exposures.iter().map(|g| g.amount).sum();
        prop_assert!(
            (grouped - results.total_exposure).abs() <= 1e-6 * results.total_exposure.abs().max(1.0),
            "grouped {} vs total {}", grouped, results.total_exposure
        );

        let mut labels: Vec<&str> = results
            .currency_exposures
            .iter()
            .map(|g| g.currency_pair.as_str())
            .collect();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), results.currency_exposures.len());
    }

    // ===================================================================
    // INVARIANT 10: The risk distribution accounts for every exposure,
    // with no empty buckets.
    // ===================================================================
    #[test]
    fn distribution_accounts_for_all(params in arb_portfolio()) {
        let results = run_simulation(&params);
        let counted: usize = results.risk_distribution.iter().map(|b| b.count).sum();
        prop_assert_eq!(counted, results.exposures.len());
        prop_assert!(results.risk_distribution.iter().all(|b| b.count > 0));
    }
}
