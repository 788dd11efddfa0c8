use crate::core::volatility::VolatilityTable;
use crate::risk::score::ProcessedExposure;

/// Trading days assumed per year for square-root-of-time scaling.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One-tailed z-score for a confidence-level index.
///
/// The index deliberately reuses the 1–5 risk-appetite scale: 1 → 1.28,
/// 2 → 1.65, 3 → 2.33, 4 → 2.58. Any other key (including 5) falls back
/// to 1.96 (~95% two-tailed). Changing this coupling changes every VaR
/// output, so it is preserved as-is.
pub fn z_score(confidence_index: u8) -> f64 {
    match confidence_index {
        1 => 1.28,
        2 => 1.65,
        3 => 2.33,
        4 => 2.58,
        _ => 1.96,
    }
}

/// Portfolio Value-at-Risk via a variance-covariance approximation.
///
/// ```text
/// VaR = portfolio_value * z * weighted_volatility * sqrt(days / 252)
/// ```
///
/// where `weighted_volatility` is the value-weighted average of each
/// position's annualized volatility. Degenerate portfolios (total value
/// ≤ 0) return 0 with no division.
pub fn estimate_var(
    exposures: &[ProcessedExposure],
    confidence_index: u8,
    time_horizon_days: u32,
) -> f64 {
    let portfolio_value: f64 = exposures.iter().map(|e| e.base_equivalent).sum();
    if portfolio_value <= 0.0 {
        return 0.0;
    }

    let vols = VolatilityTable::builtin();
    let portfolio_volatility: f64 = exposures
        .iter()
        .map(|e| (e.base_equivalent / portfolio_value) * vols.annualized(e.volatility_factor))
        .sum();

    let time_factor = (f64::from(time_horizon_days) / TRADING_DAYS_PER_YEAR).sqrt();

    portfolio_value * z_score(confidence_index) * portfolio_volatility * time_factor
}
