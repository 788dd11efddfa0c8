use crate::core::currency::{CurrencyCode, RateTable};
use crate::core::exposure::Exposure;
use crate::core::volatility::VolatilityTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk classification of a scored exposure.
///
/// Scores partition into four contiguous buckets with inclusive upper
/// boundaries at 3, 5 and 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify a 1–10 risk score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => RiskLevel::Low,
            4..=5 => RiskLevel::Medium,
            6..=8 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

/// Compute the bounded 1–10 risk score for a single exposure.
///
/// The steps apply in order, each mutating the running score:
///
/// 1. start at the 1–5 volatility factor;
/// 2. add 2 if the position is unhedged;
/// 3. for cross-currency positions, add `min(3, round(vol * 10))` where
///    `vol` is the annualized volatility for the factor;
/// 4. clamp to `[1, 10]`;
/// 5. add the appetite adjustment `(5 - risk_appetite) * 0.5` — a low
///    appetite raises the perceived score;
/// 6. re-clamp and round to the nearest integer.
///
/// `risk_appetite` outside 1–5 is not validated; the final clamp still
/// bounds the result.
pub fn risk_score(
    from: &CurrencyCode,
    base_currency: &CurrencyCode,
    is_hedged: bool,
    volatility_factor: u8,
    risk_appetite: u8,
) -> u8 {
    let mut score = i32::from(volatility_factor);
    if !is_hedged {
        score += 2;
    }
    if from != base_currency {
        let vol = VolatilityTable::builtin().annualized(volatility_factor);
        score += ((vol * 10.0).round() as i32).min(3);
    }
    let clamped = score.clamp(1, 10);

    let appetite_factor = (5.0 - f64::from(risk_appetite)) * 0.5;
    let adjusted = (f64::from(clamped) + appetite_factor).clamp(1.0, 10.0);
    adjusted.round() as u8
}

/// An exposure after one pass through the converter, scorer and
/// classifier. Recomputed on every run, never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedExposure {
    /// The `"FROM/TO"` pair label.
    pub currency_pair: String,
    /// Position size in the `from` currency, after lenient resolution.
    pub amount: f64,
    /// Position size converted to the base currency.
    pub base_equivalent: f64,
    pub is_hedged: bool,
    pub volatility_factor: u8,
    /// Bounded 1–10 risk score.
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

impl ProcessedExposure {
    /// Assess a single exposure against a base currency: convert, score,
    /// classify.
    pub fn assess(exposure: &Exposure, base_currency: &CurrencyCode, risk_appetite: u8) -> Self {
        let pair = exposure.currency_pair();
        let amount = exposure.amount_value();
        let base_equivalent = RateTable::builtin().convert(amount, &pair.from, base_currency);
        let score = risk_score(
            &pair.from,
            base_currency,
            exposure.is_hedged(),
            exposure.volatility_factor(),
            risk_appetite,
        );
        Self {
            currency_pair: pair.label(),
            amount,
            base_equivalent,
            is_hedged: exposure.is_hedged(),
            volatility_factor: exposure.volatility_factor(),
            risk_score: score,
            risk_level: RiskLevel::from_score(score),
        }
    }

    /// The quote side of the pair label (everything after the last `/`).
    pub fn quote_currency(&self) -> &str {
        self.currency_pair
            .rsplit('/')
            .next()
            .unwrap_or(&self.currency_pair)
    }
}
