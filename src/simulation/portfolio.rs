use crate::core::currency::CurrencyCode;
use crate::core::exposure::Exposure;
use crate::risk::score::{ProcessedExposure, RiskLevel};
use crate::risk::var::estimate_var;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Name attached to results when the caller does not supply one.
pub const DEFAULT_SIMULATION_NAME: &str = "FX Risk Analysis";

/// Input to one simulation run.
///
/// The `Default` value matches what the persistence layer supplies when
/// no saved state exists: base currency USD, moderate risk appetite,
/// a 30-day horizon and no exposures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Optional display name for the run.
    #[serde(default)]
    pub name: Option<String>,
    /// Currency all exposures are aggregated into.
    pub base_currency: CurrencyCode,
    /// 1–5 user preference; doubly reused as the VaR confidence index.
    pub risk_appetite: u8,
    /// Positive VaR horizon in days.
    pub time_horizon_days: u32,
    pub exposures: Vec<Exposure>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            name: None,
            base_currency: CurrencyCode::new("USD"),
            risk_appetite: 3,
            time_horizon_days: 30,
            exposures: Vec::new(),
        }
    }
}

/// Aggregated exposure for one `"FROM/TO"` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyExposure {
    pub currency_pair: String,
    /// Sum of base-equivalent amounts for the pair.
    pub amount: f64,
}

/// Count of exposures at one risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub count: usize,
}

/// Consolidated output of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Unique identifier for this run.
    pub id: Uuid,
    pub name: String,
    pub base_currency: CurrencyCode,
    pub risk_appetite: u8,
    pub time_horizon_days: u32,
    /// Total exposure in base currency.
    pub total_exposure: f64,
    /// Base-currency exposure carried by hedged positions.
    pub hedged_exposure: f64,
    /// Derived as `total - hedged`, never summed independently.
    pub unhedged_exposure: f64,
    pub value_at_risk: f64,
    /// Per-pair aggregates in first-seen order.
    pub currency_exposures: Vec<CurrencyExposure>,
    /// Risk-level counts in first-seen order; empty levels are omitted.
    pub risk_distribution: Vec<RiskBucket>,
    pub exposures: Vec<ProcessedExposure>,
    /// Exposures scoring 5 or above.
    pub high_risk_count: usize,
    /// Wall-clock instant of the computation (the engine's only impurity).
    pub computed_at: DateTime<Utc>,
}

/// Run one full aggregation pass over the portfolio.
///
/// Converts every exposure to the base currency, scores and classifies
/// it, then derives the portfolio totals, hedged/unhedged split, VaR,
/// per-pair grouping and risk-level distribution. Pure except for the
/// timestamp and run id; identical inputs yield identical numbers.
pub fn run_simulation(params: &SimulationParameters) -> SimulationResults {
    debug!(
        "simulating {} exposures against base {}",
        params.exposures.len(),
        params.base_currency
    );

    let processed: Vec<ProcessedExposure> = params
        .exposures
        .iter()
        .map(|e| ProcessedExposure::assess(e, &params.base_currency, params.risk_appetite))
        .collect();

    let total_exposure: f64 = processed.iter().map(|e| e.base_equivalent).sum();
    let hedged_exposure: f64 = processed
        .iter()
        .filter(|e| e.is_hedged)
        .map(|e| e.base_equivalent)
        .sum();
    let unhedged_exposure = total_exposure - hedged_exposure;

    let value_at_risk = estimate_var(&processed, params.risk_appetite, params.time_horizon_days);

    // First-seen-order grouping by pair label, O(n) via a label -> index map.
    let mut pair_index: HashMap<&str, usize> = HashMap::new();
    let mut currency_exposures: Vec<CurrencyExposure> = Vec::new();
    for exposure in &processed {
        match pair_index.get(exposure.currency_pair.as_str()) {
            Some(&i) => currency_exposures[i].amount += exposure.base_equivalent,
            None => {
                pair_index.insert(exposure.currency_pair.as_str(), currency_exposures.len());
                currency_exposures.push(CurrencyExposure {
                    currency_pair: exposure.currency_pair.clone(),
                    amount: exposure.base_equivalent,
                });
            }
        }
    }

    // Same first-seen ordering for the risk-level distribution.
    let mut level_index: HashMap<RiskLevel, usize> = HashMap::new();
    let mut risk_distribution: Vec<RiskBucket> = Vec::new();
    for exposure in &processed {
        match level_index.get(&exposure.risk_level) {
            Some(&i) => risk_distribution[i].count += 1,
            None => {
                level_index.insert(exposure.risk_level, risk_distribution.len());
                risk_distribution.push(RiskBucket {
                    level: exposure.risk_level,
                    count: 1,
                });
            }
        }
    }

    let high_risk_count = processed.iter().filter(|e| e.risk_score >= 5).count();

    SimulationResults {
        id: Uuid::new_v4(),
        name: params
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_SIMULATION_NAME.to_string()),
        base_currency: params.base_currency.clone(),
        risk_appetite: params.risk_appetite,
        time_horizon_days: params.time_horizon_days,
        total_exposure,
        hedged_exposure,
        unhedged_exposure,
        value_at_risk,
        currency_exposures,
        risk_distribution,
        exposures: processed,
        high_risk_count,
        computed_at: Utc::now(),
    }
}

impl std::fmt::Display for SimulationResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== {} ===", self.name)?;
        writeln!(f, "Base Currency:     {}", self.base_currency)?;
        writeln!(f, "Risk Appetite:     {}", self.risk_appetite)?;
        writeln!(f, "Horizon (days):    {}", self.time_horizon_days)?;
        writeln!(f, "Total Exposure:    {:.2}", self.total_exposure)?;
        writeln!(f, "Hedged:            {:.2}", self.hedged_exposure)?;
        writeln!(f, "Unhedged:          {:.2}", self.unhedged_exposure)?;
        writeln!(f, "Value at Risk:     {:.2}", self.value_at_risk)?;
        writeln!(f, "High-Risk Count:   {}", self.high_risk_count)?;

        if !self.currency_exposures.is_empty() {
            writeln!(f, "\n--- Exposure by Pair ---")?;
            for group in &self.currency_exposures {
                writeln!(f, "  {:<10} {:.2}", group.currency_pair, group.amount)?;
            }
        }

        if !self.risk_distribution.is_empty() {
            writeln!(f, "\n--- Risk Distribution ---")?;
            for bucket in &self.risk_distribution {
                writeln!(f, "  {:<10} {}", bucket.level.to_string(), bucket.count)?;
            }
        }
        Ok(())
    }
}
