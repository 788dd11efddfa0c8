use crate::core::currency::CurrencyCode;
use crate::risk::score::ProcessedExposure;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity label attached to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLabel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImpactLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpactLabel::Low => "Low",
            ImpactLabel::Medium => "Medium",
            ImpactLabel::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// A named percentage shock applied uniformly to every non-base-currency
/// exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    pub description: String,
    pub impact: ImpactLabel,
    /// Signed fraction, e.g. -0.15 for a 15% adverse move.
    pub change: f64,
}

impl StressScenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        impact: ImpactLabel,
        change: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            impact,
            change,
        }
    }
}

/// The fixed catalog of three preset scenarios. Callers are free to pass
/// their own lists to [`apply_scenarios`] instead.
pub fn builtin_scenarios() -> Vec<StressScenario> {
    vec![
        StressScenario::new(
            "2008 Financial Crisis",
            "Severe market dislocation with flight to safety",
            ImpactLabel::High,
            -0.15,
        ),
        StressScenario::new(
            "Strong USD",
            "Broad dollar strength against major currencies",
            ImpactLabel::Medium,
            -0.10,
        ),
        StressScenario::new(
            "Market Correction",
            "Moderate repricing across FX markets",
            ImpactLabel::Low,
            -0.05,
        ),
    ]
}

/// One exposure under a scenario: the shock applied to its base value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureImpact {
    pub exposure: ProcessedExposure,
    /// Change in base-currency value; exactly 0 for positions quoted in
    /// the base currency.
    pub impact: f64,
    pub new_value: f64,
}

/// Outcome of one scenario across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    pub scenario: StressScenario,
    /// Sum of per-exposure impacts.
    pub total_impact: f64,
    pub exposure_impacts: Vec<ExposureImpact>,
}

/// Apply each scenario to the processed portfolio.
///
/// Positions whose pair is quoted in the base currency are immune: their
/// impact is 0 and their value unchanged, regardless of the shock size.
/// Everything else moves by `base_equivalent * change`.
pub fn apply_scenarios(
    exposures: &[ProcessedExposure],
    base_currency: &CurrencyCode,
    scenarios: &[StressScenario],
) -> Vec<StressResult> {
    debug!(
        "stress testing {} exposures under {} scenarios",
        exposures.len(),
        scenarios.len()
    );

    scenarios
        .iter()
        .map(|scenario| {
            let exposure_impacts: Vec<ExposureImpact> = exposures
                .iter()
                .map(|exposure| {
                    let impact = if exposure.quote_currency() == base_currency.as_str() {
                        0.0
                    } else {
                        exposure.base_equivalent * scenario.change
                    };
                    ExposureImpact {
                        exposure: exposure.clone(),
                        impact,
                        new_value: exposure.base_equivalent + impact,
                    }
                })
                .collect();
            let total_impact = exposure_impacts.iter().map(|e| e.impact).sum();
            StressResult {
                scenario: scenario.clone(),
                total_impact,
                exposure_impacts,
            }
        })
        .collect()
}

impl fmt::Display for StressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== {} ({}, {:+.1}%) ===",
            self.scenario.name,
            self.scenario.impact,
            self.scenario.change * 100.0
        )?;
        writeln!(f, "{}", self.scenario.description)?;
        writeln!(f, "Total Impact: {:.2}", self.total_impact)?;
        for entry in &self.exposure_impacts {
            writeln!(
                f,
                "  {:<10} {:>14.2} -> {:>14.2} ({:+.2})",
                entry.exposure.currency_pair,
                entry.exposure.base_equivalent,
                entry.new_value,
                entry.impact
            )?;
        }
        Ok(())
    }
}
