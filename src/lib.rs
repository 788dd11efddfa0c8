//! # fx-risk-engine
//!
//! Simplified foreign-exchange risk engine for a portfolio of currency
//! exposures.
//!
//! Given a set of exposures and simulation parameters, the engine
//! computes per-exposure risk scores, a portfolio Value-at-Risk figure,
//! the hedged/unhedged decomposition, and scenario-based stress impacts.
//! It is pure and stateless: every call is an independent transformation
//! over in-memory values, and the only process-wide state is a pair of
//! read-only lookup tables (USD rates, annualized volatilities).
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currencies, rate/volatility tables, exposures
//! - **risk** — Per-exposure scoring and classification, portfolio VaR
//! - **simulation** — Portfolio aggregation, stress scenarios, random generation

pub mod core;
pub mod risk;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::currency::{CurrencyCode, CurrencyPair, RateTable};
    pub use crate::core::exposure::{Amount, Exposure, RawExposure};
    pub use crate::core::volatility::VolatilityTable;
    pub use crate::risk::score::{risk_score, ProcessedExposure, RiskLevel};
    pub use crate::risk::var::estimate_var;
    pub use crate::simulation::portfolio::{
        run_simulation, SimulationParameters, SimulationResults,
    };
    pub use crate::simulation::stress::{
        apply_scenarios, builtin_scenarios, StressResult, StressScenario,
    };
}
