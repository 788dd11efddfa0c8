//! Foundational types: currencies, rate and volatility tables, exposures.

pub mod currency;
pub mod exposure;
pub mod volatility;
