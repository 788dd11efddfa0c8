//! Portfolio aggregation, stress testing and test-data generation.

pub mod generator;
pub mod portfolio;
pub mod stress;
