//! Per-exposure risk scoring, classification and portfolio VaR.

pub mod score;
pub mod var;
