use std::sync::OnceLock;

/// Annualized volatility assumed when a factor is outside 1–5.
pub const DEFAULT_ANNUALIZED_VOLATILITY: f64 = 0.15;

/// Maps the 1–5 ordinal volatility factor to an annualized volatility
/// fraction.
///
/// Factor 1 is the calmest pair (5% annualized), factor 5 the wildest
/// (25%). Factors outside the ordinal range resolve to the moderate
/// default of 0.15 rather than failing — the same lenient policy the
/// rate table applies to unknown currencies.
#[derive(Debug, Clone)]
pub struct VolatilityTable {
    /// Annualized volatility per factor, index 0 = factor 1.
    by_factor: [f64; 5],
}

impl VolatilityTable {
    /// The process-wide, read-only volatility table.
    pub fn builtin() -> &'static VolatilityTable {
        static TABLE: OnceLock<VolatilityTable> = OnceLock::new();
        TABLE.get_or_init(|| VolatilityTable {
            by_factor: [0.05, 0.10, 0.15, 0.20, 0.25],
        })
    }

    /// Annualized volatility fraction for a 1–5 factor.
    pub fn annualized(&self, factor: u8) -> f64 {
        match factor {
            1..=5 => self.by_factor[usize::from(factor) - 1],
            _ => DEFAULT_ANNUALIZED_VOLATILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_lookup() {
        let table = VolatilityTable::builtin();
        assert_eq!(table.annualized(1), 0.05);
        assert_eq!(table.annualized(2), 0.10);
        assert_eq!(table.annualized(3), 0.15);
        assert_eq!(table.annualized(4), 0.20);
        assert_eq!(table.annualized(5), 0.25);
    }

    #[test]
    fn test_unknown_factor_defaults_to_moderate() {
        let table = VolatilityTable::builtin();
        assert_eq!(table.annualized(0), DEFAULT_ANNUALIZED_VOLATILITY);
        assert_eq!(table.annualized(6), DEFAULT_ANNUALIZED_VOLATILITY);
        assert_eq!(table.annualized(255), DEFAULT_ANNUALIZED_VOLATILITY);
    }
}
