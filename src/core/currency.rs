use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// ISO 4217-style currency code.
///
/// The engine recognizes a fixed allow-list of 20 currencies (see
/// [`SUPPORTED_CURRENCIES`]), but codes outside the list are accepted
/// everywhere and simply fall back to a USD rate of 1.0.
///
/// # Examples
///
/// ```
/// use fx_risk_engine::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let eur = CurrencyCode::new("EUR");
/// assert_ne!(usd, eur);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

/// The 20 currency codes accepted by the portfolio UI and boundary layers.
///
/// Only the first 8 carry a defined exchange rate in the built-in table;
/// the rest convert at 1.0.
pub const SUPPORTED_CURRENCIES: [&str; 20] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "HKD", "SGD", "SEK", "NZD", "MXN",
    "NOK", "KRW", "INR", "BRL", "ZAR", "RUB", "TRY",
];

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code is on the allow-list of 20 supported currencies.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_CURRENCIES.contains(&self.0.as_str())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Errors arising from rate table construction.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("USD rate must be positive, got {rate} for {currency}")]
    InvalidRate { currency: CurrencyCode, rate: f64 },
}

/// A directed currency pair, displayed as `"FROM/TO"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The `"FROM/TO"` label used throughout results and grouping.
    pub fn label(&self) -> String {
        format!("{}/{}", self.from, self.to)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// USD rate table for converting between currencies.
///
/// Stores one rate per currency: 1 unit of the currency = `rate` USD.
/// Cross conversions go through USD. Unknown codes resolve to 1.0 —
/// a deliberate lenient-degradation policy so the engine never fails on
/// an unrecognized currency.
///
/// # Examples
///
/// ```
/// use fx_risk_engine::core::currency::{CurrencyCode, RateTable};
///
/// let rates = RateTable::builtin();
/// let converted = rates.convert(
///     100_000.0,
///     &CurrencyCode::new("EUR"),
///     &CurrencyCode::new("USD"),
/// );
/// assert_eq!(converted, 108_000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    /// currency -> USD value of one unit.
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide, read-only rate table. Defined rates exist for
    /// USD, EUR, GBP, JPY, AUD, CAD, CHF and CNY only.
    pub fn builtin() -> &'static RateTable {
        static TABLE: OnceLock<RateTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let mut table = RateTable::new();
            for (code, rate) in [
                ("USD", 1.0),
                ("EUR", 1.08),
                ("GBP", 1.27),
                ("JPY", 0.0075),
                ("AUD", 0.66),
                ("CAD", 0.74),
                ("CHF", 1.12),
                ("CNY", 0.14),
            ] {
                table.rates.insert(CurrencyCode::new(code), rate);
            }
            table
        })
    }

    /// Set the USD rate for a currency: 1 unit = `rate` USD.
    pub fn set_rate(&mut self, currency: CurrencyCode, rate: f64) -> Result<(), RateError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::InvalidRate { currency, rate });
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    /// USD value of one unit of `currency`, falling back to 1.0
    /// for any code without a defined rate.
    pub fn usd_rate(&self, currency: &CurrencyCode) -> f64 {
        self.rates.get(currency).copied().unwrap_or(1.0)
    }

    /// Convert an amount from one currency to another via USD.
    ///
    /// Identity conversions return the amount untouched — no rate lookup,
    /// no rounding. No rounding is applied in the cross case either; full
    /// float precision flows into downstream aggregation.
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        if from == to {
            return amount;
        }
        amount * self.usd_rate(from) / self.usd_rate(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_currency_code_equality() {
        let a = CurrencyCode::new("USD");
        let b = CurrencyCode::new("USD");
        assert_eq!(a, b);
    }

    #[test]
    fn test_allow_list() {
        assert!(CurrencyCode::new("TRY").is_supported());
        assert!(!CurrencyCode::new("XYZ").is_supported());
        assert_eq!(SUPPORTED_CURRENCIES.len(), 20);
    }

    #[test]
    fn test_pair_label() {
        let pair = CurrencyPair::new("EUR", "USD");
        assert_eq!(pair.label(), "EUR/USD");
        assert_eq!(format!("{}", pair), "EUR/USD");
    }

    #[test]
    fn test_convert_identity_skips_lookup() {
        let table = RateTable::new();
        // Even an unknown currency converts to itself unchanged.
        let xyz = CurrencyCode::new("XYZ");
        assert_eq!(table.convert(123.456, &xyz, &xyz), 123.456);
    }

    #[test]
    fn test_convert_via_usd() {
        let table = RateTable::builtin();
        let eur = CurrencyCode::new("EUR");
        let usd = CurrencyCode::new("USD");
        assert_eq!(table.convert(100_000.0, &eur, &usd), 108_000.0);

        let jpy = CurrencyCode::new("JPY");
        assert_eq!(table.convert(5_000_000.0, &jpy, &usd), 37_500.0);
    }

    #[test]
    fn test_convert_cross_pair() {
        let table = RateTable::builtin();
        let eur = CurrencyCode::new("EUR");
        let gbp = CurrencyCode::new("GBP");
        assert_relative_eq!(
            table.convert(1_000.0, &eur, &gbp),
            1_000.0 * 1.08 / 1.27,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_unknown_currency_falls_back_to_parity() {
        let table = RateTable::builtin();
        // SEK is allow-listed but has no defined rate; it converts at 1.0.
        let sek = CurrencyCode::new("SEK");
        let usd = CurrencyCode::new("USD");
        assert_eq!(table.convert(500.0, &sek, &usd), 500.0);
    }

    #[test]
    fn test_set_rate_rejects_non_positive() {
        let mut table = RateTable::new();
        assert!(table.set_rate(CurrencyCode::new("EUR"), -1.08).is_err());
        assert!(table.set_rate(CurrencyCode::new("EUR"), 0.0).is_err());
        assert!(table.set_rate(CurrencyCode::new("EUR"), f64::NAN).is_err());
        assert!(table.set_rate(CurrencyCode::new("EUR"), 1.08).is_ok());
    }
}
