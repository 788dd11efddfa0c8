use crate::core::currency::CurrencyPair;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising when raw user input is resolved into an [`Exposure`].
#[derive(Debug, Error)]
pub enum ExposureError {
    #[error("exposure is missing its currency pair")]
    MissingCurrencyPair,
}

/// An exposure amount as supplied by the caller: either a JSON number or
/// a decimal string such as `"100000.50"`.
///
/// Resolution is lenient by contract: anything that fails to parse, or
/// parses to a negative or non-finite value, is treated as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// The numeric value of this amount, applying the lenient fallback.
    pub fn value(&self) -> f64 {
        let raw = match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if raw.is_finite() && raw >= 0.0 {
            raw
        } else {
            0.0
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text("0".to_string())
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Text(s.to_string())
    }
}

/// A single currency position the portfolio is exposed to.
///
/// Exposures are immutable once handed to the engine; every simulation
/// run recomputes its derived values from scratch.
///
/// # Examples
///
/// ```
/// use fx_risk_engine::core::currency::CurrencyPair;
/// use fx_risk_engine::core::exposure::Exposure;
///
/// let exposure = Exposure::new(CurrencyPair::new("EUR", "USD"), 100_000.0)
///     .with_volatility_factor(3)
///     .with_notes("Q3 receivables");
///
/// assert_eq!(exposure.amount_value(), 100_000.0);
/// assert!(!exposure.is_hedged());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exposure {
    /// The currency pair this position is exposed to.
    currency_pair: CurrencyPair,
    /// Position size in the `from` currency.
    #[serde(default)]
    amount: Amount,
    /// Whether an offsetting position reduces the effective risk.
    #[serde(default)]
    is_hedged: bool,
    /// 1–5 ordinal proxy for the pair's annualized volatility.
    #[serde(default = "default_volatility_factor")]
    volatility_factor: u8,
    /// Free-form memo, carried through untouched.
    #[serde(default)]
    notes: String,
}

fn default_volatility_factor() -> u8 {
    3
}

impl Exposure {
    /// Create an unhedged exposure with the default moderate volatility
    /// factor and no notes.
    pub fn new(currency_pair: CurrencyPair, amount: impl Into<Amount>) -> Self {
        Self {
            currency_pair,
            amount: amount.into(),
            is_hedged: false,
            volatility_factor: default_volatility_factor(),
            notes: String::new(),
        }
    }

    /// Mark the exposure as hedged or unhedged.
    pub fn hedged(mut self, is_hedged: bool) -> Self {
        self.is_hedged = is_hedged;
        self
    }

    /// Set the 1–5 volatility factor.
    pub fn with_volatility_factor(mut self, factor: u8) -> Self {
        self.volatility_factor = factor;
        self
    }

    /// Attach a memo.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    // --- Accessors ---

    pub fn currency_pair(&self) -> &CurrencyPair {
        &self.currency_pair
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Numeric amount after lenient resolution (see [`Amount::value`]).
    pub fn amount_value(&self) -> f64 {
        self.amount.value()
    }

    pub fn is_hedged(&self) -> bool {
        self.is_hedged
    }

    pub fn volatility_factor(&self) -> u8 {
        self.volatility_factor
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Boundary shape for an exposure before the defaults merge.
///
/// Persistence and UI layers hand the engine partially-filled records;
/// [`RawExposure::resolve`] applies the documented defaults exactly once
/// at the system boundary:
///
/// | field               | default    |
/// |---------------------|------------|
/// | `currency_pair`     | *required* |
/// | `amount`            | `"0"`      |
/// | `is_hedged`         | `false`    |
/// | `volatility_factor` | `3`        |
/// | `notes`             | `""`       |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawExposure {
    #[serde(default)]
    pub currency_pair: Option<CurrencyPair>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub is_hedged: Option<bool>,
    #[serde(default)]
    pub volatility_factor: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawExposure {
    /// Apply the defaults table. Only a missing currency pair is an error.
    pub fn resolve(self) -> Result<Exposure, ExposureError> {
        let currency_pair = self
            .currency_pair
            .ok_or(ExposureError::MissingCurrencyPair)?;
        Ok(Exposure {
            currency_pair,
            amount: self.amount.unwrap_or_default(),
            is_hedged: self.is_hedged.unwrap_or(false),
            volatility_factor: self.volatility_factor.unwrap_or_else(default_volatility_factor),
            notes: self.notes.unwrap_or_default(),
        })
    }
}
