//! Amount value object - a non-negative quantity of some unit

use serde::{Deserialize, Serialize};

/// A finite, non-negative quantity.
///
/// Pantry stock, monthly needs and shopping amounts are all `Amount`s, so the
/// "never negative" rule is enforced once at construction time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

/// Rejected raw value for an [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("amount must be a non-negative number, got {0}")]
pub struct InvalidAmount(pub f64);

/// Why a text cell did not parse as an [`Amount`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseAmountError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Invalid(#[from] InvalidAmount),
}

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Result<Self, InvalidAmount> {
        if value.is_finite() && value >= 0.0 {
            // Normalises -0.0 so it prints as "0".
            Ok(Self(value + 0.0))
        } else {
            Err(InvalidAmount(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// `max(0, self - other)`.
    pub fn shortfall_from(self, other: Amount) -> Amount {
        let diff = self.0 - other.0;
        if diff > 0.0 {
            Amount(diff)
        } else {
            Amount::ZERO
        }
    }
}

impl TryFrom<f64> for Amount {
    type Error = InvalidAmount;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseAmountError::NotANumber(trimmed.to_string()))?;
        Ok(Amount::new(value)?)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
