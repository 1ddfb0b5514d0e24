//! Amount type for representing budget and spending values
//!
//! Amounts are plain `f64` values in an unspecified currency unit. Fractional
//! values are permitted; an `Amount` is always finite and never negative.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated, non-negative, finite amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Validate a raw number as an amount
    ///
    /// # Examples
    /// ```
    /// use envelope::models::Amount;
    /// assert_eq!(Amount::new(12.5).unwrap().value(), 12.5);
    /// assert!(Amount::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        // -0.0 passes the check above; store it as 0.0
        Ok(Self(value + 0.0))
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error type for amount validation
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    NotFinite,
    Negative(f64),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotFinite => write!(f, "amount must be a finite number"),
            AmountError::Negative(v) => write!(f, "amount cannot be negative (got {})", v),
        }
    }
}

impl std::error::Error for AmountError {}
