use crate::error::PaymentError;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use std::str::FromStr;

/// Represents a positive monetary amount for a payment request.
///
/// The provider only accepts strictly positive values, so an `Amount` can
/// never hold zero or a negative number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::invalid("Value must be greater than 0.0"))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = PaymentError;

    /// Floats outside what a `Decimal` holds (above about 7.9e28, or so small
    /// they round to zero at 28 decimal places) are rejected as out of range.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(PaymentError::invalid("Value must be a finite number"));
        }
        if value <= 0.0 {
            return Err(PaymentError::invalid("Value must be greater than 0.0"));
        }
        match Decimal::from_f64(value) {
            Some(decimal) if decimal > Decimal::ZERO => Ok(Self(decimal)),
            _ => Err(PaymentError::invalid("Value is outside the supported range")),
        }
    }
}

impl TryFrom<&str> for Amount {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|_| PaymentError::invalid(format!("Value '{s}' is not a number")))?;
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
