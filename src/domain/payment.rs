use super::amount::Amount;
use super::customer_info::CustomerInfo;
use super::max_date::MaxDate;
use super::payment_type::PaymentType;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment request to be submitted to the payment provider.
///
/// Fields are set through validating setters. A setter that fails leaves the
/// payment exactly as it was, and a setter that succeeds replaces whatever
/// was stored before.
///
/// Serializes to the provider's request shape; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PaymentRequest")]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "type")]
    payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_date: Option<MaxDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_info: Option<CustomerInfo>,
}

impl Payment {
    /// Creates an empty `Normal` payment with no value, key, due date or customer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the payment carries enough information for an API call.
    ///
    /// Only the value and the type are required, and the type always has one.
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the amount to charge.
    ///
    /// Accepts a `Decimal`, an `f64` or a numeric string. Anything that does
    /// not convert to a number greater than zero is rejected. Strings are
    /// parsed as given, surrounding whitespace included.
    pub fn set_value<V>(&mut self, value: V) -> Result<()>
    where
        V: TryInto<Amount, Error = PaymentError>,
    {
        self.value = Some(value.try_into()?);
        Ok(())
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    /// Sets the type from its wire literal (`normal`, `boleto` or `moto`).
    pub fn set_type(&mut self, payment_type: &str) -> Result<()> {
        self.payment_type = payment_type.parse()?;
        Ok(())
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    /// Sets the due date from a `YYYY-MM-DD` string.
    pub fn set_max_date(&mut self, max_date: &str) -> Result<()> {
        self.max_date = Some(max_date.parse()?);
        Ok(())
    }

    pub fn set_customer_info(&mut self, customer_info: CustomerInfo) {
        self.customer_info = Some(customer_info);
    }

    pub fn value(&self) -> Option<Amount> {
        self.value
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn max_date(&self) -> Option<MaxDate> {
        self.max_date
    }

    pub fn customer_info(&self) -> Option<&CustomerInfo> {
        self.customer_info.as_ref()
    }
}

/// Unvalidated payment fields as they arrive from outside (JSON body, CSV row).
///
/// Converting into a [`Payment`] runs every present field through its setter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub value: Option<Decimal>,
    pub key: Option<String>,
    pub r#type: Option<String>,
    #[serde(alias = "max_date")]
    pub max_date: Option<String>,
    #[serde(alias = "customer_info")]
    pub customer_info: Option<CustomerInfo>,
}

impl TryFrom<PaymentRequest> for Payment {
    type Error = PaymentError;

    fn try_from(request: PaymentRequest) -> Result<Self> {
        let mut payment = Payment::new();
        if let Some(value) = request.value {
            payment.set_value(value)?;
        }
        if let Some(key) = request.key {
            payment.set_key(key);
        }
        if let Some(payment_type) = request.r#type.as_deref() {
            payment.set_type(payment_type)?;
        }
        if let Some(max_date) = request.max_date.as_deref() {
            payment.set_max_date(max_date)?;
        }
        if let Some(customer_info) = request.customer_info {
            payment.set_customer_info(customer_info);
        }
        Ok(payment)
    }
}
