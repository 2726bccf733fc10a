use crate::error::PaymentError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of payment reference requested from the provider.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum PaymentType {
    #[default]
    Normal,
    Boleto,
    Moto,
}

impl PaymentType {
    /// Every type the provider accepts.
    pub(crate) const ALLOWED: [PaymentType; 3] =
        [PaymentType::Normal, PaymentType::Boleto, PaymentType::Moto];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Normal => "normal",
            PaymentType::Boleto => "boleto",
            PaymentType::Moto => "moto",
        }
    }

    fn allowed_list() -> String {
        Self::ALLOWED
            .iter()
            .map(PaymentType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALLOWED
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                PaymentError::invalid(format!("Type is not one of {}", Self::allowed_list()))
            })
    }
}

impl TryFrom<&str> for PaymentType {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for PaymentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
