use crate::error::PaymentError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Format of the optional due date sent to the provider (`YYYY-MM-DD`).
pub const MAX_DATE_FORMAT: &str = "%Y-%m-%d";

/// The last day on which a payment may be made.
///
/// Only built from text that parses with [`MAX_DATE_FORMAT`] and renders back
/// to the very same text, so `to_string()` always returns the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxDate(NaiveDate);

impl MaxDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for MaxDate {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono also accepts unpadded fields such as "2023-6-5"
        match NaiveDate::parse_from_str(s, MAX_DATE_FORMAT) {
            Ok(date) if date.format(MAX_DATE_FORMAT).to_string() == s => Ok(Self(date)),
            _ => Err(PaymentError::invalid(
                "Maximum payment date must be in that format: YYYY-MM-DD",
            )),
        }
    }
}

impl TryFrom<&str> for MaxDate {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MaxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(MAX_DATE_FORMAT))
    }
}

impl Serialize for MaxDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MaxDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_round_trips() {
        let date: MaxDate = "2023-06-15".parse().unwrap();
        assert_eq!(date.to_string(), "2023-06-15");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
    }

    #[test]
    fn test_leap_day() {
        assert!("2024-02-29".parse::<MaxDate>().is_ok());
        assert!("2023-02-29".parse::<MaxDate>().is_err());
    }

    #[test]
    fn test_impossible_calendar_date() {
        let err = "2023-02-30".parse::<MaxDate>().unwrap_err();
        assert!(matches!(err, PaymentError::InvalidArgument(_)));
        assert!("2023-13-01".parse::<MaxDate>().is_err());
    }

    #[test]
    fn test_wrong_format() {
        assert!("15-06-2023".parse::<MaxDate>().is_err());
        assert!("2023/06/15".parse::<MaxDate>().is_err());
        assert!("".parse::<MaxDate>().is_err());
        assert!("2023-06-15T00:00:00".parse::<MaxDate>().is_err());
    }

    #[test]
    fn test_non_canonical_padding_rejected() {
        assert!("2023-6-15".parse::<MaxDate>().is_err());
        assert!("2023-06-5".parse::<MaxDate>().is_err());
    }

    #[test]
    fn test_error_message_names_format() {
        let err = "tomorrow".parse::<MaxDate>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Maximum payment date must be in that format: YYYY-MM-DD"
        );
    }
}
