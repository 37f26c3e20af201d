//! Amount handling: parsing user-entered text and lenient deserialization.
//!
//! Amounts are plain `f64` values. No currency or rounding rules are applied
//! beyond what floating-point arithmetic does on its own.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

use crate::errors::BillError;

/// Parses an amount from user-entered text, ignoring surrounding whitespace.
pub fn parse_amount(raw: &str) -> Result<f64, BillError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BillError::InvalidAmount("amount is empty".into()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| BillError::InvalidAmount(format!("`{}` is not a number", trimmed)))
}

/// Renders an amount with two decimals, the way bill lists show it.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Deserializes an amount given either as a JSON number or as numeric text.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        parse_amount(value).map_err(E::custom)
    }
}
