//! Serde helpers for tolerant numeric fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Deserializes a currency amount that may arrive as a number, a numeric
/// string, `null`, or garbage. Whatever does not parse becomes `None`;
/// downstream sums treat `None` as zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Amounts {
        #[serde(default, deserialize_with = "lenient_decimal")]
        amount: Option<Decimal>,
    }

    fn parse(value: serde_json::Value) -> Option<Decimal> {
        serde_json::from_value::<Amounts>(value).unwrap().amount
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({"amount": 197.5})), Decimal::from_str("197.5").ok());
        assert_eq!(parse(json!({"amount": "42"})), Decimal::from_str("42").ok());
        assert_eq!(parse(json!({"amount": " 10.00 "})), Decimal::from_str("10.00").ok());
    }

    #[test]
    fn malformed_values_become_none() {
        assert_eq!(parse(json!({"amount": "abc"})), None);
        assert_eq!(parse(json!({"amount": null})), None);
        assert_eq!(parse(json!({"amount": {"nested": true}})), None);
        assert_eq!(parse(json!({})), None);
    }
}
