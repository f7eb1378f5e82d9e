//! Money and currency value objects.
//!
//! Amounts are stored in minor units (cents for USD) so pricing math stays
//! exact; decimal conversion happens only at the serialization and display
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// ISO-style currency code.
///
/// Display convention: `USD` renders as the literal `$` glyph, every other
/// code renders as the raw code string. There is deliberately no symbol
/// lookup table and no locale formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::invalid_currency("empty code"));
        }
        Ok(Self(code))
    }

    /// The `USD` currency, used by every fixture in the original lineup.
    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol prefix used when formatting amounts.
    pub fn symbol(&self) -> &str {
        if self.0 == "USD" { "$" } else { &self.0 }
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Currency {}

/// A monetary amount in minor units of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount_minor: u64,
    currency: Currency,
}

impl Money {
    pub fn new(amount_minor: u64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Build from a decimal major-unit amount (`39.99` → 3999 minor units).
    ///
    /// Rejects negative and non-finite amounts.
    pub fn from_major(amount: f64, currency: Currency) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(format!(
                "money amount must be a non-negative decimal, got {amount}"
            )));
        }
        Ok(Self {
            amount_minor: (amount * 100.0).round() as u64,
            currency,
        })
    }

    pub fn amount_minor(&self) -> u64 {
        self.amount_minor
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Format the bare decimal amount with exactly two decimal places.
    pub fn amount_text(&self) -> String {
        format_minor(self.amount_minor)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), self.amount_text())
    }
}

impl ValueObject for Money {}

/// Format minor units as a two-decimal string (`3999` → `39.99`).
pub fn format_minor(amount_minor: u64) -> String {
    format!("{}.{:02}", amount_minor / 100, amount_minor % 100)
}

/// Wire shape for [`Money`]: decimal amount + code, matching the host's
/// `{ "amount": 39.99, "currency": "USD" }` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyRepr {
    amount: f64,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::from_major(repr.amount, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount_minor as f64 / 100.0,
            currency: money.currency,
        }
    }
}

/// Serde adapter for optional minor-unit amounts carried on the wire as
/// decimal major units (`5999` ↔ `59.99`).
pub mod decimal {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(amount: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        amount
            .map(|minor| minor as f64 / 100.0)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = Option::<f64>::deserialize(deserializer)?;
        match amount {
            None => Ok(None),
            Some(value) if value.is_finite() && value >= 0.0 => {
                Ok(Some((value * 100.0).round() as u64))
            }
            Some(value) => Err(serde::de::Error::custom(format!(
                "amount must be a non-negative decimal, got {value}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formats_with_dollar_glyph() {
        let money = Money::new(3999, Currency::usd());
        assert_eq!(money.to_string(), "$39.99");
    }

    #[test]
    fn non_usd_formats_with_raw_code() {
        let money = Money::new(4999, Currency::new("EUR").unwrap());
        assert_eq!(money.to_string(), "EUR49.99");
    }

    #[test]
    fn always_two_decimal_places() {
        assert_eq!(format_minor(0), "0.00");
        assert_eq!(format_minor(5), "0.05");
        assert_eq!(format_minor(100), "1.00");
        assert_eq!(format_minor(12345), "123.45");
    }

    #[test]
    fn from_major_rounds_to_nearest_cent() {
        let money = Money::from_major(39.99, Currency::usd()).unwrap();
        assert_eq!(money.amount_minor(), 3999);

        let money = Money::from_major(59.999, Currency::usd()).unwrap();
        assert_eq!(money.amount_minor(), 6000);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        assert!(Money::from_major(-0.01, Currency::usd()).is_err());
        assert!(Money::from_major(f64::NAN, Currency::usd()).is_err());
        assert!(Money::from_major(f64::INFINITY, Currency::usd()).is_err());
    }

    #[test]
    fn wire_shape_is_decimal_amount_plus_code() {
        let money = Money::new(3999, Currency::usd());
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 39.99, "currency": "USD"}));

        let back: Money = serde_json::from_value(json).unwrap();
        assert_eq!(back, money);
    }

    #[test]
    fn empty_currency_code_is_rejected() {
        assert!(Currency::new("").is_err());
        assert!(Currency::new("  ").is_err());
    }
}
