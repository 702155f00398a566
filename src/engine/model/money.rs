use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Monetary amount held as integer minor units (cents).
///
/// Sums stay exact `i64` additions; conversion to the decimal string form
/// happens only at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid money amount: {0}")]
pub struct MoneyParseError(pub String);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Reads an amount from a stored JSON value: a decimal string
    /// (`"400.50"`) or a non-negative integer of whole units. Floats are
    /// rejected rather than rounded.
    pub fn from_json(value: &Value) -> Result<Money, MoneyParseError> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => match n.as_u64() {
                Some(units) if units <= (i64::MAX / 100) as u64 => {
                    Ok(Money(units as i64 * 100))
                }
                _ => Err(MoneyParseError(n.to_string())),
            },
            other => Err(MoneyParseError(other.to_string())),
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoneyParseError(s.to_string());
        let (units_part, frac_part) = match s.split_once('.') {
            Some((u, f)) => (u, Some(f)),
            None => (s, None),
        };

        if units_part.is_empty() || !units_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let units: i64 = units_part.parse().map_err(|_| err())?;

        let frac_cents: i64 = match frac_part {
            None => 0,
            Some(f) if f.len() == 1 && f.bytes().all(|b| b.is_ascii_digit()) => {
                f.parse::<i64>().map_err(|_| err())? * 10
            }
            Some(f) if f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit()) => {
                f.parse().map_err(|_| err())?
            }
            Some(_) => return Err(err()),
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(err)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Money::from_json(&value).map_err(de::Error::custom)
    }
}
