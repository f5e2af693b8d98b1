//! Money type for rupiah amounts.
//!
//! Amounts are whole rupiah stored as integers; IDR has no commonly used
//! subunit, so there is no decimal component to track. All arithmetic used
//! by cart totals is checked and surfaces overflow instead of wrapping.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A rupiah amount.
///
/// Displays in the Indonesian convention, e.g. `Rp 130.000`. Serializes as
/// a bare number; deserialization also accepts the float and `"150000.00"`
/// string spellings the backend's decimal columns produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from whole rupiah.
    pub fn new(rupiah: i64) -> Self {
        Self(rupiah)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole rupiah.
    pub fn rupiah(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add another amount, or `None` on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, or `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Sum an iterator of amounts, or `None` on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(*m))
    }

    /// Format as a display string, e.g. `Rp 130.000`.
    pub fn display(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Group digits with dots per the id-ID convention.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000, value >= 1000));
        value /= 1000;
    }
    groups
        .iter()
        .rev()
        .map(|(group, padded)| {
            if *padded {
                format!("{:03}", group)
            } else {
                group.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl serde::de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a rupiah amount as a number or numeric string")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map(Money)
                    .map_err(|_| E::custom("amount out of range"))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Money, E> {
                Ok(Money(v.round() as i64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Money, E> {
                v.parse::<f64>()
                    .map(|f| Money(f.round() as i64))
                    .map_err(|_| E::custom(format!("invalid amount: {}", v)))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}
