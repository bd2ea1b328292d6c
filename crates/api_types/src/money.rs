use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount")]
    Invalid,
    #[error("too many decimals")]
    TooManyDecimals,
    #[error("amount too large")]
    Overflow,
}

/// Monetary value represented as **integer cents**.
///
/// The backend stores values as two-decimal numerics and serializes them either
/// as JSON numbers or as decimal strings, so deserialization accepts both.
/// Serialization always emits a two-decimal string (`"12.50"`), which keeps the
/// value exact on the wire.
///
/// # Examples
///
/// ```rust
/// use api_types::Amount;
///
/// let amount: Amount = "1234.5".parse().unwrap();
/// assert_eq!(amount.cents(), 123_450);
/// assert_eq!(amount.to_string(), "$1,234.50");
/// assert_eq!(amount.to_decimal_string(), "1234.50");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Plain decimal representation used on the wire and in form inputs.
    #[must_use]
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }

    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }
}

/// Formats as US dollars with thousands separators (`$1,234.56`, `-$3.00`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{cents:02}")
    }
}

// Arithmetic saturates at the i64 bounds.
impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    /// Rejects more than two fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped.trim())
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped.trim())
        } else {
            (false, trimmed)
        };
        if rest.is_empty() {
            return Err(AmountError::Empty);
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or(AmountError::Invalid)?;
        let frac_str = parts.next();
        if parts.next().is_some() {
            return Err(AmountError::Invalid);
        }

        // ".5" is accepted the same way number inputs accept it.
        let units: i64 = if units_str.is_empty() {
            if frac_str.is_none_or(str::is_empty) {
                return Err(AmountError::Invalid);
            }
            0
        } else {
            if !units_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(AmountError::Invalid);
            }
            units_str.parse().map_err(|_| AmountError::Overflow)?
        };

        let cents: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(AmountError::Invalid);
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| AmountError::Invalid)? * 10,
                    2 => frac.parse::<i64>().map_err(|_| AmountError::Invalid)?,
                    _ => return Err(AmountError::TooManyDecimals),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or(AmountError::Overflow)?;

        Ok(Amount(if negative { -total } else { total }))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl de::Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number or a decimal string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                v.checked_mul(100)
                    .map(Amount)
                    .ok_or_else(|| E::custom(AmountError::Overflow))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Amount)
                    .ok_or_else(|| E::custom(AmountError::Overflow))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                Amount::from_f64(v).ok_or_else(|| E::custom(AmountError::Invalid))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                // Backends sometimes render numerics with more scale ("12.500").
                match v.parse::<Amount>() {
                    Ok(amount) => Ok(amount),
                    Err(AmountError::TooManyDecimals) => v
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .and_then(Amount::from_f64)
                        .ok_or_else(|| E::custom(AmountError::Invalid)),
                    Err(err) => Err(E::custom(err)),
                }
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
