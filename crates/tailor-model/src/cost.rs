//! Fixed-point currency amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An amount of money stored as a whole number of cents.
///
/// Negative amounts can be represented so that out-of-range input reaches
/// validation instead of being lost at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// Upper bound accepted for an itinerary's estimated cost (1,000,000.00).
    pub const MAX_ESTIMATE: Cost = Cost(100_000_000);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Convert a floating point amount.
    ///
    /// Like decimal text, the amount may carry at most two fractional
    /// digits; `19.999` is rejected rather than rounded.
    pub fn from_f64(amount: f64) -> Result<Self, ModelError> {
        let scaled = amount * 100.0;
        let cents = scaled.round();
        let sub_cent = (scaled - cents).abs() > 1e-6;
        if !cents.is_finite() || cents.abs() > i64::MAX as f64 || sub_cent {
            return Err(ModelError::InvalidCost(amount.to_string()));
        }
        Ok(Self(cents as i64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// True when `ZERO <= self <= max`.
    pub fn within(self, max: Cost) -> bool {
        self.0 >= 0 && self.0 <= max.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Cost {
    type Err = ModelError;

    /// Parse decimal text such as `"250"`, `"19.5"` or `"-3.25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidCost(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Serialize for Cost {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CostRepr {
    Number(f64),
    Text(String),
}

impl CostRepr {
    fn into_cost(self) -> Result<Cost, ModelError> {
        match self {
            CostRepr::Number(amount) => Cost::from_f64(amount),
            CostRepr::Text(text) => text.parse(),
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CostRepr::deserialize(deserializer)?
            .into_cost()
            .map_err(serde::de::Error::custom)
    }
}

/// Read an optional cost where a blank string means "not entered yet".
///
/// Form state starts with `""` in the cost box, so `null`, `""` and `"  "`
/// all map to `None`.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Cost>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<CostRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(CostRepr::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(repr) => repr.into_cost().map(Some).map_err(serde::de::Error::custom),
    }
}
