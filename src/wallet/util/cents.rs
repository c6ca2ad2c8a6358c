//! Money is kept as integer cents so sums and comparisons are exact.
//! For EUR, 1 unit = 100 cents, so €50.00 = 5000 cents.

pub type Cents = i64;

/// Rounds a decimal amount to the nearest cent.
/// Example: 12.346 -> 1235, 0.1 -> 10
pub fn from_decimal(value: f64) -> Cents {
    (value * 100.0).round() as Cents
}

pub fn to_decimal(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a human-readable amount.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Serde adapter exposing a cents field as a JSON number with two decimals.
pub mod as_decimal {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Cents;

    pub fn serialize<S>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(super::to_decimal(*cents))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Cents, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(super::from_decimal)
    }
}
