//! Money input type for API boundary enforcement

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};

// ============================================================================
// StrictDecimal: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format Decimal - validates format during deserialization
///
/// Accepts a JSON string or a JSON number. String input is checked for:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative numbers
/// - Rejects empty strings
/// - Rejects scientific notation and a leading `+`
///
/// Zero passes; whether zero is acceptable is decided by the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Create from Decimal (for testing)
    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for StrictDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn parse_strict<E: de::Error>(s: &str) -> Result<StrictDecimal, E> {
    if s.is_empty() {
        return Err(E::custom("Amount cannot be empty"));
    }

    // Reject .5 format (must be 0.5)
    if s.starts_with('.') {
        return Err(E::custom("Invalid format: use 0.5 not .5"));
    }

    // Reject 5. format (must be 5.0 or 5)
    if s.ends_with('.') {
        return Err(E::custom("Invalid format: use 5.0 not 5."));
    }

    if s.contains('e') || s.contains('E') {
        return Err(E::custom("Invalid format: scientific notation not allowed"));
    }

    if s.starts_with('+') {
        return Err(E::custom("Invalid format: + prefix not allowed"));
    }

    let d = Decimal::from_str(s).map_err(|e| E::custom(format!("Invalid decimal: {}", e)))?;

    if d.is_sign_negative() && !d.is_zero() {
        return Err(E::custom("Amount cannot be negative"));
    }

    Ok(StrictDecimal(d))
}

struct StrictDecimalVisitor;

impl<'de> Visitor<'de> for StrictDecimalVisitor {
    type Value = StrictDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_strict(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StrictDecimal(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v < 0 {
            return Err(E::custom("Amount cannot be negative"));
        }
        Ok(StrictDecimal(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("Invalid decimal: not finite"));
        }
        if v < 0.0 {
            return Err(E::custom("Amount cannot be negative"));
        }
        // Shortest round-trip form, so 0.1 stays 0.1
        Decimal::from_str(&v.to_string())
            .map(StrictDecimal)
            .map_err(|e| E::custom(format!("Invalid decimal: {}", e)))
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(StrictDecimalVisitor)
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
