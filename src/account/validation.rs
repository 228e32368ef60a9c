//! Input validation for account creation
//!
//! This module provides validated types for account fields.
//! All fields are private to force validation through the public API.

use std::fmt;

use rust_decimal::Decimal;

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for account creation input
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected {min}-{max}, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid format for {field}: '{value}' (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Opening balance cannot be negative: {0}")]
    NegativeBalance(Decimal),
}

// ============================================================================
// AccountName - Validated Display Name (Private Fields)
// ============================================================================

/// Maximum account name length in characters
pub const MAX_NAME_LEN: usize = 255;

/// Validated account display name (trimmed, non-empty, printable)
///
/// Fields are private to force validation through `new()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Create a new validated AccountName
    ///
    /// # Validation Rules
    /// - Surrounding whitespace is trimmed
    /// - Length: 1-255 characters
    /// - No control characters
    ///
    /// # Examples
    /// ```
    /// use mini_ledger::account::validation::AccountName;
    ///
    /// let name = AccountName::new("  Alice ").unwrap();
    /// assert_eq!(name.as_str(), "Alice");
    ///
    /// assert!(AccountName::new("   ").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let len = name.chars().count();

        if len == 0 || len > MAX_NAME_LEN {
            return Err(ValidationError::InvalidLength {
                field: "name",
                min: 1,
                max: MAX_NAME_LEN,
                actual: len,
            });
        }

        if name.chars().any(char::is_control) {
            return Err(ValidationError::InvalidFormat {
                field: "name",
                value: name.escape_debug().to_string(),
                expected: "printable characters only",
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Get the validated name as &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check an opening balance
pub fn validate_opening_balance(balance: Decimal) -> Result<Decimal, ValidationError> {
    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(ValidationError::NegativeBalance(balance));
    }
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_name_trims() {
        let name = AccountName::new("  Bob  ").unwrap();
        assert_eq!(name.as_str(), "Bob");
        assert_eq!(name.to_string(), "Bob");
        assert_eq!(name.into_string(), "Bob");
    }

    #[test]
    fn test_account_name_rejects_empty() {
        assert_eq!(
            AccountName::new(""),
            Err(ValidationError::InvalidLength {
                field: "name",
                min: 1,
                max: MAX_NAME_LEN,
                actual: 0,
            })
        );
        assert!(AccountName::new(" \t ").is_err());
    }

    #[test]
    fn test_account_name_length_limit_counts_chars() {
        let max = "é".repeat(MAX_NAME_LEN);
        assert!(AccountName::new(&max).is_ok());

        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            AccountName::new(&too_long),
            Err(ValidationError::InvalidLength { actual, .. }) if actual == MAX_NAME_LEN + 1
        ));
    }

    #[test]
    fn test_account_name_rejects_control_chars() {
        let err = AccountName::new("bad\u{0}name").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "name", .. }));
    }

    #[test]
    fn test_opening_balance() {
        assert_eq!(
            validate_opening_balance(Decimal::from(10)),
            Ok(Decimal::from(10))
        );
        assert_eq!(validate_opening_balance(Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(
            validate_opening_balance(Decimal::from(-1)),
            Err(ValidationError::NegativeBalance(Decimal::from(-1)))
        );
    }
}
