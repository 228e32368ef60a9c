//! Storage error types

use thiserror::Error;

use crate::core_types::AccountNo;

/// PostgreSQL SQLSTATE: lock_not_available (lock_timeout exceeded)
const SQLSTATE_LOCK_NOT_AVAILABLE: &str = "55P03";
/// PostgreSQL SQLSTATE: deadlock_detected
const SQLSTATE_DEADLOCK_DETECTED: &str = "40P01";
/// PostgreSQL SQLSTATE: serialization_failure
const SQLSTATE_SERIALIZATION_FAILURE: &str = "40001";

/// Errors raised by a ledger store or one of its units of work
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Timed out waiting for a row lock")]
    LockTimeout,

    #[error("Unit of work aborted by the store: {0}")]
    Conflict(String),

    #[error("Account {0} is not locked by this unit of work")]
    NotLocked(AccountNo),

    #[error("Account {0} disappeared while locked")]
    RowMissing(AccountNo),

    #[error("Balance of account {0} would overflow")]
    Overflow(AccountNo),
}

/// How a database error with the given SQLSTATE should surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SqlStateClass {
    LockTimeout,
    Conflict,
    Other,
}

fn classify_sqlstate(code: Option<&str>) -> SqlStateClass {
    match code {
        Some(SQLSTATE_LOCK_NOT_AVAILABLE) => SqlStateClass::LockTimeout,
        Some(SQLSTATE_DEADLOCK_DETECTED) | Some(SQLSTATE_SERIALIZATION_FAILURE) => {
            SqlStateClass::Conflict
        }
        _ => SqlStateClass::Other,
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        let code = e
            .as_database_error()
            .and_then(|db| db.code())
            .map(|c| c.into_owned());

        match classify_sqlstate(code.as_deref()) {
            SqlStateClass::LockTimeout => StoreError::LockTimeout,
            SqlStateClass::Conflict => StoreError::Conflict(e.to_string()),
            SqlStateClass::Other => StoreError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_sqlx_error_maps_to_database() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_sqlstate_classification() {
        assert_eq!(classify_sqlstate(Some("55P03")), SqlStateClass::LockTimeout);
        assert_eq!(classify_sqlstate(Some("40P01")), SqlStateClass::Conflict);
        assert_eq!(classify_sqlstate(Some("40001")), SqlStateClass::Conflict);
        // unique_violation, check_violation, no code at all
        assert_eq!(classify_sqlstate(Some("23505")), SqlStateClass::Other);
        assert_eq!(classify_sqlstate(Some("23514")), SqlStateClass::Other);
        assert_eq!(classify_sqlstate(None), SqlStateClass::Other);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::NotLocked(4).to_string(),
            "Account 4 is not locked by this unit of work"
        );
        assert_eq!(
            StoreError::LockTimeout.to_string(),
            "Timed out waiting for a row lock"
        );
    }
}
