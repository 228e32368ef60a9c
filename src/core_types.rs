//! Core types used throughout the system
//!
//! These are fundamental type aliases used by all modules.
//! They provide semantic meaning and enable future type evolution.

/// Account number - unique, positive, immutable after assignment.
///
/// # Constraints:
/// - **Positive**: `0` and negative values never identify an account
/// - **Monotonic**: Assigned as `max(account_no) + 1` inside the creating unit of work
///
/// # Ordering:
/// The natural `Ord` on account numbers is the canonical lock order
/// used by the transfer coordinator.
pub type AccountNo = i64;

/// Transaction ID - globally unique, assigned when a transfer starts.
pub type TransactionId = uuid::Uuid;

/// Returns true if `account_no` can identify an account.
#[inline]
pub fn is_valid_account_no(account_no: AccountNo) -> bool {
    account_no > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_no_validity() {
        assert!(is_valid_account_no(1));
        assert!(is_valid_account_no(i64::MAX));
        assert!(!is_valid_account_no(0));
        assert!(!is_valid_account_no(-7));
    }
}
