//! Ledger error types
//!
//! Every operation returns a typed outcome so callers can tell apart
//! "fix your input and retry" (validation), "happened to the business rule"
//! (insufficient funds) and "system problem" (store failure).

use thiserror::Error;

/// Ledger operation failures
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    #[error("Account does not belong to the caller")]
    Unauthorized,

    #[error("Insufficient balance")]
    InsufficientFunds,

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Stable error code for the surrounding system (API layer, alerting)
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidAmount => "INVALID_AMOUNT",
            LedgerError::SameAccount => "SAME_ACCOUNT",
            LedgerError::Unauthorized => "UNAUTHORIZED",
            LedgerError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            LedgerError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            LedgerError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// True for failures of the store itself, as opposed to validation or
    /// business outcomes. Only these are worth a caller-side retry as-is.
    pub fn is_system(&self) -> bool {
        matches!(self, LedgerError::Database(_))
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(e: sqlx::Error) -> Self {
        LedgerError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InvalidAmount.code(), "INVALID_AMOUNT");
        assert_eq!(LedgerError::SameAccount.code(), "SAME_ACCOUNT");
        assert_eq!(LedgerError::InsufficientFunds.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(
            LedgerError::AccountNotFound("ACC-1".into()).code(),
            "ACCOUNT_NOT_FOUND"
        );
    }

    #[test]
    fn test_system_classification() {
        assert!(LedgerError::Database("connection reset".into()).is_system());
        assert!(!LedgerError::Unauthorized.is_system());
        assert!(!LedgerError::InsufficientFunds.is_system());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LedgerError::InsufficientFunds.to_string(),
            "Insufficient balance"
        );
        assert_eq!(
            LedgerError::AccountNotFound("ACC-9".into()).to_string(),
            "Account not found: ACC-9"
        );
    }
}
