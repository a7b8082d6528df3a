//! Domain records for accounts and the transaction log
//!
//! Kind enums are stored as SMALLINT ids in PostgreSQL; the
//! `id()`/`from_id()` pair is the single mapping in either direction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

use crate::core_types::{AccountNo, UserId};

/// Account kind - the closed set of products the bank offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum AccountKind {
    Savings = 1,
    Current = 2,
}

impl AccountKind {
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(AccountKind::Savings),
            2 => Some(AccountKind::Current),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "SAVINGS",
            AccountKind::Current => "CURRENT",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction log record kind
///
/// `FailedTransfer` is a first-class kind: an insufficient-funds transfer
/// attempt is rolled back but the attempt itself is a committed audit fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum TxnKind {
    Deposit = 1,
    Withdrawal = 2,
    Transfer = 3,
    FailedTransfer = 4,
}

impl TxnKind {
    #[inline]
    pub fn id(&self) -> i16 {
        *self as i16
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(TxnKind::Deposit),
            2 => Some(TxnKind::Withdrawal),
            3 => Some(TxnKind::Transfer),
            4 => Some(TxnKind::FailedTransfer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Deposit => "DEPOSIT",
            TxnKind::Withdrawal => "WITHDRAWAL",
            TxnKind::Transfer => "TRANSFER",
            TxnKind::FailedTransfer => "FAILED_TRANSFER",
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A durable account row
#[derive(Debug, Clone)]
pub struct Account {
    pub account_no: AccountNo,
    pub user_id: UserId,
    pub kind: AccountKind,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A committed transaction log entry. Immutable once written; the store
/// assigns `id` and `txn_at`.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: UserId,
    pub from_account: Option<AccountNo>,
    pub to_account: Option<AccountNo>,
    pub amount: Decimal,
    pub kind: TxnKind,
    pub txn_at: DateTime<Utc>,
}

/// A log entry about to be appended.
///
/// The constructors encode the source/destination shape per kind:
/// deposits carry only a destination, withdrawals only a source, transfers
/// (failed or not) carry both.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub from_account: Option<AccountNo>,
    pub to_account: Option<AccountNo>,
    pub amount: Decimal,
    pub kind: TxnKind,
}

impl NewTransaction {
    pub fn deposit(user_id: UserId, account_no: &str, amount: Decimal) -> Self {
        Self {
            user_id,
            from_account: None,
            to_account: Some(account_no.to_string()),
            amount,
            kind: TxnKind::Deposit,
        }
    }

    pub fn withdrawal(user_id: UserId, account_no: &str, amount: Decimal) -> Self {
        Self {
            user_id,
            from_account: Some(account_no.to_string()),
            to_account: None,
            amount,
            kind: TxnKind::Withdrawal,
        }
    }

    pub fn transfer(user_id: UserId, from: &str, to: &str, amount: Decimal) -> Self {
        Self {
            user_id,
            from_account: Some(from.to_string()),
            to_account: Some(to.to_string()),
            amount,
            kind: TxnKind::Transfer,
        }
    }

    pub fn failed_transfer(user_id: UserId, from: &str, to: &str, amount: Decimal) -> Self {
        Self {
            user_id,
            from_account: Some(from.to_string()),
            to_account: Some(to.to_string()),
            amount,
            kind: TxnKind::FailedTransfer,
        }
    }
}

/// Filters for the transaction history query.
///
/// `from` is inclusive and `to` is exclusive (`[from, to)`), both in UTC.
/// Amount bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TxnKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

/// Post-commit balances of a successful transfer
#[derive(Debug, Clone, Copy)]
pub struct TransferReceipt {
    pub from_balance: Decimal,
    pub to_balance: Decimal,
}
