//! Banking ledger core
//!
//! Deposit, withdraw and transfer over durable accounts, safe under
//! concurrent callers.
//!
//! # Safety invariants
//!
//! 1. **Canonical lock order**: two-account operations lock in
//!    lexicographic account-number order, in-process and at the row level,
//!    so overlapping operations can never circular-wait.
//! 2. **Log-with-balance**: a balance write and its transaction-log append
//!    commit in the same database transaction, or not at all.
//! 3. **Authoritative row lock**: funds decisions are made only on a value
//!    read under `SELECT ... FOR UPDATE`; the in-process lock is a
//!    contention optimization, not the guard.
//! 4. **Non-negative balances**: enforced by the funds check and backed by
//!    a store-level CHECK constraint.
//! 5. **Post-commit notifications**: best-effort, never part of the
//!    transactional scope, never an operation failure.

pub mod accounts;
pub mod error;
pub mod locks;
pub mod notify;
pub mod service;
pub mod transactions;
pub mod types;

// Re-exports for convenience
pub use accounts::AccountStore;
pub use error::LedgerError;
pub use locks::{AccountGuard, AccountLocks};
pub use notify::{LedgerEvent, NotificationSink, TracingSink};
pub use service::LedgerService;
pub use transactions::TransactionLog;
pub use types::{
    Account, AccountKind, NewTransaction, TransactionFilter, TransactionRecord, TransferReceipt,
    TxnKind,
};
