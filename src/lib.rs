//! corebank - concurrent banking ledger core
//!
//! Correct concurrent access to account balances over a single durable
//! PostgreSQL store: no lost updates, no negative balances, no
//! double-spends, and an append-only audit trail of every attempted
//! mutation.
//!
//! # Modules
//!
//! - [`core_types`] - Identifier aliases (UserId, AccountNo)
//! - [`config`] - YAML-backed runtime configuration
//! - [`logging`] - tracing subscriber bootstrap
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`ledger`] - the core: lock coordination, account store,
//!   transaction log, ledger service, notification sink

pub mod config;
pub mod core_types;
pub mod db;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use core_types::{AccountNo, UserId};
pub use db::Database;
pub use ledger::{
    Account, AccountKind, AccountLocks, AccountStore, LedgerError, LedgerEvent, LedgerService,
    NotificationSink, TracingSink, TransactionFilter, TransactionLog, TransactionRecord,
    TransferReceipt, TxnKind,
};
