//! Post-commit notification sink
//!
//! The surrounding system (mail alerts, report export) consumes these
//! events. Delivery is strictly best-effort and strictly after commit: a
//! sink failure is logged and dropped, and can never block, fail, or roll
//! back the ledger operation that produced the event.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core_types::{AccountNo, UserId};

/// Event delivered to the sink after a ledger operation commits
#[derive(Debug, Clone)]
pub enum LedgerEvent {
    Deposit {
        user_id: UserId,
        account: AccountNo,
        amount: Decimal,
        balance: Decimal,
    },
    Withdrawal {
        user_id: UserId,
        account: AccountNo,
        amount: Decimal,
        balance: Decimal,
    },
    /// Debit side of a committed transfer, addressed to the sender
    TransferDebit {
        user_id: UserId,
        from_account: AccountNo,
        to_account: AccountNo,
        amount: Decimal,
        balance: Decimal,
    },
    /// Credit side of a committed transfer, addressed to the receiver.
    /// The receiver is resolved best-effort after commit and may be unknown.
    TransferCredit {
        user_id: Option<UserId>,
        from_account: AccountNo,
        to_account: AccountNo,
        amount: Decimal,
        balance: Decimal,
    },
    /// A transfer attempt that failed the funds check and was audited
    TransferFailed {
        user_id: UserId,
        from_account: AccountNo,
        to_account: AccountNo,
        amount: Decimal,
    },
}

/// Delivery boundary for post-commit events
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Sink name for logging
    fn name(&self) -> &'static str;

    async fn notify(&self, event: LedgerEvent) -> anyhow::Result<()>;
}

/// Default sink - emits structured tracing events.
///
/// Stands in for the alerting/export plumbing of the full system, which
/// plugs in behind the same trait.
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    fn name(&self) -> &'static str {
        "tracing"
    }

    async fn notify(&self, event: LedgerEvent) -> anyhow::Result<()> {
        match &event {
            LedgerEvent::Deposit {
                user_id,
                account,
                amount,
                balance,
            } => info!(user_id = *user_id, account = %account, %amount, %balance, "deposit alert"),
            LedgerEvent::Withdrawal {
                user_id,
                account,
                amount,
                balance,
            } => {
                info!(user_id = *user_id, account = %account, %amount, %balance, "withdrawal alert")
            }
            LedgerEvent::TransferDebit {
                user_id,
                from_account,
                to_account,
                amount,
                balance,
            } => {
                info!(user_id = *user_id, from = %from_account, to = %to_account, %amount, %balance, "debit alert")
            }
            LedgerEvent::TransferCredit {
                user_id,
                from_account,
                to_account,
                amount,
                balance,
            } => {
                info!(user_id = ?user_id, from = %from_account, to = %to_account, %amount, %balance, "credit alert")
            }
            LedgerEvent::TransferFailed {
                user_id,
                from_account,
                to_account,
                amount,
            } => {
                info!(user_id = *user_id, from = %from_account, to = %to_account, %amount, "transfer failure alert")
            }
        }
        Ok(())
    }
}

/// Deliver an event without blocking or failing the calling operation
pub fn spawn_notify(sink: &Arc<dyn NotificationSink>, event: LedgerEvent) {
    let sink = Arc::clone(sink);
    tokio::spawn(async move {
        if let Err(e) = sink.notify(event.clone()).await {
            warn!(sink = sink.name(), error = %e, ?event, "notification delivery failed");
        }
    });
}
