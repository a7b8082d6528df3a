//! Per-account lock coordination
//!
//! One exclusive async mutex per account number, created lazily on first
//! use and kept for the process lifetime. Operations that span two accounts
//! acquire in lexicographic account-number order, so any two operations
//! sharing one or both accounts always request locks in the same relative
//! order and circular wait is impossible.
//!
//! Guards are RAII: dropping one releases exactly the locks it holds, in
//! inverse acquisition order, on every exit path. A lock that is not held
//! cannot be released twice.
//!
//! This table serializes callers inside one process. It is not the
//! authoritative guard - that is the row-level `FOR UPDATE` read inside the
//! database transaction (see [`super::service`]).

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::core_types::AccountNo;

/// Lock table keyed by account number.
///
/// Explicitly owned and injected into the service (shared via `Arc`), so
/// tests and multi-instance setups get isolated tables.
#[derive(Default)]
pub struct AccountLocks {
    table: DashMap<AccountNo, Arc<Mutex<()>>>,
}

impl AccountLocks {
    pub fn new() -> Self {
        Self {
            table: DashMap::new(),
        }
    }

    fn entry(&self, account_no: &str) -> Arc<Mutex<()>> {
        self.table
            .entry(account_no.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Lock a single account. Awaits until the current holder releases;
    /// no timeout.
    pub async fn acquire(&self, account_no: &str) -> AccountGuard {
        let first = self.entry(account_no).lock_owned().await;
        AccountGuard {
            _second: None,
            _first: first,
        }
    }

    /// Lock two accounts in canonical order.
    ///
    /// The order is decided by comparing the account numbers themselves,
    /// never by which side is source or destination and never by lock-object
    /// identity. Equal identifiers are locked once.
    pub async fn acquire_pair(&self, a: &str, b: &str) -> AccountGuard {
        if a == b {
            return self.acquire(a).await;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let first = self.entry(lo).lock_owned().await;
        let second = self.entry(hi).lock_owned().await;
        AccountGuard {
            _second: Some(second),
            _first: first,
        }
    }

    /// Number of accounts with a lock entry. Entries persist once created;
    /// the account-number space is unbounded but practically small.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// RAII handle over one or two account locks.
///
/// Fields drop in declaration order, so the lock acquired last is released
/// first.
pub struct AccountGuard {
    _second: Option<OwnedMutexGuard<()>>,
    _first: OwnedMutexGuard<()>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    #[tokio::test]
    async fn test_exclusive_within_one_account() {
        let locks = Arc::new(AccountLocks::new());
        let guard = locks.acquire("ACC-1").await;

        let entered = Arc::new(AtomicBool::new(false));
        let task = {
            let locks = locks.clone();
            let entered = entered.clone();
            tokio::spawn(async move {
                let _g = locks.acquire("ACC-1").await;
                entered.store(true, Ordering::SeqCst);
            })
        };

        sleep(Duration::from_millis(50)).await;
        assert!(
            !entered.load(Ordering::SeqCst),
            "second acquirer should wait for the holder"
        );

        drop(guard);
        task.await.unwrap();
        assert!(entered.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_distinct_accounts_do_not_contend() {
        let locks = Arc::new(AccountLocks::new());
        let _a = locks.acquire("ACC-1").await;

        // Must complete immediately even while ACC-1 is held.
        timeout(Duration::from_secs(1), locks.acquire("ACC-2"))
            .await
            .expect("lock on a different account should not block");
    }

    #[tokio::test]
    async fn test_pair_with_equal_accounts_locks_once() {
        let locks = Arc::new(AccountLocks::new());
        let guard = locks.acquire_pair("ACC-1", "ACC-1").await;
        assert_eq!(locks.len(), 1, "equal identifiers create one entry");

        let blocked = Arc::new(AtomicBool::new(false));
        let task = {
            let locks = locks.clone();
            let blocked = blocked.clone();
            tokio::spawn(async move {
                let _g = locks.acquire("ACC-1").await;
                blocked.store(true, Ordering::SeqCst);
            })
        };

        sleep(Duration::from_millis(50)).await;
        assert!(!blocked.load(Ordering::SeqCst), "pair lock is exclusive");
        drop(guard);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_guard_releases_both_accounts() {
        let locks = Arc::new(AccountLocks::new());
        let guard = locks.acquire_pair("ACC-1", "ACC-2").await;
        drop(guard);

        // Both must be free again, in either order.
        timeout(Duration::from_secs(1), async {
            let _b = locks.acquire("ACC-2").await;
            let _a = locks.acquire("ACC-1").await;
        })
        .await
        .expect("dropped guard should release both locks");
    }

    #[tokio::test]
    async fn test_entries_persist_after_release() {
        let locks = AccountLocks::new();
        assert!(locks.is_empty());
        drop(locks.acquire("ACC-1").await);
        drop(locks.acquire_pair("ACC-2", "ACC-3").await);
        assert_eq!(locks.len(), 3, "entries live for the process lifetime");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_opposing_pairs_never_deadlock() {
        let locks = Arc::new(AccountLocks::new());
        let rounds = 200;
        let held = Arc::new(AtomicUsize::new(0));

        let mut tasks = Vec::new();
        for flip in [false, true] {
            let locks = locks.clone();
            let held = held.clone();
            tasks.push(tokio::spawn(async move {
                let (x, y) = if flip {
                    ("ACC-Y", "ACC-X")
                } else {
                    ("ACC-X", "ACC-Y")
                };
                for _ in 0..rounds {
                    let _g = locks.acquire_pair(x, y).await;
                    // Both locks are held here; no other pair holder may overlap.
                    assert_eq!(held.fetch_add(1, Ordering::SeqCst), 0);
                    tokio::task::yield_now().await;
                    assert_eq!(held.fetch_sub(1, Ordering::SeqCst), 1);
                }
            }));
        }

        timeout(Duration::from_secs(10), async {
            for task in tasks {
                task.await.unwrap();
            }
        })
        .await
        .expect("opposing two-account acquisitions must not deadlock");
    }
}
