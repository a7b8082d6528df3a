//! Database connection management and schema bootstrap

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Statements run at startup. `IF NOT EXISTS` keeps them idempotent; the
/// `CHECK` constraints back the in-code invariants (balance never negative,
/// logged amounts strictly positive) at the store itself.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS accounts (
        account_no   TEXT PRIMARY KEY,
        user_id      BIGINT NOT NULL,
        kind         SMALLINT NOT NULL,
        balance      NUMERIC(18, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
        created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_accounts_user ON accounts (user_id)"#,
    r#"CREATE TABLE IF NOT EXISTS transactions (
        id           BIGSERIAL PRIMARY KEY,
        user_id      BIGINT NOT NULL,
        from_account TEXT,
        to_account   TEXT,
        amount       NUMERIC(18, 2) NOT NULL CHECK (amount > 0),
        kind         SMALLINT NOT NULL,
        txn_at       TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions (user_id, txn_at)"#,
];

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Create a pool using the settings from `AppConfig`
    pub async fn connect_with(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "PostgreSQL connection pool established"
        );
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create the accounts and transactions tables if missing
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::info!("Ledger schema ready");
        Ok(())
    }
}
