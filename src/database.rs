use std::str::FromStr;

use secrecy::ExposeSecret;
use sqlx::Postgres;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Database connection pool type
pub type DbPool = sqlx::PgPool;

/// Database connection type - supports both pool connections and transactions
/// Use `conn.as_mut()` for pool connections, `tx.as_mut()` for transactions
pub type DbConn = sqlx::PgConnection;

/// A connection borrowed from the pool. Dropping it hands the connection back.
pub type PooledConn = PoolConnection<Postgres>;

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Connections currently open, idle or checked out.
    pub size: u32,
    /// Open connections waiting in the pool for a caller.
    pub idle: usize,
    /// Upper bound on `size`.
    pub max_connections: u32,
}

/// Owner of the process-wide connection pool.
///
/// Built once at startup and handed to whoever needs database access; clones share
/// the same pool. Concurrent sessions are capped at `max_connections` and callers
/// beyond that wait in `acquire` until a connection is returned or the acquire
/// timeout elapses.
#[derive(Debug, Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Creates the pool and opens the first connection eagerly.
    ///
    /// Fails if the server is unreachable or rejects the credentials.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let (pool_options, connect_options) = pool_options(config)?;
        let pool = pool_options.connect_with(connect_options).await?;

        tracing::info!(
            min_connections = config.min_connections,
            max_connections = config.max_connections,
            "Database pool connected"
        );

        Ok(Self { pool })
    }

    /// Creates the pool without touching the network. Connections are opened on
    /// first acquisition, so an unreachable server surfaces there instead.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let (pool_options, connect_options) = pool_options(config)?;
        let pool = pool_options.connect_lazy_with(connect_options);

        tracing::debug!(
            max_connections = config.max_connections,
            "Database pool created lazily"
        );

        Ok(Self { pool })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Borrows a connection for the lifetime of the returned guard.
    pub async fn acquire(&self) -> Result<PooledConn> {
        let conn = self.pool.acquire().await?;
        Ok(conn)
    }

    /// Closes every pooled connection, waiting for checked-out ones to come back.
    /// Safe to call more than once and on a pool that never ran a query.
    pub async fn close(&self) {
        if self.pool.is_closed() {
            return;
        }

        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            size: self.pool.size(),
            idle: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Round-trips a trivial statement to confirm the database answers.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        sqlx::query_scalar::<Postgres, i32>("SELECT 1")
            .fetch_one(&mut *conn)
            .await?;
        Ok(())
    }
}

fn pool_options(config: &DatabaseConfig) -> Result<(PgPoolOptions, PgConnectOptions)> {
    config.validate()?;

    let connect_options = PgConnectOptions::from_str(config.connection_string().expose_secret())?
        .options([(
            "statement_timeout",
            config.command_timeout().as_millis().to_string(),
        )]);

    let pool_options = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout());

    Ok((pool_options, connect_options))
}
