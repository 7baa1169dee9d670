//! Database connection management
//!
//! Builds PostgreSQL connection pools from a [`ConnectionConfig`]. Pools are
//! the engine handles of this crate: whoever creates one owns it and disposes
//! of it with `pool.close().await`.

use crate::config::ConnectionConfig;
use crate::db::session::SessionFactory;
use crate::error::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::time::Duration;
use tracing::debug;

/// Type alias for the database pool
pub type DbPool = PgPool;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Build driver connect options from a config.
///
/// The rendered URL is handed to the driver layer unchanged; an unrecognized
/// driver name fails here with the driver's own error.
fn connect_options(config: &ConnectionConfig) -> Result<PgConnectOptions> {
    let url = config.url()?;
    let options: PgConnectOptions = url.as_str().parse()?;

    Ok(options.log_statements(statement_log_level(config.echo)))
}

/// Log level for emitted SQL statements.
///
/// `echo = true` surfaces statements at INFO; otherwise they stay at the
/// driver's quiet DEBUG level.
fn statement_log_level(echo: bool) -> log::LevelFilter {
    if echo {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Debug
    }
}

/// Create a connection pool without performing any I/O.
///
/// Connections are opened on first acquire, so this is callable from
/// synchronous setup code. An unreachable host or bad credentials surface
/// when the pool is first used, not here.
pub fn create_lazy_pool(config: &ConnectionConfig) -> Result<DbPool> {
    debug!(
        "Creating lazy connection pool for {}:{}",
        config.host, config.port
    );

    let options = connect_options(config)?;
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(options);

    Ok(pool)
}

/// Create a connection pool and eagerly establish a first connection.
///
/// Use this where configuration errors should surface immediately.
pub async fn create_pool(config: &ConnectionConfig) -> Result<DbPool> {
    debug!(
        "Creating connection pool for {}:{}",
        config.host, config.port
    );

    let options = connect_options(config)?;
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create a session factory from `DATABASE_*` environment variables.
///
/// Statement echoing is on and sessions do not expire their records after
/// commit. The pool is built lazily: missing environment variables are
/// tolerated here and the connection fails only once a session executes.
pub fn session_factory_from_env() -> Result<SessionFactory> {
    let config = ConnectionConfig::from_env();
    let pool = create_lazy_pool(&config)?;

    Ok(SessionFactory::new(pool).expire_on_commit(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_pool_construction_performs_no_io() {
        let config = ConnectionConfig::builder()
            .username("nobody")
            .host("db.invalid")
            .database_name("borealis")
            .build();

        let pool = create_lazy_pool(&config).expect("lazy pool must build without connecting");
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    async fn unrecognized_driver_is_rejected_by_the_driver_layer() {
        let config = ConnectionConfig::builder().drivername("mysql").build();

        assert!(create_lazy_pool(&config).is_err());
    }

    #[test]
    fn echo_controls_statement_log_level() {
        assert_eq!(statement_log_level(true), log::LevelFilter::Info);
        assert_eq!(statement_log_level(false), log::LevelFilter::Debug);
    }

    #[tokio::test]
    async fn pools_from_the_same_config_share_no_state() {
        let config = ConnectionConfig::builder().host("db.invalid").build();

        let first = create_lazy_pool(&config).unwrap();
        let second = create_lazy_pool(&config).unwrap();

        first.close().await;
        assert!(first.is_closed());
        assert!(!second.is_closed());
    }

    #[tokio::test]
    async fn factory_from_env_builds_without_database() {
        let factory = session_factory_from_env().expect("factory construction must not connect");
        assert!(!factory.pool().is_closed());
    }
}
