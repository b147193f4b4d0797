//! Database query timeout helpers
//!
//! Wraps store futures in a deadline so a hung connection surfaces as
//! [`StoreError::Timeout`] rather than blocking the caller.

use std::time::Duration;
use tokio::time::timeout;

use super::errors::{StoreError, StoreResult};

/// Default timeout for single statements (5 seconds)
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for bulk statements and schema changes (30 seconds)
pub const LONG_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Execute a store operation with a deadline
///
/// # Example
///
/// ```no_run
/// use swiss_forum::db::timeouts::{with_timeout, DEFAULT_QUERY_TIMEOUT};
/// # use sqlx::PgPool;
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
///
/// let count: i64 = with_timeout(
///     DEFAULT_QUERY_TIMEOUT,
///     sqlx::query_scalar("SELECT count(*) FROM players").fetch_one(pool),
/// )
/// .await?;
///
/// # Ok(())
/// # }
/// ```
pub async fn with_timeout<F, T, E>(duration: Duration, future: F) -> StoreResult<T>
where
    F: std::future::Future<Output = Result<T, E>>,
    StoreError: From<E>,
{
    match timeout(duration, future).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(StoreError::from(e)),
        Err(_) => Err(StoreError::Timeout(duration)),
    }
}

/// Execute a statement with the default timeout (5 seconds)
pub async fn with_default_timeout<F, T, E>(future: F) -> StoreResult<T>
where
    F: std::future::Future<Output = Result<T, E>>,
    StoreError: From<E>,
{
    with_timeout(DEFAULT_QUERY_TIMEOUT, future).await
}

/// Execute a bulk statement or the schema migration with the extended
/// timeout (30 seconds)
pub async fn with_long_timeout<F, T, E>(future: F) -> StoreResult<T>
where
    F: std::future::Future<Output = Result<T, E>>,
    StoreError: From<E>,
{
    with_timeout(LONG_OPERATION_TIMEOUT, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timeout_constants() {
        assert_eq!(DEFAULT_QUERY_TIMEOUT.as_secs(), 5);
        assert_eq!(LONG_OPERATION_TIMEOUT.as_secs(), 30);
    }

    #[tokio::test]
    async fn test_completed_future_passes_through() {
        let value = with_default_timeout(async { Ok::<_, sqlx::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_store_error_is_classified() {
        let err = with_default_timeout(async { Err::<(), _>(sqlx::Error::PoolClosed) })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_future_times_out() {
        let err = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, sqlx::Error>(())
        })
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == Duration::from_millis(10)));
    }

    #[tokio::test]
    async fn test_migrate_error_is_classified() {
        let err = with_long_timeout(async {
            Err::<(), _>(sqlx::migrate::MigrateError::VersionMissing(1))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Migrate(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_migration_times_out() {
        let err = with_long_timeout(std::future::pending::<
            Result<(), sqlx::migrate::MigrateError>,
        >())
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Timeout(d) if d == LONG_OPERATION_TIMEOUT));
    }
}
