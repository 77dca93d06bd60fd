//! Route handlers organized by resource

pub mod articles;
pub mod bias;
pub mod dispatch;
pub mod health;
pub mod users;

use std::future::Future;
use std::time::Duration;

use crate::db::DbError;
use crate::http::error::ApiError;

/// Run store work under the per-request timeout.
///
/// Dropping the future on expiry cancels the in-flight query.
pub(crate) async fn bounded<T, F>(timeout: Duration, work: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, DbError>>,
{
    match tokio::time::timeout(timeout, work).await {
        Ok(result) => result.map_err(ApiError::from),
        Err(_) => Err(ApiError::Timeout {
            seconds: timeout.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_results_through() {
        let value = bounded(Duration::from_secs(1), async { Ok::<_, DbError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_is_timeout_error() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, DbError>(())
        };
        let err = bounded(Duration::from_secs(2), slow).await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout { seconds: 2 }));
    }
}
