use std::time::Duration;

use tracing::{debug, warn};

use super::{source::CatalogSource, transport::CatalogTransport};
use crate::error::{FetchError, TransportError};

/// Linear retry schedule for transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Wait before attempt `n + 1` is `base_delay * n`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Delay after the `attempt`-th failure (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Fetch catalog bytes, retrying transport failures on the linear schedule.
/// The terminal [`FetchError::Exhausted`] is only produced once the final
/// attempt has failed.
pub async fn fetch_with_retry<T>(
    transport: &T,
    source: &CatalogSource,
    policy: &RetryPolicy,
) -> Result<Vec<u8>, FetchError>
where
    T: CatalogTransport + ?Sized,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match transport.fetch_bytes(source).await {
            Ok(bytes) => {
                debug!(
                    %source,
                    attempt,
                    bytes = bytes.len(),
                    "fetched catalog"
                );
                return Ok(bytes);
            }
            Err(err) if attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    %source,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "catalog fetch failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(exhausted(source, attempt, err)),
        }
    }
}

fn exhausted(
    source: &CatalogSource,
    attempts: u32,
    err: TransportError,
) -> FetchError {
    warn!(%source, attempts, error = %err, "catalog fetch gave up");
    FetchError::Exhausted {
        attempts,
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::transport::MockCatalogTransport;
    use mockall::Sequence;
    use std::path::PathBuf;
    use tokio::time::Instant;

    fn source() -> CatalogSource {
        CatalogSource::File(PathBuf::from("netflix_titles.csv"))
    }

    fn offline() -> TransportError {
        TransportError::Other("connection refused".into())
    }

    #[test]
    fn delays_grow_linearly() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_third_failure() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(3)
            .returning(|_| Err(offline()));

        let policy = RetryPolicy::default();
        let started = Instant::now();
        let err = fetch_with_retry(&transport, &source(), &policy)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Exhausted { attempts: 3, .. }));
        assert_eq!(
            err.user_message(),
            "Failed to load data after 3 attempts: connection refused"
        );
        // 2s after the first failure, 4s after the second, none after the last.
        let waited = started.elapsed();
        assert!(waited >= Duration::from_secs(6), "waited {waited:?}");
        assert!(waited < Duration::from_secs(7), "waited {waited:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_on_third_attempt() {
        let mut seq = Sequence::new();
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(offline()));
        transport
            .expect_fetch_bytes()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(b"show_id\n".to_vec()));

        let started = Instant::now();
        let bytes =
            fetch_with_retry(&transport, &source(), &RetryPolicy::default())
                .await
                .unwrap();
        assert_eq!(bytes, b"show_id\n");
        assert!(started.elapsed() >= Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_does_not_wait() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let started = Instant::now();
        fetch_with_retry(&transport, &source(), &RetryPolicy::default())
            .await
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_tries_once() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_fetch_bytes()
            .times(1)
            .returning(|_| Err(offline()));

        let policy = RetryPolicy {
            max_attempts: 0,
            base_delay: Duration::from_secs(2),
        };
        let err = fetch_with_retry(&transport, &source(), &policy)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Exhausted { attempts: 1, .. }));
    }
}
