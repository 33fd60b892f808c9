//! Timeout and retry policy for remote calls.
//!
//! The default policy has no timeout and no retries, so a hung request blocks until the
//! process is interrupted. Both knobs are opt-in through configuration.

use crate::config::constants::retry::{BASE_DELAY_MS, MAX_EXPONENT};
use crate::llm::provider::LLMError;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestPolicy {
    /// Per-attempt timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Additional attempts after the first one, for transient failures only.
    pub max_retries: u32,
}

impl RequestPolicy {
    pub fn no_retry() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Exponential backoff delay for a retry attempt (0-based)
pub fn retry_delay(attempt: u32) -> Duration {
    let exponent = attempt.min(MAX_EXPONENT);
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(2u64.saturating_pow(exponent)))
}

/// Run `operation` under `policy`, retrying transient failures with backoff.
pub async fn run_with_policy<T, F, Fut>(policy: &RequestPolicy, mut operation: F) -> Result<T, LLMError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LLMError>>,
{
    let mut attempt = 0;
    loop {
        let result = match policy.timeout {
            Some(limit) => match tokio::time::timeout(limit, operation()).await {
                Ok(result) => result,
                Err(_) => Err(LLMError::Network(format!(
                    "request timed out after {}s",
                    limit.as_secs()
                ))),
            },
            None => operation().await,
        };

        match result {
            Err(err) if err.is_transient() && attempt < policy.max_retries => {
                let delay = retry_delay(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient provider failure; retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_retry_delay_grows_exponentially() {
        assert_eq!(retry_delay(0), Duration::from_millis(1000));
        assert_eq!(retry_delay(1), Duration::from_millis(2000));
        assert_eq!(retry_delay(3), Duration::from_millis(8000));
        assert_eq!(retry_delay(50), retry_delay(MAX_EXPONENT));
    }

    #[tokio::test]
    async fn test_default_policy_makes_single_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<(), LLMError> = run_with_policy(&RequestPolicy::default(), || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(LLMError::Network("down".into()))
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_is_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let policy = RequestPolicy::no_retry().with_max_retries(2);
        let result = run_with_policy(&policy, || {
            let counter = counter.clone();
            async move {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(LLMError::RateLimit)
                } else {
                    Ok("done")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_permanent_failure_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let policy = RequestPolicy::no_retry().with_max_retries(3);
        let result: Result<(), LLMError> = run_with_policy(&policy, || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(LLMError::Authentication("bad key".into()))
            }
        })
        .await;

        assert!(matches!(result, Err(LLMError::Authentication(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_maps_to_network_error() {
        let policy = RequestPolicy::no_retry().with_timeout(Duration::from_secs(5));
        let result: Result<(), LLMError> = run_with_policy(&policy, || async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(LLMError::Network(msg)) if msg.contains("timed out")));
    }
}
