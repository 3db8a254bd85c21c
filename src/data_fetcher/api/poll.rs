//! Bounded "retry until non-empty" polling

use std::future::Future;
use std::time::Duration;

use crate::constants::polling;

/// How many times to try and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    attempts: u32,
    interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(
            polling::POOL_ID_ATTEMPTS,
            Duration::from_millis(polling::POOL_ID_INTERVAL_MS),
        )
    }
}

impl PollPolicy {
    /// At least one attempt is always made.
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            interval,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Calls `fetch` until it yields a non-empty list or the attempts run out.
    ///
    /// Errors from `fetch` end the poll immediately. Sleeps only between
    /// attempts, never after the last one. Returns an empty list when every
    /// attempt came back empty.
    pub async fn poll_until_non_empty<T, E, F, Fut>(&self, mut fetch: F) -> Result<Vec<T>, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        for attempt in 1..=self.attempts {
            let items = fetch(attempt).await?;
            if !items.is_empty() {
                tracing::debug!("Poll succeeded on attempt {attempt}/{}", self.attempts);
                return Ok(items);
            }
            if attempt < self.attempts {
                tokio::time::sleep(self.interval).await;
            }
        }
        tracing::warn!(
            "Nothing found after {} attempts ({:?} apart)",
            self.attempts,
            self.interval
        );
        Ok(Vec::new())
    }
}
