/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::constants::{RELAY_RETRY_ATTEMPTS, RELAY_RETRY_DELAY_SECS};
use crate::error::AppError;
use crate::utils::config::get_env_or_none;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Bounded retry policy for polling loops
///
/// The attempt budget and the fixed delay between attempts are explicit so
/// callers (and tests) control the polling behavior instead of relying on
/// hard-coded sleeps.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a new retry policy
    ///
    /// # Arguments
    /// * `max_attempts` - Number of attempts before giving up (at least 1)
    /// * `delay` - Fixed delay between consecutive attempts
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Gets the maximum number of attempts
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Gets the delay between attempts
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs an attempt function until it yields a value or the budget is spent
    ///
    /// The attempt function receives the zero-based attempt index and returns
    /// `Ok(Some(value))` to finish, `Ok(None)` to signal an empty result that
    /// should be retried after the configured delay, or `Err` to abort the
    /// loop immediately. No delay is awaited after the final attempt.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - An attempt produced a value
    /// * `Ok(None)` - Every attempt came back empty
    /// * `Err(AppError)` - An attempt failed outright
    pub async fn run<T, F, Fut>(&self, mut attempt: F) -> Result<Option<T>, AppError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<Option<T>, AppError>>,
    {
        for i in 0..self.max_attempts {
            if let Some(value) = attempt(i).await? {
                return Ok(Some(value));
            }
            if i + 1 < self.max_attempts {
                debug!(
                    "Empty result on attempt {}/{}, sleeping {:?}",
                    i + 1,
                    self.max_attempts,
                    self.delay
                );
                sleep(self.delay).await;
            }
        }
        Ok(None)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        let max_attempts: u32 =
            get_env_or_none("RELAY_RETRY_ATTEMPTS").unwrap_or(RELAY_RETRY_ATTEMPTS);
        let delay_secs: u64 =
            get_env_or_none("RELAY_RETRY_DELAY_SECS").unwrap_or(RELAY_RETRY_DELAY_SECS);

        Self::new(max_attempts, Duration::from_secs(delay_secs))
    }
}
