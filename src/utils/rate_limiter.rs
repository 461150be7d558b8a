/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Token bucket rate limiting for outbound exchange requests
//!
//! The centralized exchange weighs every depth request against a per-minute
//! budget; exceeding it gets the API key banned for a while. A `governor`
//! token bucket is checked before each request to stay inside that budget.

use crate::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket limiter applied to depth endpoint requests
///
/// One token is replenished per configured period; bursts up to
/// `burst_size` tokens are allowed when the bucket is full.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter from the rate limiter configuration section
    ///
    /// A zero burst size is replaced with 1 so the limiter can always make
    /// progress.
    ///
    /// # Arguments
    /// * `config` - Period and burst settings
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst =
            NonZeroU32::new(config.burst_size).unwrap_or_else(|| NonZeroU32::new(1).expect("1 > 0"));
        let quota = Quota::with_period(Duration::from_secs(config.period_seconds))
            .expect("non-zero period")
            .allow_burst(burst);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket allows one more request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Reports whether a request could proceed right now, consuming a token
    /// if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}
