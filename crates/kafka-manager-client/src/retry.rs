//! Retry policy for mutating calls
//!
//! Only topic creation is retried. The delay before retry `n` is
//! `base_delay * round(n ^ exponent)`, which with the defaults gives
//! 1s, 6s and 16s for the three retries.

use std::{future::Future, time::Duration};

use tracing::warn;

use crate::error::{ClientError, Result};

/// Upper bound on a single backoff sleep
pub const MAX_DELAY: Duration = Duration::from_secs(300);

/// Which failures are worth another attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryOn {
    /// Any transport or backend error, including 4xx responses
    #[default]
    AnyError,
    /// Transport errors, 429 and 5xx only; other 4xx fail fast
    Transient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    pub base_delay: Duration,
    pub exponent: f64,
    pub retry_on: RetryOn,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            exponent: 2.5,
            retry_on: RetryOn::AnyError,
        }
    }
}

impl RetryPolicy {
    /// A policy that sends the request exactly once
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    /// Delay slept before retry `attempt` (1-based), capped at [`MAX_DELAY`]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = f64::from(attempt).powf(self.exponent).round();
        Duration::try_from_secs_f64(self.base_delay.as_secs_f64() * factor)
            .map_or(MAX_DELAY, |delay| delay.min(MAX_DELAY))
    }

    /// Whether `error` qualifies for another attempt under this policy.
    /// Codec and lookup errors never do.
    pub fn should_retry(&self, error: &ClientError) -> bool {
        match error {
            ClientError::Transport(_) | ClientError::Backend { .. } => match self.retry_on {
                RetryOn::AnyError => true,
                RetryOn::Transient => error.is_transient(),
            },
            _ => false,
        }
    }

    /// Run `operation` until it succeeds, the error is not retryable, or the
    /// retries are exhausted. The last error is returned on exhaustion.
    pub async fn run<T, F, Fut>(&self, name: &str, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_retries && self.should_retry(&e) => {
                    attempt += 1;
                    let delay = self.delay_for(attempt);
                    warn!(
                        "{} failed: {}, retry {} of {} in {:?}",
                        name, e, attempt, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
