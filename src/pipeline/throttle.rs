//! Fixed-interval rate gate for catalog requests.
//!
//! The catalog's rate limit is undocumented; staying under it relies on a
//! minimum gap between consecutive requests. The gate lives here instead
//! of inside the client so pacing stays testable and swappable. Do not
//! parallelize catalog calls around it.

use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum interval between consecutive `wait` calls.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    next_allowed: Option<Instant>,
}

impl Throttle {
    /// Create a gate with the given minimum interval. Zero disables it.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_allowed: None,
        }
    }

    /// Sleep until the interval since the previous call has elapsed.
    /// The first call never sleeps.
    pub async fn wait(&mut self) {
        if let Some(at) = self.next_allowed {
            tokio::time::sleep_until(at).await;
        }
        self.next_allowed = Some(Instant::now() + self.interval);
    }
}
