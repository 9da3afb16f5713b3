//! Pacing between detail page requests.

use std::future::Future;
use std::time::Duration;

/// Pause inserted before every detail fetch.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Waits before each request. The exporter awaits it once per map, so at
/// most one request is ever in flight.
pub trait Throttle {
    fn wait(&mut self) -> impl Future<Output = ()> + Send;
}

/// Sleep for a fixed interval, regardless of how the server responds.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Throttle for FixedDelay {
    async fn wait(&mut self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// No pause at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Throttle for NoDelay {
    async fn wait(&mut self) {}
}
