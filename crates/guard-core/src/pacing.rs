use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Wait inserted between sequential ingredient lookups
#[async_trait]
pub trait Pacing: Send + Sync {
    async fn pause(&self);
}

pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacing for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

pub struct NoPacing;

#[async_trait]
impl Pacing for NoPacing {
    async fn pause(&self) {}
}

/// Pacing for a configured delay, 0 means none
pub fn from_millis(ms: u64) -> Arc<dyn Pacing> {
    if ms == 0 {
        Arc::new(NoPacing)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_waits() {
        let start = tokio::time::Instant::now();
        FixedDelay(Duration::from_millis(1000)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_means_no_pacing() {
        let start = tokio::time::Instant::now();
        from_millis(0).pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
