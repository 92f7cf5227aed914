use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Page conventions the core needs: where to find the comparable fields and
/// how long a toast lives. Implemented by both config front-ends.
pub trait StoreOptions: Send + Sync {
    fn currency_symbol(&self) -> &str;
    fn price_class(&self) -> &str;
    fn name_class(&self) -> &str;
    fn hidden_class(&self) -> &str;
    fn toast_visible(&self) -> Duration;
    fn toast_fade(&self) -> Duration;
}

/// Time source for the toast timetable. Tests substitute a fixed origin and
/// feed synthetic instants instead of waiting on the wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Suspension point for the async toast driver.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
