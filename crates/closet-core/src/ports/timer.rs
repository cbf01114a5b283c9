use std::time::Duration;

use crate::ids::TimerId;

/// One-shot timers keyed by id.
///
/// Starting an id that is already running replaces it. Expirations are
/// reported by the implementation to whoever it was built with.
#[async_trait::async_trait]
pub trait TimerPort: Send {
    async fn start(&mut self, timer_id: &TimerId, delay: Duration) -> anyhow::Result<()>;
    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()>;
}
