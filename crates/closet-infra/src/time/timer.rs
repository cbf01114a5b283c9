use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use closet_core::{ids::TimerId, ports::TimerPort};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

type TimerMap = Arc<Mutex<HashMap<TimerId, PendingTimer>>>;

struct PendingTimer {
    /// Distinguishes restarts of the same id.
    generation: u64,
    handle: AbortHandle,
}

/// One-shot timers backed by spawned tokio tasks.
///
/// Expired ids are sent on the channel given at construction. Dropping the
/// timer aborts everything still pending.
pub struct Timer {
    timers: TimerMap,
    next_generation: u64,
    expired_tx: mpsc::Sender<TimerId>,
}

impl Timer {
    pub fn new(expired_tx: mpsc::Sender<TimerId>) -> Self {
        Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            next_generation: 0,
            expired_tx,
        }
    }

    /// Timer plus the receiving end of its expiration channel.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<TimerId>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    pub fn is_pending(&self, timer_id: &TimerId) -> bool {
        lock(&self.timers).contains_key(timer_id)
    }
}

fn lock(timers: &TimerMap) -> std::sync::MutexGuard<'_, HashMap<TimerId, PendingTimer>> {
    timers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drops the entry for `timer_id` if it still belongs to `generation`.
///
/// A task that fired just as its id was restarted must not remove the
/// replacement's handle.
fn release(timers: &TimerMap, timer_id: &TimerId, generation: u64) -> bool {
    let mut timers = lock(timers);
    match timers.get(timer_id) {
        Some(pending) if pending.generation == generation => {
            timers.remove(timer_id);
            true
        }
        _ => false,
    }
}

#[async_trait::async_trait]
impl TimerPort for Timer {
    async fn start(&mut self, timer_id: &TimerId, delay: Duration) -> anyhow::Result<()> {
        let timers = Arc::clone(&self.timers);
        let expired_tx = self.expired_tx.clone();
        let id = timer_id.clone();
        let generation = self.next_generation;
        self.next_generation += 1;

        let mut timers_guard = lock(&self.timers);
        if let Some(existing) = timers_guard.remove(timer_id) {
            existing.handle.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if !release(&timers, &id, generation) {
                debug!(timer_id = %id, generation, "superseded timer finished; entry kept");
                return;
            }
            if expired_tx.send(id.clone()).await.is_err() {
                debug!(timer_id = %id, "timer expired with no listener");
            }
        });

        timers_guard.insert(
            timer_id.clone(),
            PendingTimer {
                generation,
                handle: handle.abort_handle(),
            },
        );
        debug!(timer_id = %timer_id, delay_ms = delay.as_millis() as u64, "timer started");
        Ok(())
    }

    async fn stop(&mut self, timer_id: &TimerId) -> anyhow::Result<()> {
        if let Some(pending) = lock(&self.timers).remove(timer_id) {
            pending.handle.abort();
            debug!(timer_id = %timer_id, "timer stopped");
        }
        Ok(())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        for (_, pending) in lock(&self.timers).drain() {
            pending.handle.abort();
        }
    }
}
