use std::sync::Arc;

use closet_core::onboarding::OnboardingState;
use tokio::sync::Mutex;

/// Shared wizard context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
#[derive(Clone)]
pub struct OnboardingContext {
    state: Arc<Mutex<OnboardingState>>,
    /// Serializes transition + actions + state update. Not taken by reads.
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new(OnboardingState::default())
    }
}

impl OnboardingContext {
    pub fn new(initial_state: OnboardingState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> OnboardingState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Only call while holding the dispatch lock.
    pub async fn set_state(&self, state: OnboardingState) {
        *self.state.lock().await = state;
    }
}
