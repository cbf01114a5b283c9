use crate::onboarding::{OnboardingExit, OnboardingStep};

/// Signals from the onboarding wizard to its host screen.
#[async_trait::async_trait]
pub trait OnboardingEventPort: Send + Sync {
    async fn emit_step_changed(&self, step: OnboardingStep);

    /// The wizard is done; the host should navigate to `exit.target()`.
    async fn emit_exit(&self, exit: OnboardingExit);
}
