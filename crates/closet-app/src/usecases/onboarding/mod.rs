//! Onboarding use cases
//!
//! This module contains use cases for the onboarding wizard: reading,
//! setting and clearing the persisted completion flag, the orchestrator
//! that drives the wizard session, and the intro tour.

pub mod complete;
pub mod context;
pub mod get_status;
pub mod intro_tour;
pub mod orchestrator;
pub mod reset;

pub use complete::CompleteOnboarding;
pub use context::OnboardingContext;
pub use get_status::GetOnboardingStatus;
pub use intro_tour::IntroTourSession;
pub use orchestrator::{OnboardingError, OnboardingOrchestrator};
pub use reset::ResetOnboarding;

/// Data transfer object for the persisted onboarding flag
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OnboardingStatusDto {
    pub has_completed: bool,
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use closet_core::ports::OnboardingFlagPort;

    /// In-memory flag store. `None` models an absent key.
    pub struct MockOnboardingFlagPort {
        pub value: Mutex<Option<bool>>,
        pub fail_writes: bool,
    }

    impl MockOnboardingFlagPort {
        pub fn new(value: Option<bool>) -> Self {
            Self {
                value: Mutex::new(value),
                fail_writes: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                value: Mutex::new(None),
                fail_writes: true,
            }
        }

        pub fn stored(&self) -> Option<bool> {
            *self.value.lock().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl OnboardingFlagPort for MockOnboardingFlagPort {
        async fn read(&self) -> anyhow::Result<bool> {
            Ok(self.value.lock().unwrap().unwrap_or(false))
        }

        async fn write(&self, completed: bool) -> anyhow::Result<()> {
            if self.fail_writes {
                anyhow::bail!("disk full");
            }
            *self.value.lock().unwrap() = completed.then_some(true);
            Ok(())
        }
    }
}
