use std::sync::Arc;

use closet_core::ports::OnboardingFlagPort;
use tracing::info;

/// Use case for resetting onboarding so the wizard shows again.
///
/// Removes the flag entirely rather than storing `false`.
pub struct ResetOnboarding {
    flag: Arc<dyn OnboardingFlagPort>,
}

impl ResetOnboarding {
    pub fn new(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { flag }
    }

    pub fn from_ports(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self::new(flag)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.flag.write(false).await?;
        info!("onboarding reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::onboarding::test_support::MockOnboardingFlagPort;
    use crate::usecases::onboarding::CompleteOnboarding;

    #[tokio::test]
    async fn test_reset_clears_the_flag() {
        let mock = Arc::new(MockOnboardingFlagPort::new(Some(true)));
        ResetOnboarding::new(mock.clone()).execute().await.unwrap();

        assert_eq!(mock.stored(), None);
        assert!(!mock.read().await.unwrap());
    }

    #[tokio::test]
    async fn test_complete_then_reset_round_trip() {
        let mock = Arc::new(MockOnboardingFlagPort::new(None));
        let complete = CompleteOnboarding::from_ports(mock.clone());
        let reset = ResetOnboarding::from_ports(mock.clone());

        complete.execute().await.unwrap();
        assert!(mock.read().await.unwrap());

        reset.execute().await.unwrap();
        assert!(!mock.read().await.unwrap());
    }
}
