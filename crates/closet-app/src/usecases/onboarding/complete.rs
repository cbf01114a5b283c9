use std::sync::Arc;

use closet_core::ports::OnboardingFlagPort;
use tracing::info;

/// Use case for completing onboarding.
///
/// Stores the durable completion flag so later launches skip the wizard.
pub struct CompleteOnboarding {
    flag: Arc<dyn OnboardingFlagPort>,
}

impl CompleteOnboarding {
    pub fn new(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { flag }
    }

    /// Convenience constructor for the use case accessor pattern.
    pub fn from_ports(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self::new(flag)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.flag.write(true).await?;
        info!("onboarding marked complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::onboarding::test_support::MockOnboardingFlagPort;

    #[tokio::test]
    async fn test_execute_marks_onboarding_as_complete() {
        let mock = Arc::new(MockOnboardingFlagPort::new(None));
        let use_case = CompleteOnboarding::new(mock.clone());

        assert!(!mock.read().await.unwrap());
        use_case.execute().await.unwrap();
        assert!(mock.read().await.unwrap());
    }

    #[tokio::test]
    async fn test_execute_when_already_completed() {
        let mock = Arc::new(MockOnboardingFlagPort::new(Some(true)));
        let use_case = CompleteOnboarding::from_ports(mock.clone());

        use_case.execute().await.unwrap();
        assert_eq!(mock.stored(), Some(true));
    }

    #[tokio::test]
    async fn test_execute_propagates_write_failure() {
        let mock = Arc::new(MockOnboardingFlagPort::failing());
        let use_case = CompleteOnboarding::new(mock);

        let err = use_case.execute().await.unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }
}
