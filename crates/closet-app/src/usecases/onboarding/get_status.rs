use std::sync::Arc;

use closet_core::ports::OnboardingFlagPort;

use super::OnboardingStatusDto;

/// Use case for reading whether onboarding has been completed.
pub struct GetOnboardingStatus {
    flag: Arc<dyn OnboardingFlagPort>,
}

impl GetOnboardingStatus {
    pub fn new(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { flag }
    }

    pub fn from_ports(flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self::new(flag)
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingStatusDto> {
        Ok(OnboardingStatusDto {
            has_completed: self.flag.read().await?,
        })
    }
}
