//! Business logic use cases
//!
//! ```text
//! [CatalogSourcePort]  → LoadCatalog → CatalogSession → ClosetSnapshot
//! [OnboardingFlagPort] → GetOnboardingStatus / CompleteOnboarding / ResetOnboarding
//! IntroTourSession     → CompleteOnboarding (on finish or skip)
//! [TimerPort] expiry   → OnboardingOrchestrator → [OnboardingEventPort]
//! ```

pub mod catalog;
pub mod onboarding;
