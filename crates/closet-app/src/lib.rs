//! Closet Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod usecases;

pub use usecases::catalog::{CatalogSession, ClosetSnapshot, LoadCatalog};
pub use usecases::onboarding::{
    CompleteOnboarding, GetOnboardingStatus, IntroTourSession, OnboardingError,
    OnboardingOrchestrator, ResetOnboarding,
};
