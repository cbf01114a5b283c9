//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod catalog;
pub mod onboarding;
pub mod onboarding_event;
mod timer;

pub use catalog::CatalogSourcePort;
pub use onboarding::OnboardingFlagPort;
pub use onboarding_event::OnboardingEventPort;
pub use timer::TimerPort;
