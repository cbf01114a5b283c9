//! Onboarding domain models
//!
//! This module defines the core domain models for the onboarding wizard,
//! which walks a new user through connecting a mailbox, a simulated
//! receipt scan, sizing details and the review of scanned items.

pub mod details;
pub mod provider;
pub mod scanned_item;
pub mod state;
pub mod state_machine;
pub mod step;
pub mod tour;

pub use details::{Gender, PersonalDetails, PersonalDetailsPatch, SizeOptions};
pub use provider::EmailProvider;
pub use scanned_item::{demo_scanned_items, ItemCategory, ScannedItem};
pub use state::{CategoryCount, ConfirmationSummary, OnboardingState};
pub use state_machine::{OnboardingAction, OnboardingEvent, OnboardingExit, OnboardingStateMachine};
pub use step::{OnboardingStep, StepProgress, STEP_ORDER};
pub use tour::{IntroTour, TourOutcome, TourSlide};

/// Durable key holding the completion flag. The value is `"true"` when
/// onboarding is complete; the key is absent otherwise.
pub const ONBOARDING_COMPLETED_KEY: &str = "closet-onboarding-completed";
