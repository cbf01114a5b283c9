//! # closet-core
//!
//! Core domain models and business logic for Closet.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ids;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{Closet, FilterDimension, FilterState, Price, Product, SortDirection, SortKey, SortSpec};
pub use config::AppConfig;
pub use ids::{ScannedItemId, TimerId};
pub use onboarding::{OnboardingState, OnboardingStep, ONBOARDING_COMPLETED_KEY};
