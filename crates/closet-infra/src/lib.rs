pub mod catalog;
pub mod onboarding_flag;
pub mod time;

pub use catalog::JsonCatalogSource;
pub use onboarding_flag::FileOnboardingFlagStore;
pub use time::Timer;
