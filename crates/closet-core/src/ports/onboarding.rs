//! Onboarding completion flag port
//!
//! This port defines the contract for persisting and retrieving the single
//! "onboarding completed" flag. Implementations are provided by the
//! infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

#[async_trait]
pub trait OnboardingFlagPort: Send + Sync {
    /// Whether onboarding has been completed. An absent flag reads as false.
    async fn read(&self) -> anyhow::Result<bool>;

    /// `true` stores the flag; `false` clears it entirely.
    async fn write(&self, completed: bool) -> anyhow::Result<()>;
}
