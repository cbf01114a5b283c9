//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of a scanned receipt item in the onboarding review list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScannedItemId(String);

/// Identifier of a scheduled one-shot timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(String);

impl_id!(ScannedItemId, TimerId);

impl TimerId {
    /// Timer that drives the scanning step's auto-advance. Every visit to
    /// the step uses a new generation so stale expirations can be told apart.
    pub fn scan(generation: u64) -> Self {
        Self(format!("onboarding-scan-{generation}"))
    }
}
