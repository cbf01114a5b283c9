//! File-based onboarding completion flag
//!
//! Persists the flag as one entry of a small JSON key/value document in
//! the application data directory. Other entries in the same document are
//! left untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use closet_core::onboarding::ONBOARDING_COMPLETED_KEY;
use closet_core::ports::OnboardingFlagPort;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const DEFAULT_ONBOARDING_FLAG_FILE: &str = "onboarding.json";

const COMPLETED_VALUE: &str = "true";

pub struct FileOnboardingFlagStore {
    path: PathBuf,
}

impl FileOnboardingFlagStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_ONBOARDING_FLAG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_entries(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse onboarding flag file: {}", e))
    }

    async fn save_entries(&self, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| anyhow::anyhow!("Failed to serialize onboarding flag file: {}", e))?;

        let mut file = fs::File::create(&self.path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create onboarding flag file: {}", e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write onboarding flag file: {}", e))?;
        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync onboarding flag file: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl OnboardingFlagPort for FileOnboardingFlagStore {
    async fn read(&self) -> anyhow::Result<bool> {
        let entries = self.load_entries().await?;
        Ok(entries
            .get(ONBOARDING_COMPLETED_KEY)
            .is_some_and(|value| value == COMPLETED_VALUE))
    }

    async fn write(&self, completed: bool) -> anyhow::Result<()> {
        let mut entries = self.load_entries().await?;
        if completed {
            entries.insert(
                ONBOARDING_COMPLETED_KEY.to_string(),
                COMPLETED_VALUE.to_string(),
            );
        } else if entries.remove(ONBOARDING_COMPLETED_KEY).is_none() {
            return Ok(());
        }

        self.save_entries(&entries).await?;
        debug!(path = %self.path.display(), completed, "onboarding flag written");
        Ok(())
    }
}
