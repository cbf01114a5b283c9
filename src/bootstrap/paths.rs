use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use closet_core::config::AppConfig;

pub const APP_DIR_NAME: &str = "closet";
pub const DEFAULT_SCAN_DURATION_MS: u64 = 5000;

/// Concrete locations and timings derived from an [`AppConfig`], with
/// defaults filled in for every empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub products_path: PathBuf,
    pub logs_dir: PathBuf,
    pub scan_duration: Duration,
    pub file_logging: bool,
}

impl AppPaths {
    pub fn resolve(config: &AppConfig) -> anyhow::Result<Self> {
        let data_dir = if config.data_dir.as_os_str().is_empty() {
            dirs::data_local_dir()
                .context("Failed to locate the local data directory")?
                .join(APP_DIR_NAME)
        } else {
            config.data_dir.clone()
        };
        Ok(Self::with_data_dir(config, data_dir))
    }

    pub fn with_data_dir(config: &AppConfig, data_dir: PathBuf) -> Self {
        let products_path = if config.products_path.as_os_str().is_empty() {
            data_dir.join("products.json")
        } else {
            config.products_path.clone()
        };
        let scan_duration_ms = match config.scan_duration_ms {
            0 => DEFAULT_SCAN_DURATION_MS,
            ms => ms,
        };

        Self {
            logs_dir: data_dir.join("logs"),
            products_path,
            scan_duration: Duration::from_millis(scan_duration_ms),
            file_logging: config.file_logging,
            data_dir,
        }
    }
}
