//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//! ❌ **No default value calculation**
//!
//! ## Iron Rule
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Bundled product feed (path info only, no existence check)
    pub products_path: PathBuf,

    /// Directory for the onboarding flag and logs (may be empty)
    pub data_dir: PathBuf,

    /// Scanning step duration in milliseconds (0 when missing)
    pub scan_duration_ms: u64,

    /// Whether to also write logs to a file
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            products_path: PathBuf::from(
                toml_value
                    .get("catalog")
                    .and_then(|c| c.get("products_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            scan_duration_ms: toml_value
                .get("onboarding")
                .and_then(|o| o.get("scan_duration_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }
}
