//! # Configuration Loader
//!
//! Reads the TOML file and maps it to [`AppConfig`]. Pure data loading:
//! no validation and no defaults. Defaults are applied by [`super::paths`].

use anyhow::Context;
use closet_core::config::AppConfig;
use std::path::Path;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [catalog]
            products_path = "/srv/closet/products.json"

            [storage]
            data_dir = "/srv/closet/data"

            [onboarding]
            scan_duration_ms = 1500

            [logging]
            file_logging = true
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.products_path,
            PathBuf::from("/srv/closet/products.json")
        );
        assert_eq!(config.data_dir, PathBuf::from("/srv/closet/data"));
        assert_eq!(config.scan_duration_ms, 1500);
        assert!(config.file_logging);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let file = write_config("[catalog]\n# products_path is missing\n");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let file = write_config("[catalog\nproducts_path = ");

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_fails_on_missing_file() {
        let err = load_config(Path::new("/nonexistent/closet/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
