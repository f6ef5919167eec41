//! Platform configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.swapwise/` in
//! production) and deserializes it into [`PlatformConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use swapwise_types::config::PlatformConfig;

/// The platform data directory: `~/.swapwise`, or `.swapwise` in the current
/// directory when no home directory is available.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".swapwise")
}

/// Load platform configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`PlatformConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub fn load_platform_config(data_dir: &Path) -> PlatformConfig {
    let config_path = data_dir.join("config.toml");

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return PlatformConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return PlatformConfig::default();
        }
    };

    match toml::from_str::<PlatformConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            PlatformConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_platform_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_platform_config(tmp.path());
        assert_eq!(config.default_page_size, 10);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn load_platform_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            r#"
default_page_size = 4
recent_feedback_count = 2
seed_demo_data = false

[bootstrap]
email = "root@swapwise.dev"
"#,
        )
        .unwrap();

        let config = load_platform_config(tmp.path());
        assert_eq!(config.default_page_size, 4);
        assert_eq!(config.recent_feedback_count, 2);
        assert!(!config.seed_demo_data);
        assert_eq!(config.bootstrap.email, "root@swapwise.dev");
        // Unspecified bootstrap fields keep their defaults.
        assert_eq!(config.bootstrap.name, "Platform Admin");
    }

    #[test]
    fn load_platform_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!").unwrap();

        let config = load_platform_config(tmp.path());
        assert_eq!(config.default_page_size, 10);
    }
}
