//! Configuration types for the Swapwise platform.
//!
//! `PlatformConfig` represents the top-level `config.toml` controlling page
//! sizes, demo seeding, and the bootstrap administrator. All fields have
//! sensible defaults so a missing file is never an error.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Swapwise platform.
///
/// Loaded from `~/.swapwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Page size used when listing public profiles without an explicit size.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// How many recent feedback entries profile views show.
    #[serde(default = "default_recent_feedback_count")]
    pub recent_feedback_count: usize,

    /// Whether to populate the directory with the sample community at start.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// The administrator account created at platform bootstrap.
    #[serde(default)]
    pub bootstrap: BootstrapAdmin,
}

fn default_page_size() -> usize {
    10
}

fn default_recent_feedback_count() -> usize {
    3
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            recent_feedback_count: default_recent_feedback_count(),
            seed_demo_data: default_seed_demo_data(),
            bootstrap: BootstrapAdmin::default(),
        }
    }
}

/// Identity of the administrator account seeded at bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    #[serde(default = "default_admin_name")]
    pub name: String,

    #[serde(default = "default_admin_email")]
    pub email: String,

    #[serde(default = "default_admin_secret")]
    pub secret: String,
}

fn default_admin_name() -> String {
    "Platform Admin".to_string()
}

fn default_admin_email() -> String {
    "admin@swapwise.dev".to_string()
}

fn default_admin_secret() -> String {
    "admin123".to_string()
}

impl Default for BootstrapAdmin {
    fn default() -> Self {
        Self {
            name: default_admin_name(),
            email: default_admin_email(),
            secret: default_admin_secret(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_config_default_values() {
        let config = PlatformConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.recent_feedback_count, 3);
        assert!(config.seed_demo_data);
        assert_eq!(config.bootstrap.email, "admin@swapwise.dev");
    }

    #[test]
    fn test_platform_config_deserialize_empty_uses_defaults() {
        let config: PlatformConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_page_size, 10);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_platform_config_deserialize_with_values() {
        let toml_str = r#"
default_page_size = 25
seed_demo_data = false

[bootstrap]
name = "Root"
email = "root@swapwise.dev"
secret = "hunter2"
"#;
        let config: PlatformConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.recent_feedback_count, 3);
        assert!(!config.seed_demo_data);
        assert_eq!(config.bootstrap.name, "Root");
        assert_eq!(config.bootstrap.secret, "hunter2");
    }

    #[test]
    fn test_platform_config_serde_roundtrip() {
        let config = PlatformConfig {
            default_page_size: 5,
            recent_feedback_count: 2,
            seed_demo_data: false,
            bootstrap: BootstrapAdmin::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PlatformConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_page_size, 5);
        assert_eq!(parsed.recent_feedback_count, 2);
    }
}
