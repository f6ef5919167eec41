//! Application state: the directory service wired to its in-memory stores.

use swapwise_core::service::Directory;
use swapwise_infra::config::{default_data_dir, load_platform_config};
use swapwise_infra::memory::{MemoryAccountStore, MemoryRequestStore};
use swapwise_types::config::PlatformConfig;

/// The concrete directory this binary runs against.
pub type PlatformDirectory = Directory<MemoryAccountStore, MemoryRequestStore>;

pub struct AppState {
    pub directory: PlatformDirectory,
    pub config: PlatformConfig,
}

impl AppState {
    /// Build the platform: load config, create the stores, register the
    /// bootstrap administrator, and (by default) seed the sample community.
    pub fn init() -> anyhow::Result<Self> {
        let data_dir = default_data_dir();
        let config = load_platform_config(&data_dir);

        let mut directory =
            Directory::new(MemoryAccountStore::new(), MemoryRequestStore::new());
        directory.register_admin(
            &config.bootstrap.name,
            &config.bootstrap.email,
            &config.bootstrap.secret,
        )?;

        if config.seed_demo_data {
            crate::seed::populate(&mut directory)?;
            tracing::debug!("seeded demo community");
        }

        Ok(Self { directory, config })
    }
}
