//! Persisted icon preference.
//!
//! One boolean, `true` meaning the light icon. Storage differs per OS:
//! - Windows: `HKCU\Software\Bettbox` value `UseLightIcon` (REG_DWORD)
//! - elsewhere: `<config dir>/bettbox/icon_preference` containing `0` or `1`
//!
//! Failures never reach the caller: `load` degrades to `false`, `save`
//! reports `false`, and both log.

mod file;
#[cfg(windows)]
mod registry;

pub use file::FilePreferenceStore;
#[cfg(windows)]
pub use registry::RegistryPreferenceStore;

use thiserror::Error;

use crate::config::ShellConfig;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("user config directory is unavailable")]
    NoConfigDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable store for the light-icon flag. No in-memory state.
pub trait PreferenceStore: Send + Sync {
    /// Last persisted flag, `false` when absent or unreadable.
    fn load(&self) -> bool;

    /// Persists the flag, creating parent containers. Returns `false` on failure.
    fn save(&self, use_light_icon: bool) -> bool;
}

/// Store for the current platform.
#[cfg(windows)]
pub fn platform_store(config: &ShellConfig) -> Box<dyn PreferenceStore> {
    Box::new(RegistryPreferenceStore::new(
        &config.registry_key,
        &config.registry_value,
    ))
}

/// Store for the current platform.
#[cfg(not(windows))]
pub fn platform_store(config: &ShellConfig) -> Box<dyn PreferenceStore> {
    Box::new(FilePreferenceStore::from_config(config))
}
