//! Runner configuration.
//!
//! Fixed names for the persisted preference and the bundled icon assets, plus
//! two environment overrides:
//! - `BETTBOX_ASSET_DIR`: directory holding `icon.*` / `icon_light.*`
//! - `BETTBOX_CONFIG_DIR`: user config root used by the file preference store

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Application name; the registry key is named after it.
pub const APP_NAME: &str = "Bettbox";
/// Label of the window created from `tauri.conf.json`.
pub const MAIN_WINDOW_LABEL: &str = "main";

const ASSET_DIR_ENV: &str = "BETTBOX_ASSET_DIR";
const CONFIG_DIR_ENV: &str = "BETTBOX_CONFIG_DIR";

/// Icon assets, relative to the bundle's resource directory (see `bundle.resources`).
const ASSET_SUBDIR: [&str; 2] = ["assets", "images"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Per-user config subdirectory for the file store.
    pub config_subdir: String,
    /// File name of the flat preference file.
    pub preference_file: String,
    /// Registry key under `HKEY_CURRENT_USER`.
    pub registry_key: String,
    /// Registry value name (REG_DWORD).
    pub registry_value: String,
    /// Directory the icon resolver searches.
    pub asset_dir: PathBuf,
    /// Root of the per-user config directories, `None` when it cannot be resolved.
    pub config_dir: Option<PathBuf>,
}

impl ShellConfig {
    /// Defaults for an install whose bundled resources live in `resource_dir`,
    /// as reported by `PathResolver::resource_dir`.
    pub fn new(resource_dir: &Path) -> Self {
        Self {
            config_subdir: "bettbox".to_string(),
            preference_file: "icon_preference".to_string(),
            registry_key: format!("Software\\{APP_NAME}"),
            registry_value: "UseLightIcon".to_string(),
            asset_dir: ASSET_SUBDIR
                .iter()
                .fold(resource_dir.to_path_buf(), |dir, part| dir.join(part)),
            config_dir: dirs::config_dir(),
        }
    }

    /// Defaults with the process environment applied.
    pub fn from_env(resource_dir: &Path) -> Self {
        Self::new(resource_dir).with_overrides(|key| std::env::var_os(key))
    }

    /// Applies overrides read through `lookup`. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let env_path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);

        if let Some(dir) = env_path(ASSET_DIR_ENV) {
            self.asset_dir = dir;
        }
        if let Some(dir) = env_path(CONFIG_DIR_ENV) {
            self.config_dir = Some(dir);
        }
        self
    }

    /// Directory holding the flat preference file.
    pub fn preference_dir(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|root| root.join(&self.config_subdir))
    }
}
