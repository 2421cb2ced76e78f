//! Flat-file preference store under the per-user config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, PrefsError};
use crate::config::ShellConfig;

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    file: Option<PathBuf>,
}

impl FilePreferenceStore {
    /// Store keeping `file_name` inside `dir`. The directory is created on first save.
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            file: Some(dir.as_ref().join(file_name)),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        match config.preference_dir() {
            Some(dir) => Self::new(dir, &config.preference_file),
            None => Self { file: None },
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn read(&self) -> Result<Option<bool>, PrefsError> {
        let file = self.file.as_ref().ok_or(PrefsError::NoConfigDir)?;
        match fs::read_to_string(file) {
            Ok(raw) => Ok(Some(raw.trim() == "1")),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, use_light_icon: bool) -> Result<(), PrefsError> {
        let file = self.file.as_ref().ok_or(PrefsError::NoConfigDir)?;
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }

        // Replace the whole value in one rename so readers never see a partial file.
        let staged = file.with_extension("tmp");
        fs::write(&staged, if use_light_icon { "1" } else { "0" })?;
        fs::rename(&staged, file)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> bool {
        match self.read() {
            Ok(Some(value)) => value,
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, path = ?self.file, "failed to load icon preference");
                false
            }
        }
    }

    fn save(&self, use_light_icon: bool) -> bool {
        match self.write(use_light_icon) {
            Ok(()) => {
                tracing::debug!(use_light_icon, path = ?self.file, "saved icon preference");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, path = ?self.file, "failed to save icon preference");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.join("bettbox"), "icon_preference")
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(!store.load());
        assert!(!dir.path().join("bettbox").exists());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.save(true));
        assert!(store.load());
        let raw = fs::read_to_string(dir.path().join("bettbox/icon_preference")).unwrap();
        assert_eq!(raw, "1");

        assert!(store.save(false));
        assert!(!store.load());
        let raw = fs::read_to_string(dir.path().join("bettbox/icon_preference")).unwrap();
        assert_eq!(raw, "0");
    }

    #[test]
    fn unexpected_contents_load_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::create_dir_all(dir.path().join("bettbox")).unwrap();
        fs::write(dir.path().join("bettbox/icon_preference"), "yes").unwrap();
        assert!(!store.load());
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::create_dir_all(dir.path().join("bettbox")).unwrap();
        fs::write(dir.path().join("bettbox/icon_preference"), "1\n").unwrap();
        assert!(store.load());
    }

    #[test]
    fn unwritable_location_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be.
        let blocker = dir.path().join("bettbox");
        fs::write(&blocker, "not a directory").unwrap();

        let store = store_in(dir.path());
        assert!(!store.save(true));
        assert!(!store.load());
    }

    #[test]
    fn store_without_config_dir_degrades() {
        let config = ShellConfig {
            config_dir: None,
            ..ShellConfig::new(Path::new("/opt/bettbox"))
        };
        let store = FilePreferenceStore::from_config(&config);
        assert!(store.path().is_none());
        assert!(!store.save(true));
        assert!(!store.load());
    }
}
