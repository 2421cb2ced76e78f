//! Registry preference store (`HKEY_CURRENT_USER`).

use std::io::ErrorKind;

use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
use winreg::RegKey;

use super::{PreferenceStore, PrefsError};

#[derive(Debug, Clone)]
pub struct RegistryPreferenceStore {
    key_path: String,
    value_name: String,
}

impl RegistryPreferenceStore {
    pub fn new(key_path: &str, value_name: &str) -> Self {
        Self {
            key_path: key_path.to_string(),
            value_name: value_name.to_string(),
        }
    }

    fn read(&self) -> Result<Option<bool>, PrefsError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = match hkcu.open_subkey_with_flags(&self.key_path, KEY_READ) {
            Ok(key) => key,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match key.get_value::<u32, _>(&self.value_name) {
            Ok(value) => Ok(Some(value != 0)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, use_light_icon: bool) -> Result<(), PrefsError> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (key, _) = hkcu.create_subkey(&self.key_path)?;
        key.set_value(&self.value_name, &u32::from(use_light_icon))?;
        Ok(())
    }
}

impl PreferenceStore for RegistryPreferenceStore {
    fn load(&self) -> bool {
        match self.read() {
            Ok(value) => value.unwrap_or(false),
            Err(err) => {
                tracing::warn!(error = %err, key = %self.key_path, "failed to load icon preference");
                false
            }
        }
    }

    fn save(&self, use_light_icon: bool) -> bool {
        match self.write(use_light_icon) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, key = %self.key_path, "failed to save icon preference");
                false
            }
        }
    }
}
