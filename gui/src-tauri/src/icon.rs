//! Icon variant resolution and application to window chrome.
//!
//! Assets live in the bundled asset directory as `icon.<ext>` and
//! `icon_light.<ext>`, `<ext>` being `ico` on Windows and `png` elsewhere.
//! When the asset cannot be loaded, the icon compiled into the binary is used.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::chrome::WindowChrome;
use crate::prefs::PreferenceStore;

/// Native icon format of the platform, tried first.
pub const NATIVE_ICON_EXT: &str = if cfg!(windows) { "ico" } else { "png" };
const OTHER_ICON_EXT: &str = if cfg!(windows) { "png" } else { "ico" };

/// Application icon compiled into the binary.
const EMBEDDED_ICON: &[u8] = include_bytes!("../icons/icon.png");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconVariant {
    #[default]
    Default,
    Light,
}

impl IconVariant {
    pub fn from_light_flag(use_light_icon: bool) -> Self {
        if use_light_icon {
            Self::Light
        } else {
            Self::Default
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// File name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Default => "icon",
            Self::Light => "icon_light",
        }
    }
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("no {stem} icon in {}", .dir.display())]
    NotFound { stem: &'static str, dir: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode icon: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded icon: RGBA pixels for the window, encoded bytes for APIs that decode themselves.
#[derive(Debug, Clone)]
pub struct IconImage {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    encoded: Vec<u8>,
}

impl IconImage {
    /// Decodes PNG or ICO bytes.
    pub fn decode(encoded: Vec<u8>) -> Result<Self, IconError> {
        let decoded = image::load_from_memory(&encoded)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            rgba: decoded.into_raw(),
            width,
            height,
            encoded,
        })
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }
}

#[derive(Debug, Clone)]
pub struct IconAsset {
    pub variant: IconVariant,
    /// `None` when the compiled-in icon was used.
    pub path: Option<PathBuf>,
    pub image: IconImage,
}

/// Locates and loads icon assets for a variant.
#[derive(Debug, Clone)]
pub struct IconResolver {
    asset_dir: PathBuf,
    fallback: &'static [u8],
}

impl IconResolver {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            fallback: EMBEDDED_ICON,
        }
    }

    /// Replaces the compiled-in fallback icon.
    #[cfg(test)]
    pub fn with_fallback(mut self, fallback: &'static [u8]) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Path of the asset for `variant`, native format first.
    pub fn resolve(&self, variant: IconVariant) -> Option<PathBuf> {
        [NATIVE_ICON_EXT, OTHER_ICON_EXT]
            .iter()
            .map(|ext| {
                self.asset_dir
                    .join(format!("{}.{ext}", variant.file_stem()))
            })
            .find(|path| path.is_file())
    }

    fn load_from_disk(&self, variant: IconVariant) -> Result<IconAsset, IconError> {
        let path = self.resolve(variant).ok_or_else(|| IconError::NotFound {
            stem: variant.file_stem(),
            dir: self.asset_dir.clone(),
        })?;
        let bytes = fs::read(&path).map_err(|source| IconError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(IconAsset {
            variant,
            image: IconImage::decode(bytes)?,
            path: Some(path),
        })
    }

    /// Loads the asset for `variant`, falling back to the compiled-in icon.
    pub fn load(&self, variant: IconVariant) -> Result<IconAsset, IconError> {
        match self.load_from_disk(variant) {
            Ok(asset) => Ok(asset),
            Err(err) => {
                tracing::warn!(error = %err, ?variant, "icon asset unavailable, using built-in icon");
                Ok(IconAsset {
                    variant,
                    path: None,
                    image: IconImage::decode(self.fallback.to_vec())?,
                })
            }
        }
    }
}

/// Applies `variant` to the window chrome and persists it.
///
/// Returns `false` without touching the store when there is no window or no
/// loadable icon. A failed save does not change the result.
pub fn apply_icon(
    variant: IconVariant,
    chrome: Option<&dyn WindowChrome>,
    resolver: &IconResolver,
    store: &dyn PreferenceStore,
) -> bool {
    let Some(chrome) = chrome else {
        tracing::debug!(?variant, "no window attached, icon unchanged");
        return false;
    };

    let asset = match resolver.load(variant) {
        Ok(asset) => asset,
        Err(err) => {
            tracing::warn!(error = %err, ?variant, "failed to load any icon");
            return false;
        }
    };

    if let Err(err) = chrome.set_window_icon(&asset.image) {
        tracing::warn!(error = %err, ?variant, "failed to set window icon");
        return false;
    }
    if let Err(err) = chrome.set_class_icon(&asset.image) {
        tracing::warn!(error = %err, "failed to set class icon");
    }
    if let Err(err) = chrome.refresh_taskbar(&asset.image) {
        tracing::warn!(error = %err, "failed to refresh taskbar icon");
    }
    if let Err(err) = chrome.repaint() {
        tracing::warn!(error = %err, "failed to repaint window frame");
    }

    tracing::info!(variant = ?asset.variant, path = ?asset.path, "launcher icon applied");
    store.save(variant.is_light());
    true
}
