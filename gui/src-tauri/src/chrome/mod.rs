//! Native window chrome: title-bar icon, class default icon, taskbar/dock.
//!
//! `WindowChrome` is the only seam where windowing APIs differ per OS. The
//! icon applier and the channel logic only see this trait.

mod tauri_window;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod win32;

pub use tauri_window::TauriChrome;

use thiserror::Error;

use crate::icon::IconImage;

#[derive(Debug, Error)]
pub enum ChromeError {
    #[error("window error: {0}")]
    Window(#[from] tauri::Error),
    #[error("platform call failed: {0}")]
    Platform(String),
}

pub trait WindowChrome {
    /// Title-bar icon, both small and large representations.
    fn set_window_icon(&self, icon: &IconImage) -> Result<(), ChromeError>;

    /// Default icon for new windows of the same class.
    fn set_class_icon(&self, icon: &IconImage) -> Result<(), ChromeError>;

    /// Forces the taskbar/dock to drop any cached icon.
    fn refresh_taskbar(&self, icon: &IconImage) -> Result<(), ChromeError>;

    /// Repaints the non-client area.
    fn repaint(&self) -> Result<(), ChromeError>;
}
