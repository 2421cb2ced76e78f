use tauri::image::Image;
use tauri::{Runtime, WebviewWindow};

use super::{ChromeError, WindowChrome};
use crate::icon::IconImage;

/// Chrome of a Tauri webview window. Does not own the window.
pub struct TauriChrome<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> TauriChrome<R> {
    pub fn new(window: WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> WindowChrome for TauriChrome<R> {
    fn set_window_icon(&self, icon: &IconImage) -> Result<(), ChromeError> {
        let image = Image::new_owned(icon.rgba().to_vec(), icon.width(), icon.height());
        self.window.set_icon(image)?;
        Ok(())
    }

    #[cfg(windows)]
    fn set_class_icon(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        super::win32::copy_window_icons_to_class(self.window.hwnd()?.0)
    }

    #[cfg(not(windows))]
    fn set_class_icon(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        Ok(())
    }

    #[cfg(windows)]
    fn refresh_taskbar(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        super::win32::refresh_taskbar_button(self.window.hwnd()?.0)
    }

    #[cfg(target_os = "macos")]
    fn refresh_taskbar(&self, icon: &IconImage) -> Result<(), ChromeError> {
        super::macos::set_dock_icon(icon.encoded())
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    fn refresh_taskbar(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        // Window managers read the taskbar icon from the window itself.
        Ok(())
    }

    #[cfg(windows)]
    fn repaint(&self) -> Result<(), ChromeError> {
        super::win32::redraw_frame(self.window.hwnd()?.0)
    }

    #[cfg(not(windows))]
    fn repaint(&self) -> Result<(), ChromeError> {
        Ok(())
    }
}
