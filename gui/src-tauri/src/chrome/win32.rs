//! Win32 chrome operations on a raw window handle.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, WPARAM};
use windows::Win32::Graphics::Gdi::{
    RedrawWindow, RDW_ALLCHILDREN, RDW_FRAME, RDW_INVALIDATE, RDW_UPDATENOW,
};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_INPROC_SERVER};
use windows::Win32::UI::Shell::{ITaskbarList3, TaskbarList};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageW, SetClassLongPtrW, GCLP_HICON, GCLP_HICONSM, ICON_BIG, ICON_SMALL, WM_GETICON,
};

use super::ChromeError;

fn platform(err: windows::core::Error) -> ChromeError {
    ChromeError::Platform(err.to_string())
}

/// Copies the icons already set on the window (WM_SETICON) onto its class.
pub(super) fn copy_window_icons_to_class(raw: *mut c_void) -> Result<(), ChromeError> {
    let hwnd = HWND(raw);
    unsafe {
        let big = SendMessageW(hwnd, WM_GETICON, Some(WPARAM(ICON_BIG as usize)), None).0;
        let small = SendMessageW(hwnd, WM_GETICON, Some(WPARAM(ICON_SMALL as usize)), None).0;
        if big == 0 && small == 0 {
            return Err(ChromeError::Platform(
                "window has no icon to copy to its class".to_string(),
            ));
        }
        if big != 0 {
            let _ = SetClassLongPtrW(hwnd, GCLP_HICON, big);
        }
        // Windows derives the small icon from the big one when none is set.
        let _ = SetClassLongPtrW(hwnd, GCLP_HICONSM, if small != 0 { small } else { big });
    }
    Ok(())
}

/// Re-adds the taskbar button so the shell drops its cached icon.
pub(super) fn refresh_taskbar_button(raw: *mut c_void) -> Result<(), ChromeError> {
    let hwnd = HWND(raw);
    unsafe {
        let taskbar: ITaskbarList3 =
            CoCreateInstance(&TaskbarList, None, CLSCTX_INPROC_SERVER).map_err(platform)?;
        taskbar.HrInit().map_err(platform)?;
        taskbar.AddTab(hwnd).map_err(platform)?;
        taskbar.DeleteTab(hwnd).map_err(platform)?;
        taskbar.AddTab(hwnd).map_err(platform)?;
    }
    Ok(())
}

pub(super) fn redraw_frame(raw: *mut c_void) -> Result<(), ChromeError> {
    let hwnd = HWND(raw);
    let redrawn = unsafe {
        RedrawWindow(
            Some(hwnd),
            None,
            None,
            RDW_INVALIDATE | RDW_FRAME | RDW_UPDATENOW | RDW_ALLCHILDREN,
        )
    };
    if redrawn.as_bool() {
        Ok(())
    } else {
        Err(ChromeError::Platform("RedrawWindow failed".to_string()))
    }
}

