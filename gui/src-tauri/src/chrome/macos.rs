use objc2::AllocAnyThread;
use objc2_app_kit::{NSApplication, NSImage};
use objc2_foundation::{MainThreadMarker, NSData};

use super::ChromeError;

/// Replaces the dock icon with the given encoded image.
pub(super) fn set_dock_icon(encoded: &[u8]) -> Result<(), ChromeError> {
    let mtm = MainThreadMarker::new().ok_or_else(|| {
        ChromeError::Platform("dock icon must be set from the main thread".to_string())
    })?;
    let data = NSData::with_bytes(encoded);
    let image = NSImage::initWithData(NSImage::alloc(), &data)
        .ok_or_else(|| ChromeError::Platform("dock icon bytes are not an image".to_string()))?;
    let app = NSApplication::sharedApplication(mtm);
    unsafe { app.setApplicationIconImage(Some(&image)) };
    Ok(())
}
