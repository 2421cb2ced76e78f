//! Fakes for window chrome and preference storage.

use std::cell::RefCell;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::chrome::{ChromeError, WindowChrome};
use crate::icon::IconImage;
use crate::prefs::PreferenceStore;

/// Writes a small solid-colour icon as `<stem>.<ext>`.
pub fn write_icon(dir: &Path, stem: &str, ext: &str, rgba: [u8; 4]) {
    let image = image::RgbaImage::from_pixel(16, 16, image::Rgba(rgba));
    image
        .save(dir.join(format!("{stem}.{ext}")))
        .expect("write test icon");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeCall {
    WindowIcon,
    ClassIcon,
    Taskbar,
    Repaint,
}

#[derive(Debug, Default)]
pub struct FakeChrome {
    calls: RefCell<Vec<ChromeCall>>,
    fail_window_icon: bool,
    fail_taskbar: bool,
}

impl FakeChrome {
    pub fn failing_window_icon() -> Self {
        Self {
            fail_window_icon: true,
            ..Self::default()
        }
    }

    pub fn failing_taskbar() -> Self {
        Self {
            fail_taskbar: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ChromeCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ChromeCall, fail: bool) -> Result<(), ChromeError> {
        self.calls.borrow_mut().push(call);
        if fail {
            Err(ChromeError::Platform(format!("{call:?} rejected")))
        } else {
            Ok(())
        }
    }
}

impl WindowChrome for FakeChrome {
    fn set_window_icon(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        self.record(ChromeCall::WindowIcon, self.fail_window_icon)
    }

    fn set_class_icon(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        self.record(ChromeCall::ClassIcon, false)
    }

    fn refresh_taskbar(&self, _icon: &IconImage) -> Result<(), ChromeError> {
        self.record(ChromeCall::Taskbar, self.fail_taskbar)
    }

    fn repaint(&self) -> Result<(), ChromeError> {
        self.record(ChromeCall::Repaint, false)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: Mutex<Option<bool>>,
    saves: AtomicUsize,
    fail_saves: bool,
}

/// In-memory store; clones share state so tests can inspect it after handing one off.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

impl MemoryStore {
    pub fn with_value(use_light_icon: bool) -> Self {
        let store = Self::default();
        *store.inner.value.lock().unwrap() = Some(use_light_icon);
        store
    }

    pub fn failing() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                fail_saves: true,
                ..MemoryInner::default()
            }),
        }
    }

    /// Successful saves so far.
    pub fn saves(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> bool {
        self.inner.value.lock().unwrap().unwrap_or(false)
    }

    fn save(&self, use_light_icon: bool) -> bool {
        if self.inner.fail_saves {
            return false;
        }
        *self.inner.value.lock().unwrap() = Some(use_light_icon);
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        true
    }
}
