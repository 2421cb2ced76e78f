//! Window host state: owns the preference store and icon resolver, attaches
//! the chrome bridge once, and restores the persisted icon at startup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::bridge::{self, ChromeRequest, ChromeResponse};
use crate::chrome::WindowChrome;
use crate::icon::{self, IconResolver, IconVariant};
use crate::prefs::PreferenceStore;

/// What happened when the UI surface attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A previous attach already ran; nothing was done.
    AlreadyAttached,
    /// Default variant persisted (or nothing persisted); compiled-in icon kept.
    DefaultKept,
    Applied(IconVariant),
    ApplyFailed(IconVariant),
}

pub struct WindowHost {
    resolver: IconResolver,
    store: Box<dyn PreferenceStore>,
    attached: AtomicBool,
    last_applied: Mutex<Option<IconVariant>>,
}

impl WindowHost {
    pub fn new(resolver: IconResolver, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            resolver,
            store,
            attached: AtomicBool::new(false),
            last_applied: Mutex::new(None),
        }
    }

    /// Runs once, after the bridge is registered: restores the persisted variant.
    pub fn attach(&self, chrome: Option<&dyn WindowChrome>) -> AttachOutcome {
        if self.attached.swap(true, Ordering::SeqCst) {
            return AttachOutcome::AlreadyAttached;
        }

        let variant = IconVariant::from_light_flag(self.store.load());
        tracing::info!(?variant, assets = %self.resolver.asset_dir().display(), "window host attached");
        if !variant.is_light() {
            self.record(IconVariant::Default);
            return AttachOutcome::DefaultKept;
        }

        if self.apply(variant, chrome) {
            AttachOutcome::Applied(variant)
        } else {
            tracing::warn!(?variant, "could not restore persisted launcher icon");
            AttachOutcome::ApplyFailed(variant)
        }
    }

    /// Handles one channel call against the current window.
    pub fn handle_call(
        &self,
        request: &ChromeRequest,
        chrome: Option<&dyn WindowChrome>,
    ) -> ChromeResponse {
        bridge::handle_call(request, |use_light_icon| {
            self.apply(IconVariant::from_light_flag(use_light_icon), chrome)
        })
    }

    /// Variant most recently shown on the window, if any.
    pub fn last_applied(&self) -> Option<IconVariant> {
        *self
            .last_applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, variant: IconVariant, chrome: Option<&dyn WindowChrome>) -> bool {
        let applied = icon::apply_icon(variant, chrome, &self.resolver, &*self.store);
        if applied {
            self.record(variant);
        }
        applied
    }

    fn record(&self, variant: IconVariant) {
        *self
            .last_applied
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(variant);
    }
}
