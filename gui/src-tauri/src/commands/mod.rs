//! Tauri commands exposed to the UI layer.

pub mod channel;
