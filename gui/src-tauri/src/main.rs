//! Bettbox Desktop - Tauri runner entry point.
//!
//! Hosts the UI in the main window and bridges the host-only capabilities
//! the UI needs over the `app` channel:
//! - launcher/window icon variant (default or light)
//! - persistence of that choice across restarts
//!
//! Everything else happens in the UI layer.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod bridge;
mod chrome;
mod commands;
mod config;
mod host;
mod icon;
mod logging;
mod prefs;
#[cfg(test)]
mod testing;

use chrome::{TauriChrome, WindowChrome};
use config::{ShellConfig, MAIN_WINDOW_LABEL};
use host::WindowHost;
use icon::IconResolver;
use tauri::Manager;

fn main() {
    logging::init();

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![commands::channel::app])
        .setup(|app| {
            let resource_dir = app.path().resource_dir()?;
            let config = ShellConfig::from_env(&resource_dir);
            let host = WindowHost::new(
                IconResolver::new(&config.asset_dir),
                prefs::platform_store(&config),
            );
            // The `app` channel answers once the host is managed.
            app.manage(host);

            let window = app.get_webview_window(MAIN_WINDOW_LABEL);
            #[cfg(debug_assertions)]
            {
                // Open devtools in debug builds
                if let Some(w) = &window {
                    w.open_devtools();
                }
            }

            let chrome = window.map(TauriChrome::new);
            let outcome = app
                .state::<WindowHost>()
                .attach(chrome.as_ref().map(|c| c as &dyn WindowChrome));
            tracing::debug!(?outcome, "startup icon restored");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
