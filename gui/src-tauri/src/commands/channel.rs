//! Tauri transport for the `app` channel.
//!
//! The UI calls `invoke("app", { method, arguments })`. Success resolves to a
//! boolean; errors reject with `{ code, message }`.

use serde::ser::SerializeStruct;
use serde::Serialize;
use serde_json::Value;
use tauri::{AppHandle, Manager, Runtime, State};
use thiserror::Error;

use crate::bridge::{ChromeRequest, ChromeResponse, CHANNEL_NAME};
use crate::chrome::{TauriChrome, WindowChrome};
use crate::config::MAIN_WINDOW_LABEL;
use crate::host::WindowHost;

pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("{message}")]
    Call { code: String, message: String },
    #[error("{0} is not implemented on channel app")]
    NotImplemented(String),
}

impl ChannelError {
    pub fn code(&self) -> &str {
        match self {
            Self::Call { code, .. } => code,
            Self::NotImplemented(_) => NOT_IMPLEMENTED,
        }
    }
}

impl Serialize for ChannelError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ChannelError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Maps a bridge response onto the command result.
pub fn into_result(response: ChromeResponse, method: &str) -> Result<bool, ChannelError> {
    match response {
        ChromeResponse::Success(changed) => Ok(changed),
        ChromeResponse::Error { code, message } => Err(ChannelError::Call { code, message }),
        ChromeResponse::NotImplemented => Err(ChannelError::NotImplemented(method.to_string())),
    }
}

/// Entry point of the `app` channel.
#[tauri::command]
pub fn app<R: Runtime>(
    handle: AppHandle<R>,
    host: State<'_, WindowHost>,
    method: String,
    arguments: Option<Value>,
) -> Result<bool, ChannelError> {
    let request = ChromeRequest::new(method, arguments.unwrap_or(Value::Null));
    let chrome = handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .map(TauriChrome::new);
    tracing::debug!(channel = CHANNEL_NAME, method = %request.method, "channel call");

    let response = host.handle_call(
        &request,
        chrome.as_ref().map(|c| c as &dyn WindowChrome),
    );
    into_result(response, &request.method)
}
