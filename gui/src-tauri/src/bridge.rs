//! Call decoding and dispatch for the `app` channel.
//!
//! `handle_call` is pure: it decides the response for one call and delegates
//! the side effect to the icon applier it is given. Transport lives in
//! `commands::channel`.

use serde_json::Value;

/// Name of the channel the UI layer calls into.
pub const CHANNEL_NAME: &str = "app";
pub const SET_LAUNCHER_ICON: &str = "setLauncherIcon";
pub const USE_LIGHT_ICON_ARG: &str = "useLightIcon";

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
const MISSING_USE_LIGHT_ICON: &str = "Missing useLightIcon argument";

/// One inbound call: method name plus an untyped argument payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeRequest {
    pub method: String,
    pub arguments: Value,
}

impl ChromeRequest {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Boolean argument `key`; `None` if the payload is not a map, the key is
    /// missing or the value is not a boolean.
    pub fn bool_argument(&self, key: &str) -> Option<bool> {
        self.arguments.as_object()?.get(key)?.as_bool()
    }
}

/// Exactly one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeResponse {
    Success(bool),
    Error { code: String, message: String },
    NotImplemented,
}

impl ChromeResponse {
    fn invalid_argument(message: &str) -> Self {
        Self::Error {
            code: INVALID_ARGUMENT.to_string(),
            message: message.to_string(),
        }
    }
}

/// Decides the response for `request`. `apply_icon` runs only for a
/// well-formed `setLauncherIcon` call.
pub fn handle_call<F>(request: &ChromeRequest, apply_icon: F) -> ChromeResponse
where
    F: FnOnce(bool) -> bool,
{
    match request.method.as_str() {
        SET_LAUNCHER_ICON => match request.bool_argument(USE_LIGHT_ICON_ARG) {
            Some(use_light_icon) => ChromeResponse::Success(apply_icon(use_light_icon)),
            None => {
                tracing::debug!(arguments = %request.arguments, "rejected {SET_LAUNCHER_ICON} call");
                ChromeResponse::invalid_argument(MISSING_USE_LIGHT_ICON)
            }
        },
        other => {
            tracing::debug!(method = other, "method not implemented on channel {CHANNEL_NAME}");
            ChromeResponse::NotImplemented
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    fn call(method: &str, arguments: Value) -> (ChromeResponse, Option<bool>) {
        let seen = Cell::new(None);
        let response = handle_call(&ChromeRequest::new(method, arguments), |light| {
            seen.set(Some(light));
            true
        });
        (response, seen.get())
    }

    fn missing_argument() -> ChromeResponse {
        ChromeResponse::Error {
            code: "INVALID_ARGUMENT".to_string(),
            message: "Missing useLightIcon argument".to_string(),
        }
    }

    #[test]
    fn set_launcher_icon_delegates_flag() {
        assert_eq!(
            call("setLauncherIcon", json!({ "useLightIcon": true })),
            (ChromeResponse::Success(true), Some(true))
        );
        assert_eq!(
            call("setLauncherIcon", json!({ "useLightIcon": false })),
            (ChromeResponse::Success(true), Some(false))
        );
    }

    #[test]
    fn applier_result_is_passed_through() {
        let request = ChromeRequest::new("setLauncherIcon", json!({ "useLightIcon": true }));
        assert_eq!(
            handle_call(&request, |_| false),
            ChromeResponse::Success(false)
        );
    }

    #[test]
    fn empty_map_is_invalid_argument() {
        assert_eq!(call("setLauncherIcon", json!({})), (missing_argument(), None));
    }

    #[test]
    fn wrong_type_is_invalid_argument() {
        assert_eq!(
            call("setLauncherIcon", json!({ "useLightIcon": "yes" })),
            (missing_argument(), None)
        );
        assert_eq!(
            call("setLauncherIcon", json!({ "useLightIcon": 1 })),
            (missing_argument(), None)
        );
    }

    #[test]
    fn non_map_payload_is_invalid_argument() {
        assert_eq!(call("setLauncherIcon", Value::Null), (missing_argument(), None));
        assert_eq!(call("setLauncherIcon", json!([true])), (missing_argument(), None));
        assert_eq!(call("setLauncherIcon", json!(true)), (missing_argument(), None));
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        assert_eq!(
            call("unknownMethod", json!({ "useLightIcon": true })),
            (ChromeResponse::NotImplemented, None)
        );
    }

    #[test]
    fn method_names_are_case_sensitive() {
        assert_eq!(
            call("SetLauncherIcon", json!({ "useLightIcon": true })),
            (ChromeResponse::NotImplemented, None)
        );
    }
}
