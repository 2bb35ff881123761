//! UI Errors
//!
//! One taxonomy for everything a controller can report to the user.

use thiserror::Error;

use crate::store::ToastKind;

/// Message shown for transport failures
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Rejected at the trigger, nothing was sent
    #[error("{0}")]
    Validation(String),
    /// Requested change is already in effect, nothing was sent
    #[error("{0}")]
    Unchanged(String),
    /// Server answered with `success: false`
    #[error("{0}")]
    Rejected(String),
    /// Network error, non-OK status or unparseable body
    #[error("transport error: {0}")]
    Transport(String),
    /// Page wiring problem (missing endpoint, element or config)
    #[error("configuration error: {0}")]
    Config(String),
}

impl UiError {
    pub fn toast_kind(&self) -> ToastKind {
        match self {
            UiError::Validation(_) => ToastKind::Warning,
            UiError::Unchanged(_) => ToastKind::Info,
            UiError::Rejected(_) | UiError::Transport(_) | UiError::Config(_) => ToastKind::Error,
        }
    }

    /// Text for the toast. Transport and config details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            UiError::Validation(m) | UiError::Unchanged(m) | UiError::Rejected(m) => m.clone(),
            UiError::Transport(_) | UiError::Config(_) => GENERIC_ERROR.to_string(),
        }
    }
}

/// Render a JS exception for logs and error messages
pub(crate) fn js_error(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_kind_by_category() {
        assert_eq!(UiError::Validation("x".into()).toast_kind(), ToastKind::Warning);
        assert_eq!(UiError::Unchanged("x".into()).toast_kind(), ToastKind::Info);
        assert_eq!(UiError::Rejected("x".into()).toast_kind(), ToastKind::Error);
        assert_eq!(UiError::Transport("x".into()).toast_kind(), ToastKind::Error);
    }

    #[test]
    fn test_transport_details_are_not_shown() {
        let err = UiError::Transport("HTTP 502".into());
        assert_eq!(err.user_message(), GENERIC_ERROR);
        assert_eq!(err.to_string(), "transport error: HTTP 502");
        assert_eq!(UiError::Rejected("Order locked".into()).user_message(), "Order locked");
    }
}
