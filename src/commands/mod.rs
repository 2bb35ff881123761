//! Server Command Wrappers
//!
//! Frontend bindings to the storefront endpoints, organized by domain.
//! JSON calls go through `gloo-net`; deletes post a real form so the server's
//! redirect drives navigation.

mod mutation;
mod cart;
mod products;
mod export;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

use crate::error::{js_error, UiError};
use crate::models::MutationResponse;

// Re-export all public items
pub use mutation::*;
pub use cart::*;
pub use products::*;
pub use export::*;

/// Delay before reloading so the success toast is seen
pub const RELOAD_DELAY_MS: u32 = 500;

fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::Config("no browser window".into()))
}

fn transport(err: wasm_bindgen::JsValue) -> UiError {
    UiError::Transport(js_error(&err))
}

fn http_error(err: gloo_net::Error) -> UiError {
    UiError::Transport(err.to_string())
}

fn status_error(status: u16) -> UiError {
    UiError::Transport(format!("HTTP error! status: {}", status))
}

/// Read `(ok, status, body)` off a response
async fn read_reply(response: Response) -> Result<(bool, u16, String), UiError> {
    let (ok, status) = (response.ok(), response.status());
    let text = response.text().await.map_err(http_error)?;
    Ok((ok, status, text))
}

/// Interpret the body of a JSON mutation reply.
///
/// A non-OK status still counts as an application answer when its body is
/// a `success: false` reply; anything else is a transport failure.
pub(crate) fn classify_reply(ok: bool, status: u16, text: &str) -> Result<MutationResponse, UiError> {
    match serde_json::from_str::<MutationResponse>(text) {
        Ok(reply) if ok || !reply.success => Ok(reply),
        Ok(_) => Err(status_error(status)),
        Err(_) if !ok => Err(status_error(status)),
        Err(e) => Err(UiError::Transport(format!("invalid JSON reply: {}", e))),
    }
}

/// POST a JSON body with the CSRF header and parse the standard reply
pub(crate) async fn post_json<B: Serialize>(url: &str, csrf: &str, body: &B, ajax: bool) -> Result<MutationResponse, UiError> {
    let mut builder = Request::post(url)
        .header("X-CSRFToken", csrf)
        .credentials(RequestCredentials::SameOrigin);
    if ajax {
        builder = builder.header("X-Requested-With", "XMLHttpRequest");
    }
    let request = builder.json(body).map_err(|e| UiError::Config(e.to_string()))?;

    let response = request.send().await.map_err(http_error)?;
    let (ok, status, text) = read_reply(response).await?;
    classify_reply(ok, status, &text)
}

/// GET and deserialize a JSON document
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, UiError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::SameOrigin)
        .send()
        .await
        .map_err(http_error)?;

    let (ok, status, text) = read_reply(response).await?;
    if !ok {
        return Err(status_error(status));
    }
    serde_json::from_str(&text).map_err(|e| UiError::Transport(format!("invalid JSON reply: {}", e)))
}

/// Build and submit `<form method=POST>` with the CSRF hidden field
pub(crate) fn submit_post_form(action: &str, csrf: &str) -> Result<(), UiError> {
    let document = window()?
        .document()
        .ok_or_else(|| UiError::Config("no document".into()))?;
    let body = document.body().ok_or_else(|| UiError::Config("no <body>".into()))?;

    let form: web_sys::HtmlFormElement = document
        .create_element("form")
        .map_err(transport)?
        .dyn_into()
        .map_err(|_| UiError::Config("form element cast".into()))?;
    form.set_method("POST");
    form.set_action(action);

    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .map_err(transport)?
        .dyn_into()
        .map_err(|_| UiError::Config("input element cast".into()))?;
    input.set_type("hidden");
    input.set_name("csrfmiddlewaretoken");
    input.set_value(csrf);

    form.append_child(&input).map_err(transport)?;
    body.append_child(&form).map_err(transport)?;
    form.submit().map_err(transport)
}

/// `location.search` of the current page
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Decoded value of `key` in a `?a=1&b=2` query string
pub fn query_value(search: &str, key: &str) -> Option<String> {
    search.trim_start_matches('?').split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then(|| {
            percent_encoding::percent_decode_str(&v.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
    })
}

/// Reload the page after `delay_ms`
pub async fn reload_after(delay_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().reload() {
            log::error!("[page] reload failed: {}", js_error(&e));
        }
    }
}

/// Open the browser print dialog
pub fn print_page() {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.print() {
            log::warn!("[page] print failed: {}", js_error(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        let search = "?period=custom&date_from=2024-01-01&q=red+lamp%21";
        assert_eq!(query_value(search, "period").as_deref(), Some("custom"));
        assert_eq!(query_value(search, "date_from").as_deref(), Some("2024-01-01"));
        assert_eq!(query_value(search, "q").as_deref(), Some("red lamp!"));
        assert_eq!(query_value(search, "date_to"), None);
        assert_eq!(query_value("", "period"), None);
    }

    #[test]
    fn test_rejection_body_survives_error_status() {
        let reply = classify_reply(false, 400, r#"{"success": false, "message": "Invalid status"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(
            reply.into_result("Failed to update status"),
            Err(UiError::Rejected("Invalid status".into()))
        );
    }

    #[test]
    fn test_error_status_without_rejection_body() {
        assert_eq!(
            classify_reply(false, 500, "<html>Server Error</html>"),
            Err(UiError::Transport("HTTP error! status: 500".into()))
        );
        assert_eq!(
            classify_reply(false, 502, r#"{"success": true}"#),
            Err(UiError::Transport("HTTP error! status: 502".into()))
        );
    }

    #[test]
    fn test_malformed_body_on_ok_status() {
        let err = classify_reply(true, 200, "not json").unwrap_err();
        assert!(matches!(err, UiError::Transport(ref m) if m.starts_with("invalid JSON reply")));
    }

    #[test]
    fn test_success_reply() {
        let reply = classify_reply(true, 200, r#"{"success": true, "message": "Order updated"}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.message.as_deref(), Some("Order updated"));
    }

}
