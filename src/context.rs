//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_kebab::KebabSignals;

use crate::config::Endpoints;
use crate::error::UiError;
use crate::store::{store_push_toast, store_set_cart_count, AppStore, ToastKind};

/// Page-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// CSRF token for JSON headers and form fields
    csrf_token: StoredValue<String>,
    /// URL table injected by the page
    endpoints: StoredValue<Endpoints>,
    /// Kebab menu state shared by every menu on the page
    pub kebab: KebabSignals,
    store: AppStore,
}

impl AppContext {
    pub fn new(csrf_token: String, endpoints: Endpoints, kebab: KebabSignals, store: AppStore) -> Self {
        Self {
            csrf_token: StoredValue::new(csrf_token),
            endpoints: StoredValue::new(endpoints),
            kebab,
            store,
        }
    }

    pub fn csrf_token(&self) -> String {
        self.csrf_token.get_value()
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints.get_value()
    }

    /// Show a toast
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        store_push_toast(&self.store, kind, None, message);
    }

    /// Show a titled toast
    pub fn notify_titled(&self, kind: ToastKind, title: &str, message: impl Into<String>) {
        store_push_toast(&self.store, kind, Some(title), message);
    }

    /// Record the cart size reported by the server
    pub fn set_cart_count(&self, count: u32) {
        store_set_cart_count(&self.store, count);
    }

    /// Log an error and show it as a toast
    pub fn report(&self, area: &str, err: &UiError) {
        match err {
            UiError::Validation(_) | UiError::Unchanged(_) => log::info!("[{}] {}", area, err),
            _ => log::error!("[{}] {}", area, err),
        }
        self.notify(err.toast_kind(), err.user_message());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
